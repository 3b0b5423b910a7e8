mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Some(e) = config::dotenv_failure(&dotenv) {
        tracing::warn!(error = %e, "failed to load .env");
    }

    let config = ServerConfig::from_env().inspect_err(|e| tracing::error!(error = %e, "invalid server config"))?;
    let options = config.leptos_options().inspect_err(|e| tracing::error!(error = %e, "leptos options unavailable"))?;
    tracing::info!(site_root = %options.site_root, "serving front end");

    let app = routes::app(options);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .inspect_err(|e| tracing::error!(error = %e, port = config.port, "failed to bind"))?;

    tracing::info!(port = config.port, "campus front end listening");
    axum::serve(listener, app).await?;
    Ok(())
}
