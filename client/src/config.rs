//! Client configuration baked in at build time.
//!
//! Optional:
//! - `CAMPUS_API_BASE_URL`: campus REST API root (default `http://localhost:5000/api`)
//! - `CAMPUS_REJECTION_REDIRECT`: `reload` (default) or `navigate`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// How the app leaves a page after the API rejects the session token.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RejectionRedirect {
    /// Full page load of the login route, dropping all in-memory state.
    #[default]
    FullReload,
    /// Client-side navigation that keeps the app running.
    InApp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root without a trailing slash.
    pub api_base_url: String,
    pub rejection_redirect: RejectionRedirect,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), rejection_redirect: RejectionRedirect::default() }
    }
}

impl ClientConfig {
    /// Read settings captured by the compiler from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CAMPUS_API_BASE_URL"), option_env!("CAMPUS_REJECTION_REDIRECT"))
    }

    fn from_values(api_base_url: Option<&str>, rejection_redirect: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let rejection_redirect = parse_rejection_redirect(rejection_redirect).unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; using full reload");
            RejectionRedirect::default()
        });
        Self { api_base_url, rejection_redirect }
    }
}

fn parse_rejection_redirect(raw: Option<&str>) -> Result<RejectionRedirect, String> {
    match raw.map(str::trim).unwrap_or("reload") {
        "" | "reload" => Ok(RejectionRedirect::FullReload),
        "navigate" => Ok(RejectionRedirect::InApp),
        other => Err(format!(
            "unsupported CAMPUS_REJECTION_REDIRECT '{other}' (expected 'reload' or 'navigate')"
        )),
    }
}
