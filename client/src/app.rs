//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{admin::AdminDashboardPage, index::IndexPage, login::LoginPage, student::StudentDashboardPage};
use crate::state::rejection::provide_rejection_handler;
use crate::state::session::SessionContext;
use crate::state::storage::default_storage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, config and UI contexts, restores the persisted
/// session once running in the browser, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let rejection_redirect = config.rejection_redirect;
    let session = SessionContext::new(default_storage());
    let ui = RwSignal::new(UiState::default());

    provide_context(config);
    provide_context(session);
    provide_context(ui);

    // Effects only run in the browser, which is where the session is persisted.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/campus.css"/>
        <Title text="Smart Campus"/>

        <Router>
            <RejectionBoundary session=session mode=rejection_redirect>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=IndexPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("student")
                        view=|| view! { <ProtectedRoute><StudentDashboardPage/></ProtectedRoute> }
                    />
                    <Route
                        path=StaticSegment("admin")
                        view=|| view! { <ProtectedRoute requires_admin=true><AdminDashboardPage/></ProtectedRoute> }
                    />
                </Routes>
            </RejectionBoundary>
        </Router>
    }
}

/// Installs the API rejection handler, which needs the router's navigator.
#[component]
fn RejectionBoundary(
    session: SessionContext,
    mode: crate::config::RejectionRedirect,
    children: Children,
) -> impl IntoView {
    provide_rejection_handler(session, mode);
    children()
}
