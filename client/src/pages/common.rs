//! Helpers shared by the dashboard pages for folding API outcomes into UI state.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::OutingStatus;
use crate::state::ui::Notice;

/// Keep the value of a successful call; remember the first failure.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn absorb<T>(result: Result<T, ApiError>, failure: &mut Option<ApiError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            failure.get_or_insert(e);
            None
        }
    }
}

/// Toast for a failed call. Rejections are handled by the app root and get none.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn failure_notice(title: &str, err: &ApiError) -> Option<Notice> {
    if err.is_unauthorized() {
        return None;
    }
    Some(Notice::error(title, err.to_string()))
}

pub(crate) fn outing_update_notice(status: OutingStatus, demo: bool) -> Notice {
    let suffix = if demo { " (Demo)" } else { "" };
    Notice::success(
        format!("Request {}{suffix}", status.label()),
        format!("The outing request has been {}.", status.as_str()),
    )
}

pub(crate) fn demo_suffix(title: &str, demo: bool) -> String {
    if demo { format!("{title} (Demo)") } else { title.to_owned() }
}

/// API access for a dashboard page: client config plus the root rejection handler.
///
/// Resolved from context while the page is being built, since callbacks may
/// run after the owning scope is gone.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub(crate) struct PageApi {
    config: crate::config::ClientConfig,
    rejection: crate::state::rejection::AuthRejectionHandler,
}

#[cfg(feature = "hydrate")]
impl PageApi {
    pub(crate) fn from_context() -> Self {
        Self {
            config: leptos::prelude::expect_context::<crate::config::ClientConfig>(),
            rejection: crate::state::rejection::use_rejection_handler(),
        }
    }

    pub(crate) fn client(&self, token: Option<String>) -> crate::net::api::ApiClient {
        crate::net::api::ApiClient::new(&self.config, token)
    }

    pub(crate) fn check<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        self.rejection.check(result)
    }
}
