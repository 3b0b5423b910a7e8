//! REST API client for the campus service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. HTTP 401 on a data call maps to
//! [`ApiError::Unauthorized`] so the app root can end the session; the login
//! exchange maps it to an ordinary "invalid credentials" failure instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    Announcement, AttendanceRecord, LoginResponse, MarkAttendance, NewAnnouncement, NewOutingRequest,
    OutingRequest, OutingStatus, StudentProfile,
};
use crate::config::ClientConfig;

#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/login";
#[cfg(any(test, feature = "hydrate"))]
const PROFILE_PATH: &str = "/profile";
#[cfg(any(test, feature = "hydrate"))]
const ATTENDANCE_PATH: &str = "/attendance";
#[cfg(any(test, feature = "hydrate"))]
const OUTING_PATH: &str = "/outing";
#[cfg(any(test, feature = "hydrate"))]
const ANNOUNCEMENTS_PATH: &str = "/announcements";
#[cfg(any(test, feature = "hydrate"))]
const STUDENTS_PATH: &str = "/students";

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API rejected the bearer token (HTTP 401).
    #[error("session expired, please sign in again")]
    Unauthorized,

    /// Any other non-success status, with the server's message when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Map a non-success response to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
fn error_for_status(status: u16, body: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }

    if status == 401 {
        return ApiError::Unauthorized;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

/// A 401 from the login exchange means bad credentials, not an expired session.
#[cfg(any(test, feature = "hydrate"))]
fn login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized => ApiError::Status { status: 401, message: INVALID_CREDENTIALS_MESSAGE.to_owned() },
        other => other,
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn outing_endpoint(id: &str) -> String {
    format!("{OUTING_PATH}/{id}")
}

/// Thin client bound to one API root and, optionally, one bearer token.
#[derive(Clone, Debug)]
#[cfg_attr(not(any(test, feature = "hydrate")), allow(dead_code))]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, token: Option<String>) -> Self {
        Self { base_url: config.api_base_url.clone(), token }
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> Option<String> {
        self.token.as_deref().map(|t| format!("Bearer {t}"))
    }

    #[cfg(feature = "hydrate")]
    fn request(
        &self,
        open: fn(&str) -> gloo_net::http::RequestBuilder,
        path: &str,
    ) -> gloo_net::http::RequestBuilder {
        let builder = open(&self.endpoint(path));
        match self.authorization() {
            Some(header) => builder.header("Authorization", &header),
            None => builder,
        }
    }

    /// Exchange credentials for a token and identity via `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError::Status`] carrying a user-facing message when the
    /// credentials are rejected, or a transport/decode error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = send(self.request(gloo_net::http::Request::post, LOGIN_PATH).json(&payload))
                .await
                .map_err(login_error)?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the signed-in student's profile from `/profile`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn profile(&self) -> Result<StudentProfile, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::get, PROFILE_PATH).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch the signed-in student's attendance from `/attendance`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::get, ATTENDANCE_PATH).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Record one attendance entry via `POST /attendance` (admin).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn mark_attendance(&self, entry: &MarkAttendance) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            send(self.request(gloo_net::http::Request::post, ATTENDANCE_PATH).json(entry)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = entry;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch outing requests from `/outing`. Students see their own; admins see all.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn outing_requests(&self) -> Result<Vec<OutingRequest>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::get, OUTING_PATH).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// File a new outing request via `POST /outing` (student).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn create_outing_request(&self, request: &NewOutingRequest) -> Result<OutingRequest, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::post, OUTING_PATH).json(request)).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    /// Approve or reject an outing request via `PUT /outing/{id}` (admin).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn update_outing_status(&self, id: &str, status: OutingStatus) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "status": status });
            send(self.request(gloo_net::http::Request::put, &outing_endpoint(id)).json(&payload)).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch all announcements from `/announcements`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn announcements(&self) -> Result<Vec<Announcement>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::get, ANNOUNCEMENTS_PATH).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Publish an announcement via `POST /announcements` (admin).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn create_announcement(&self, announcement: &NewAnnouncement) -> Result<Announcement, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp =
                send(self.request(gloo_net::http::Request::post, ANNOUNCEMENTS_PATH).json(announcement)).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = announcement;
            Err(ApiError::Unavailable)
        }
    }

    /// Fetch every student profile from `/students` (admin).
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on any failed or rejected request.
    pub async fn students(&self) -> Result<Vec<StudentProfile>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = send(self.request(gloo_net::http::Request::get, STUDENTS_PATH).build()).await?;
            decode(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn send(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, ApiError> {
    let resp = request
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(error_for_status(status, &body))
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}
