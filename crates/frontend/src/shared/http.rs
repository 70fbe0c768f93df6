//! HTTP plumbing shared by every gateway: base-URL resolution, bearer-token
//! attachment and uniform response handling, including the global 401
//! teardown.

use std::fmt;

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::use_context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::shared::query_cache::{DependencyKey, QueryCacheHandle};
use crate::system::auth::context::Session;

/// Port the backend listens on when no explicit base is configured.
const BACKEND_PORT: u16 = 3000;

/// Resolve the backend base URL. A `TRADEWARE_API_BASE` value baked in at
/// build time wins; otherwise the backend is assumed to live on the page's
/// host at the default port.
pub fn api_base() -> String {
    if let Some(base) = option_env!("TRADEWARE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "localhost".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Request verb, kept as data so route planning can be asserted in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl Verb {
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy surfaced to screens.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The backend rejected the session. Storage is already wiped and the
    /// page is on its way to the login route by the time a caller sees this.
    Unauthorized,
    /// Any other non-success status, carrying the server's message when it
    /// sent one.
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            ApiError::Network(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "Network error: {}", message),
            ApiError::Unauthorized => write!(f, "Session expired"),
            ApiError::Status { status, message } => {
                if message.is_empty() {
                    write!(f, "Request failed with status {}", status)
                } else {
                    f.write_str(message)
                }
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Pull a human-readable message out of an error body. JSON bodies carry it
/// in a `message` field; anything else is used as-is.
fn message_from_body(status_text: &str, body: &str) -> String {
    if body.is_empty() {
        return status_text.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|message| message.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| body.to_string()),
        Err(_) => body.to_string(),
    }
}

/// Shared request pipeline. Constructed once at startup with the session and
/// the option-cache handle, then cloned into whatever talks to the backend.
/// Every request funnels through [`ApiClient::dispatch`], which is the only
/// place that inspects statuses and the only place that navigates (on 401).
#[derive(Clone)]
pub struct ApiClient {
    base: String,
    session: Session,
    cache: QueryCacheHandle,
}

impl ApiClient {
    pub fn new(session: Session, cache: QueryCacheHandle) -> Self {
        Self {
            base: api_base(),
            session,
            cache,
        }
    }

    pub fn session(&self) -> Session {
        self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Attach the bearer token when a credential is stored.
    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Drop cached options for `resource` so mounted hooks refetch. Gateways
    /// call this after every successful write.
    pub fn invalidate_options(&self, resource: &'static str, dep: Option<DependencyKey>) {
        self.cache.invalidate(resource, dep);
    }

    async fn dispatch(
        &self,
        verb: Verb,
        path: &str,
        built: Result<Request, gloo_net::Error>,
    ) -> Result<Response, ApiError> {
        let request =
            built.map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?;
        let response = request.send().await.map_err(|e| {
            log::error!("{} {} did not reach the backend: {}", verb, path, e);
            ApiError::Network(e.to_string())
        })?;

        if response.status() == 401 {
            log::warn!("{} {} returned 401, tearing down the session", verb, path);
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }
        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            let message = message_from_body(&status_text, &body);
            log::warn!("{} {} returned {}: {}", verb, path, status, message);
            return Err(ApiError::Status { status, message });
        }
        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to parse response: {}", e)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let built = self.authorized(Request::get(&self.url(path))).build();
        let response = self.dispatch(Verb::Get, path, built).await?;
        Self::parse(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let built = self.authorized(Request::post(&self.url(path))).json(body);
        let response = self.dispatch(Verb::Post, path, built).await?;
        Self::parse(response).await
    }

    /// POST with a JSON body where the response body does not matter.
    pub async fn post_json_unit<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let built = self.authorized(Request::post(&self.url(path))).json(body);
        self.dispatch(Verb::Post, path, built).await.map(|_| ())
    }

    /// Bodyless POST used by action routes (approve, activate, legacy
    /// delete).
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        let built = self.authorized(Request::post(&self.url(path))).build();
        self.dispatch(Verb::Post, path, built).await.map(|_| ())
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let built = self.authorized(Request::put(&self.url(path))).json(body);
        let response = self.dispatch(Verb::Put, path, built).await?;
        Self::parse(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let built = self.authorized(Request::delete(&self.url(path))).build();
        self.dispatch(Verb::Delete, path, built).await.map(|_| ())
    }

    /// Forward a caller-built multipart body untouched; the browser fills in
    /// the boundary header itself.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let built = self.authorized(Request::post(&self.url(path))).body(form);
        let response = self.dispatch(Verb::Post, path, built).await?;
        Self::parse(response).await
    }

    pub async fn put_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let built = self.authorized(Request::put(&self.url(path))).body(form);
        let response = self.dispatch(Verb::Put, path, built).await?;
        Self::parse(response).await
    }
}

/// Grab the request pipeline provided at the application root.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_print_uppercase() {
        assert_eq!(Verb::Get.as_str(), "GET");
        assert_eq!(Verb::Delete.to_string(), "DELETE");
    }

    #[test]
    fn error_message_prefers_the_json_message_field() {
        assert_eq!(
            message_from_body("Bad Request", r#"{"message":"Name already taken"}"#),
            "Name already taken"
        );
    }

    #[test]
    fn error_message_falls_back_to_body_then_status_text() {
        assert_eq!(message_from_body("Bad Request", "boom"), "boom");
        assert_eq!(
            message_from_body("Bad Request", r#"{"error":"x"}"#),
            r#"{"error":"x"}"#
        );
        assert_eq!(message_from_body("Bad Request", ""), "Bad Request");
    }

    #[test]
    fn status_helper_exposes_the_code() {
        let err = ApiError::Status {
            status: 404,
            message: "missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::Network("offline".to_string()).status(), None);
    }

    #[test]
    fn display_keeps_server_messages_verbatim() {
        let err = ApiError::Status {
            status: 409,
            message: "Variant already exists".to_string(),
        };
        assert_eq!(err.to_string(), "Variant already exists");
        let blank = ApiError::Status {
            status: 500,
            message: String::new(),
        };
        assert_eq!(blank.to_string(), "Request failed with status 500");
    }
}
