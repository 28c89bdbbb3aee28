//! HTTP API Bindings
//!
//! Frontend bindings to the recipe backend, organized by domain.
//! Every call carries the session cookie (`credentials: include`).

mod auth;
mod favorite;
mod recipe;

use favorite_sync::ToggleFailure;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::config::AppConfig;

// Re-export all public items
pub use auth::*;
pub use favorite::*;
pub use recipe::*;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never completed (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx status; `message` comes from the body's `error`/`message`
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },
    /// Body could not be encoded or decoded
    #[error("malformed payload: {0}")]
    Payload(String),
}

impl ApiError {
    /// Missing or expired session cookie.
    ///
    /// The JWT layer answers 401 for a missing token and 422 for a malformed one.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, ApiError::Rejected { status: 401 | 422, .. })
    }

    /// Server-provided message, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<ApiError> for ToggleFailure {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected { status, message } => {
                ToggleFailure::RejectedByServer { status, message }
            }
            ApiError::Network(detail) | ApiError::Payload(detail) => {
                ToggleFailure::NetworkFailure(detail)
            }
        }
    }
}

/// Error body shape shared by all endpoints
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ErrorBody {
    fn into_message(self) -> Option<String> {
        self.error.or(self.message).filter(|m| !m.is_empty())
    }
}

fn js_error(err: JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Payload(e.to_string()))
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, ApiError> {
    let url = AppConfig::get().endpoint(path);
    log::debug!("[API] {} {}", method, path);

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    if let Some(body) = body.as_deref() {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Network(js_error(e)))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_error(e)))?;

    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            let detail = js_error(e);
            log::error!("[API] {} {} did not complete: {}", method, path, detail);
            ApiError::Network(detail)
        })?;
    value
        .dyn_into::<Response>()
        .map_err(|e| ApiError::Payload(js_error(e)))
}

async fn read_json(response: &Response) -> Result<JsValue, ApiError> {
    let promise = response.json().map_err(|e| ApiError::Payload(js_error(e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Payload(js_error(e)))
}

/// Turn a non-2xx response into `ApiError::Rejected`, keeping any body message
async fn rejection(method: &str, path: &str, response: &Response) -> ApiError {
    let status = response.status();
    let message = match read_json(response).await {
        Ok(value) => serde_wasm_bindgen::from_value::<ErrorBody>(value)
            .ok()
            .and_then(ErrorBody::into_message),
        Err(_) => None,
    };
    log::warn!(
        "[API] {} {} rejected with {}: {}",
        method,
        path,
        status,
        message.as_deref().unwrap_or("<no message>")
    );
    ApiError::Rejected { status, message }
}

/// Send a request and decode a JSON success body
async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = send(method, path, body).await?;
    if !response.ok() {
        return Err(rejection(method, path, &response).await);
    }
    let value = read_json(&response).await?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Payload(e.to_string()))
}

/// Send a request whose success body is ignored
async fn fetch_unit(method: &str, path: &str, body: Option<String>) -> Result<(), ApiError> {
    let response = send(method, path, body).await?;
    if !response.ok() {
        return Err(rejection(method, path, &response).await);
    }
    Ok(())
}
