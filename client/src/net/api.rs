//! Outbound lead submission to the hosted form service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport returns an error, since submissions are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx responses both surface as `SubmitError`.
//! `user_message` maps each to the inline text shown under the form; there
//! is no retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::LeadPayload;
use crate::config::FORM_ENDPOINT;

/// Shown for any non-2xx response.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed. Please try again.";

/// Shown when an error carries no usable message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Errors from a lead submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The form service answered outside the 2xx range.
    #[error("form service returned status {0}")]
    Status(u16),

    /// The payload could not be serialized.
    #[error("payload encode failed: {0}")]
    Encode(String),
}

impl SubmitError {
    /// Inline message for the visitor.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(msg) if !msg.trim().is_empty() => msg.clone(),
            Self::Status(_) => SUBMISSION_FAILED_MESSAGE.to_owned(),
            Self::Network(_) | Self::Encode(_) => GENERIC_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Sends a JSON body and reports the response status.
pub trait LeadTransport {
    /// POST `body` to `url` with JSON `Content-Type` and `Accept` headers.
    ///
    /// Resolves to the HTTP status, or an error message if no response
    /// arrived.
    fn post_json(&self, url: &str, body: String) -> impl Future<Output = Result<u16, String>>;
}

/// `fetch`-backed transport used by the page.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl LeadTransport for BrowserTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16, String> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .body(body)
                .map_err(|e| e.to_string())?
                .send()
                .await
                .map_err(|e| e.to_string())?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err("not available on server".to_owned())
        }
    }
}

/// Any 2xx status counts as delivered.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// POST `payload` once to the form endpoint.
///
/// # Errors
///
/// Returns `Encode` if the payload cannot be serialized, `Network` if the
/// transport fails, and `Status` for a non-2xx response.
pub async fn submit_lead<T: LeadTransport>(transport: &T, payload: &LeadPayload) -> Result<(), SubmitError> {
    let body = payload.to_json().map_err(|e| SubmitError::Encode(e.to_string()))?;
    let status = transport
        .post_json(FORM_ENDPOINT, body)
        .await
        .map_err(SubmitError::Network)?;
    if !is_success_status(status) {
        return Err(SubmitError::Status(status));
    }
    Ok(())
}
