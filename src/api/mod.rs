//! Activities API
//!
//! The three operations the client consumes, plus URL construction and body
//! decoding shared by every transport.
//!
//! | Operation  | Request                                         | 2xx body      | Error body   |
//! |------------|-------------------------------------------------|---------------|--------------|
//! | List       | `GET /activities`                               | roster object | -            |
//! | Sign up    | `POST /activities/{name}/signup?email=`         | `{ message }` | `{ detail }` |
//! | Unregister | `POST /activities/{name}/unregister?email=`     | `{ message }` | `{ detail }` |
//!
//! The HTTP status is the only success discriminator.

mod http;

pub use http::HttpActivityApi;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::model::Roster;

/// Asynchronous access to the activities API.
///
/// Futures are not `Send`: the client runs on a single-threaded event loop.
#[async_trait(?Send)]
pub trait ActivityApi {
    /// Fetch the full roster snapshot. Single request, no retry.
    async fn fetch_all(&self) -> ClientResult<Roster>;

    /// Sign `email` up for `activity`
    async fn signup(&self, activity: &str, email: &str) -> ClientResult<Confirmation>;

    /// Remove `email` from `activity`
    async fn unregister(&self, activity: &str, email: &str) -> ClientResult<Confirmation>;
}

/// A successful mutation acknowledged by the server
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Confirmation {
    /// Server-supplied `message`, when the body carried one
    pub message: Option<String>,
}

impl Confirmation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Server message, or `fallback` when the body had none
    pub fn message_or(&self, fallback: impl FnOnce() -> String) -> String {
        self.message.clone().unwrap_or_else(fallback)
    }
}

// ============ URLs ============

/// `{base}/activities`
pub fn activities_url(base: &str) -> String {
    format!("{}/activities", base)
}

/// `{base}/activities/{name}/signup?email={email}`
pub fn signup_url(base: &str, activity: &str, email: &str) -> String {
    mutation_url(base, activity, "signup", email)
}

/// `{base}/activities/{name}/unregister?email={email}`
pub fn unregister_url(base: &str, activity: &str, email: &str) -> String {
    mutation_url(base, activity, "unregister", email)
}

fn mutation_url(base: &str, activity: &str, action: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        base,
        urlencoding::encode(activity),
        action,
        urlencoding::encode(email)
    )
}

// ============ Body decoding ============

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Pull a string `detail` out of an error body.
///
/// Validation errors carry a structured `detail`; those count as absent.
fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}

/// Decode the response to `GET /activities`
pub fn decode_roster(status: u16, body: &str) -> ClientResult<Roster> {
    if !is_success(status) {
        return Err(ClientError::Api {
            status,
            detail: error_detail(body),
        });
    }

    Ok(serde_json::from_str(body)?)
}

/// Decode the response to a signup or unregister request
pub fn decode_reply(status: u16, body: &str) -> ClientResult<Confirmation> {
    if !is_success(status) {
        return Err(ClientError::Api {
            status,
            detail: error_detail(body),
        });
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string));

    Ok(Confirmation { message })
}
