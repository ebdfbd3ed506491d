//! Error type for Github Client

use super::{rate_limit::Rate, transport::RawResponse};
use reqwest::StatusCode;
use serde::Deserialize;
use std::borrow::Cow;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        name: &'static str,
        reason: &'static str,
    },

    #[error("not found: `{0}`")]
    NotFound(String),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("url error")]
    Url(#[from] url::ParseError),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("request failed with `{0}`: {1:?}")]
    GithubClientError(StatusCode, GithubClientError),

    #[error("RateLimit")]
    RateLimit,

    #[error("AbuseLimit")]
    AbuseLimit,
}

impl Error {
    pub(crate) fn invalid_argument(name: &'static str, reason: &'static str) -> Self {
        Error::InvalidArgument { name, reason }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Build the error for a non-success, non-404 response.
    pub(super) fn from_response(response: &RawResponse, rate: &Rate) -> Self {
        let client_error = serde_json::from_str::<GithubClientError>(&response.body).ok();

        if response.status == StatusCode::FORBIDDEN {
            if rate.is_exhausted() {
                return Error::RateLimit;
            }

            let message = client_error
                .as_ref()
                .and_then(|e| e.message.as_deref())
                .unwrap_or_default()
                .to_lowercase();
            if message.contains("abuse") || message.contains("secondary rate limit") {
                return Error::AbuseLimit;
            }
        }

        match client_error {
            Some(e) => Error::GithubClientError(response.status, e),
            None => format!("Request failed: {}", response.status).into(),
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://developer.github.com/v3/#client-errors
#[derive(Debug, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}
