use crate::client::{HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
use reqwest::header::HeaderMap;
use std::str::FromStr;

/// Rate limit information reported alongside every REST API v3 response.
///
/// Unauthenticated requests are limited to 60 per hour, authenticated requests
/// to 5,000 per hour.
///
/// GitHub API docs: https://developer.github.com/v3/#rate-limiting
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rate {
    pub limit: Option<usize>,
    pub remaining: Option<usize>,
    /// UTC epoch seconds at which the current window resets
    pub reset: Option<u64>,
}

impl Rate {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_value(headers, HEADER_RATE_LIMIT),
            remaining: header_value(headers, HEADER_RATE_REMAINING),
            reset: header_value(headers, HEADER_RATE_RESET),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining == Some(0)
    }
}

fn header_value<T: FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse().ok())
}
