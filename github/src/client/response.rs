use super::{Error, Pagination, Rate, Result};
use serde::de::DeserializeOwned;

/// A decoded response along with the paging and rate limit headers it carried
#[derive(Debug)]
pub struct Response<T> {
    pagination: Pagination,
    rate: Rate,
    inner: T,
}

impl<T> Response<T> {
    pub fn new(pagination: Pagination, rate: Rate, inner: T) -> Self {
        Self {
            pagination,
            rate,
            inner,
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn rate(&self) -> &Rate {
        &self.rate
    }

    pub fn into_inner(self) -> T {
        self.inner
    }

    pub fn into_parts(self) -> (Pagination, Rate, T) {
        (self.pagination, self.rate, self.inner)
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response::new(self.pagination, self.rate, f(self.inner))
    }
}

impl Response<String> {
    /// Decode the body text as json
    pub(super) fn json<T: DeserializeOwned>(self) -> Result<Response<T>> {
        let inner = serde_json::from_str(&self.inner)?;
        Ok(Response::new(self.pagination, self.rate, inner))
    }
}

/// Outcome of fetching a single resource: HTTP 404 is a value, not an error.
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Treat `NotFound` as an error, naming the `endpoint` that was missing
    pub fn found(self, endpoint: &str) -> Result<T> {
        match self {
            Lookup::Found(t) => Ok(t),
            Lookup::NotFound => Err(Error::NotFound(endpoint.to_owned())),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Lookup::Found(t) => Lookup::Found(f(t)),
            Lookup::NotFound => Lookup::NotFound,
        }
    }
}
