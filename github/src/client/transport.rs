use super::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{
    header::{self, HeaderMap},
    Client as ReqwestClient, StatusCode,
};
use std::fmt;
use url::Url;

/// A single GET request against the GitHub API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// Absolute url, query string included
    pub url: Url,
    /// Value of the `Accept` header
    pub accept: &'static str,
}

/// The status, headers and body text of a response, before any interpretation
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// The connection underneath every resource client.
///
/// Implementations only move bytes; status codes are interpreted by `Client`.
#[async_trait]
pub trait Transport: fmt::Debug + Send + Sync {
    async fn get(&self, request: Request) -> Result<RawResponse>;
}

/// `Transport` backed by a `reqwest` client
#[derive(Debug)]
pub struct HttpTransport {
    client: ReqwestClient,
}

impl HttpTransport {
    pub fn new(client: ReqwestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, request: Request) -> Result<RawResponse> {
        let response = self
            .client
            .get(request.url)
            .header(header::ACCEPT, request.accept)
            .send()
            .await?;

        debug!("Github Response: {:#?}", response);

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
