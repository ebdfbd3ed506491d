use log::{debug, warn};
use reqwest::{header, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;
use std::{fmt, sync::Arc};
use url::Url;

mod assignees;
mod error;
mod pagination;
mod rate_limit;
mod repository;
mod response;
mod transport;

#[cfg(test)]
mod mock;

pub use assignees::AssigneesClient;
pub use error::{Error, GithubClientError, GithubClientErrorType, Result};
pub use pagination::{ListOptions, Pagination};
pub use rate_limit::Rate;
pub use repository::RepositoryRef;
pub use response::{Lookup, Response};
pub use transport::{HttpTransport, RawResponse, Request, Transport};

// Constants
const DEFAULT_BASE_URL: &str = "https://api.github.com/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const HEADER_LINK: &str = "Link";
const HEADER_RATE_LIMIT: &str = "X-RateLimit-Limit";
const HEADER_RATE_REMAINING: &str = "X-RateLimit-Remaining";
const HEADER_RATE_RESET: &str = "X-RateLimit-Reset";

/// Stable, non-preview v3 media type
pub const MEDIA_TYPE_V3: &str = "application/vnd.github.v3+json";

pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    github_api_token: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            github_api_token: None,
            transport: None,
        }
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn github_api_token<S: Into<String>>(mut self, github_api_token: S) -> Self {
        self.github_api_token = Some(github_api_token.into());
        self
    }

    /// Use `transport` instead of an http connection. The user agent and
    /// token settings only apply to the default transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;
        if base_url.cannot_be_a_base() {
            return Err("base url cannot be a base".into());
        }

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            None => {
                let user_agent = self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned());
                Arc::new(HttpTransport::new(http_client(
                    &user_agent,
                    self.github_api_token.as_deref(),
                )?))
            }
        };

        Ok(Client {
            base_url,
            transport,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("github_api_token", &self.github_api_token.as_ref().map(|_| "<redacted>"))
            .field("transport", &self.transport)
            .finish()
    }
}

fn http_client(user_agent: &str, token: Option<&str>) -> Result<ReqwestClient> {
    let mut client_builder = ReqwestClient::builder().user_agent(user_agent);

    if let Some(token) = token {
        let mut headers = header::HeaderMap::new();
        let mut value = header::HeaderValue::from_str(&format!("token {}", token))
            .map_err(|e| e.to_string())?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
        client_builder = client_builder.default_headers(headers);
    }

    Ok(client_builder.build()?)
}

/// Connection shared by every resource client.
#[derive(Debug)]
pub struct Client {
    /// Base URL to use for API requests. Defaults to the public GitHub API,
    /// but can be overridden for use with GitHub Enterprise. Always
    /// terminated with a trailing slash.
    base_url: Url,

    /// Moves requests and responses over the wire
    transport: Arc<dyn Transport>,
}

impl Client {
    pub fn new() -> Result<Self> {
        ClientBuilder::new().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // Each element of `path` becomes exactly one percent-encoded segment
    fn url<S: AsRef<str>>(&self, path: &[S], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::from("base url cannot be a base"))?
            .pop_if_empty()
            .extend(path);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    // Issue a GET and sort the response into success, 404 or error
    async fn fetch(&self, url: Url, accept: &'static str) -> Result<Lookup<Response<String>>> {
        debug!("GET {}", url);

        let response = self.transport.get(Request { url, accept }).await?;
        let rate = Rate::from_headers(&response.headers);
        if rate.is_exhausted() {
            warn!("Github rate limit exhausted, resets at {:?}", rate.reset);
        } else {
            debug!("Github rate limit remaining: {:?}", rate.remaining);
        }

        if response.status.is_success() {
            let pagination = Pagination::from_headers(&response.headers);
            Ok(Lookup::Found(Response::new(pagination, rate, response.body)))
        } else if response.status == StatusCode::NOT_FOUND {
            Ok(Lookup::NotFound)
        } else {
            Err(Error::from_response(&response, &rate))
        }
    }

    /// GET a single resource and decode its json body
    pub async fn get<T: DeserializeOwned, S: AsRef<str>>(
        &self,
        path: &[S],
        accept: &'static str,
    ) -> Result<Lookup<Response<T>>> {
        let url = self.url(path, &[])?;

        match self.fetch(url, accept).await? {
            Lookup::Found(response) => Ok(Lookup::Found(response.json()?)),
            Lookup::NotFound => Ok(Lookup::NotFound),
        }
    }

    /// GET a resource whose body, if any, carries no information
    pub async fn get_empty<S: AsRef<str>>(
        &self,
        path: &[S],
        accept: &'static str,
    ) -> Result<Lookup<Response<()>>> {
        let url = self.url(path, &[])?;

        Ok(self
            .fetch(url, accept)
            .await?
            .map(|response| response.map(|_| ())))
    }

    /// GET every page of a list endpoint, following the `Link` header, and
    /// concatenate the results in the order the server returned them.
    pub async fn get_all<T: DeserializeOwned, S: AsRef<str>>(
        &self,
        path: &[S],
        accept: &'static str,
        options: &ListOptions,
    ) -> Result<Vec<T>> {
        options.validate()?;

        let mut items = Vec::new();
        let mut requested = Vec::new();
        let mut page = None;
        let endpoint = self.url(path, &[])?.path().to_owned();

        loop {
            let url = self.url(path, &options.query(page))?;
            let response = self.fetch(url, accept).await?.found(&endpoint)?;
            let (pagination, _rate, mut batch) = response.json::<Vec<T>>()?.into_parts();

            items.append(&mut batch);
            requested.push(page.or(options.page).unwrap_or(1));

            match pagination.next_page {
                Some(next) if options.wants_more(requested.len()) && !requested.contains(&next) => {
                    page = Some(next)
                }
                _ => break,
            }
        }

        debug!(
            "fetched {} items from {} in {} page(s)",
            items.len(),
            endpoint,
            requested.len()
        );

        Ok(items)
    }

    pub fn assignees(&self) -> AssigneesClient<'_> {
        AssigneesClient::new(self)
    }
}
