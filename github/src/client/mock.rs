//! In-memory `Transport` for exercising resource clients without a network

use super::{RawResponse, Request, Result, Transport, HEADER_LINK};
use async_trait::async_trait;
use reqwest::{header::HeaderMap, StatusCode};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
struct Route {
    path: String,
    page: Option<usize>,
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

#[derive(Debug, Default)]
struct State {
    routes: Vec<Route>,
    requests: Vec<Request>,
}

/// Answers GETs from canned routes and records every request it sees.
/// Requests matching no route get a 404.
#[derive(Clone, Debug, Default)]
pub(crate) struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    /// Respond to `path` requested without a `page` parameter
    pub(crate) fn respond(&self, path: &str, status: StatusCode, body: &str) {
        self.route(path, None, status, HeaderMap::new(), body);
    }

    /// Respond to `path` at `page` with a json list, linking to `next`
    pub(crate) fn page(&self, path: &str, page: Option<usize>, body: &str, next: Option<usize>) {
        let mut headers = HeaderMap::new();
        if let Some(next) = next {
            let link = format!(
                r#"<https://github.example.com{}?page={}>; rel="next""#,
                path, next
            );
            headers.insert(HEADER_LINK, link.parse().unwrap());
        }

        self.route(path, page, StatusCode::OK, headers, body);
    }

    pub(crate) fn route(
        &self,
        path: &str,
        page: Option<usize>,
        status: StatusCode,
        headers: HeaderMap,
        body: &str,
    ) {
        self.state.lock().unwrap().routes.push(Route {
            path: path.to_owned(),
            page,
            status,
            headers,
            body: body.to_owned(),
        });
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.state.lock().unwrap().requests.clone()
    }
}

fn page_of(request: &Request) -> Option<usize> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == "page")
        .and_then(|(_, v)| v.parse().ok())
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, request: Request) -> Result<RawResponse> {
        let mut state = self.state.lock().unwrap();
        let page = page_of(&request);

        let response = match state
            .routes
            .iter()
            .find(|r| r.path == request.url.path() && r.page == page)
        {
            Some(route) => RawResponse {
                status: route.status,
                headers: route.headers.clone(),
                body: route.body.clone(),
            },
            None => RawResponse {
                status: StatusCode::NOT_FOUND,
                headers: HeaderMap::new(),
                body: r#"{"message":"Not Found"}"#.to_owned(),
            },
        };

        state.requests.push(request);
        Ok(response)
    }
}
