use super::{Error, Result, HEADER_LINK};
use reqwest::header::HeaderMap;
use url::Url;

/// Page links advertised by the `Link` header of a GitHub API response
///
/// GitHub API docs: https://developer.github.com/v3/#pagination
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub first_page: Option<usize>,
    pub last_page: Option<usize>,

    pub next_page_token: Option<String>,
}

impl Pagination {
    pub(super) fn from_headers(headers: &HeaderMap) -> Self {
        let mut pagination = Self::default();

        let links = match headers.get(HEADER_LINK).and_then(|h| h.to_str().ok()) {
            Some(links) => links,
            None => return pagination,
        };

        for link in links.split(',') {
            let mut segments = link.split(';').map(str::trim);

            let page = match segments.next().and_then(page_of_link) {
                Some(page) => page,
                None => continue,
            };

            for rel in segments {
                match rel {
                    r#"rel="next""# => match page.parse() {
                        Ok(n) => pagination.next_page = Some(n),
                        Err(_) => pagination.next_page_token = Some(page.clone()),
                    },
                    r#"rel="prev""# => pagination.prev_page = page.parse().ok(),
                    r#"rel="first""# => pagination.first_page = page.parse().ok(),
                    r#"rel="last""# => pagination.last_page = page.parse().ok(),
                    _ => {}
                }
            }
        }

        pagination
    }
}

// `<https://api.github.com/...?page=3>` -> "3"
fn page_of_link(href: &str) -> Option<String> {
    if !(href.starts_with('<') && href.ends_with('>')) {
        return None;
    }

    let url = Url::parse(&href[1..href.len() - 1]).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == "page")
        .map(|(_, v)| v.into_owned())
}

/// Paging controls for list endpoints.
///
/// The default value uses the server's page size and fetches every page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// 1-based page to start from
    pub page: Option<usize>,

    /// Number of results per page (GitHub caps this at 100)
    pub per_page: Option<usize>,

    /// Maximum number of pages to fetch; never sent to the server
    pub page_count: Option<usize>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: usize) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page_count(mut self, page_count: usize) -> Self {
        self.page_count = Some(page_count);
        self
    }

    pub(super) fn validate(&self) -> Result<()> {
        let fields = [
            ("page", self.page),
            ("per_page", self.per_page),
            ("page_count", self.page_count),
        ];

        match fields.iter().find(|(_, value)| *value == Some(0)) {
            Some((name, _)) => Err(Error::invalid_argument(*name, "must be greater than zero")),
            None => Ok(()),
        }
    }

    /// Query parameters for fetching `page`, which overrides the start page
    pub(super) fn query(&self, page: Option<usize>) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();

        if let Some(page) = page.or(self.page) {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }

        query
    }

    /// Whether another page may be requested after `fetched` pages
    pub(super) fn wants_more(&self, fetched: usize) -> bool {
        self.page_count.map_or(true, |max| fetched < max)
    }
}

#[cfg(test)]
mod test {
    use super::{ListOptions, Pagination, HEADER_LINK};
    use reqwest::header::HeaderMap;

    #[test]
    fn pagination() {
        let mut headers = HeaderMap::new();
        let link = r#"<https://api.github.com/user/repos?page=3&per_page=100>; rel="next", <https://api.github.com/user/repos?page=50&per_page=100>; rel="last""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, Some(3));
        assert_eq!(p.last_page, Some(50));
        assert_eq!(p.prev_page, None);
    }

    #[test]
    fn cursor_and_garbage() {
        let mut headers = HeaderMap::new();
        let link = r#"not-a-link; rel="prev", <https://api.github.com/events?page=abc>; rel="next", <https://api.github.com/events?page=1>; rel="first""#;
        headers.insert(HEADER_LINK, link.parse().unwrap());

        let p = Pagination::from_headers(&headers);
        assert_eq!(p.next_page, None);
        assert_eq!(p.next_page_token.as_deref(), Some("abc"));
        assert_eq!(p.prev_page, None);
        assert_eq!(p.first_page, Some(1));
    }

    #[test]
    fn no_link_header() {
        assert_eq!(Pagination::from_headers(&HeaderMap::new()), Pagination::default());
    }

    #[test]
    fn options_query() {
        let options = ListOptions::new().page(2).per_page(30).page_count(1);

        assert_eq!(
            options.query(None),
            vec![("page", "2".to_owned()), ("per_page", "30".to_owned())]
        );
        assert_eq!(
            options.query(Some(7)),
            vec![("page", "7".to_owned()), ("per_page", "30".to_owned())]
        );
        assert!(ListOptions::default().query(None).is_empty());
    }

    #[test]
    fn options_validation() {
        assert!(ListOptions::default().validate().is_ok());

        let err = ListOptions::new().per_page(0).validate().unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(ListOptions::new().page(0).validate().is_err());
        assert!(ListOptions::new().page_count(0).validate().is_err());
    }

    #[test]
    fn page_budget() {
        assert!(ListOptions::default().wants_more(1000));
        assert!(ListOptions::new().page_count(2).wants_more(1));
        assert!(!ListOptions::new().page_count(2).wants_more(2));
    }
}
