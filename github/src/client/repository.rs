use super::{Error, Result};
use std::fmt;

/// The two ways the REST API can address a repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RepositoryRef<'a> {
    /// `repos/{owner}/{name}`
    ByName { owner: &'a str, name: &'a str },
    /// `repositories/{id}`
    ById(u64),
}

impl<'a> RepositoryRef<'a> {
    pub fn by_name(owner: &'a str, name: &'a str) -> Self {
        RepositoryRef::ByName { owner, name }
    }

    pub fn by_id(id: u64) -> Self {
        RepositoryRef::ById(id)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        match *self {
            RepositoryRef::ByName { owner, name } => {
                ensure_segment("owner", owner)?;
                ensure_segment("name", name)
            }
            RepositoryRef::ById(0) => Err(Error::invalid_argument("id", "must be positive")),
            RepositoryRef::ById(_) => Ok(()),
        }
    }

    /// Path segments of `path` below this repository, relative to the API root.
    /// Every element stays a single segment, whatever characters it holds.
    pub(crate) fn endpoint(&self, path: &[&str]) -> Vec<String> {
        let mut segments = match *self {
            RepositoryRef::ByName { owner, name } => {
                vec!["repos".to_owned(), owner.to_owned(), name.to_owned()]
            }
            RepositoryRef::ById(id) => vec!["repositories".to_owned(), id.to_string()],
        };
        segments.extend(path.iter().map(|s| (*s).to_owned()));
        segments
    }
}

impl fmt::Display for RepositoryRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryRef::ByName { owner, name } => write!(f, "repos/{}/{}", owner, name),
            RepositoryRef::ById(id) => write!(f, "repositories/{}", id),
        }
    }
}

impl<'a> From<(&'a str, &'a str)> for RepositoryRef<'a> {
    fn from((owner, name): (&'a str, &'a str)) -> Self {
        RepositoryRef::by_name(owner, name)
    }
}

impl From<u64> for RepositoryRef<'_> {
    fn from(id: u64) -> Self {
        RepositoryRef::by_id(id)
    }
}

/// `value` must be usable as one path segment. `.` and `..` are dropped by url
/// path handling, so they would silently address a different resource.
pub(crate) fn ensure_segment(name: &'static str, value: &str) -> Result<()> {
    match value {
        "" => Err(Error::invalid_argument(name, "must not be empty")),
        "." | ".." => Err(Error::invalid_argument(name, "must not be a dot segment")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::RepositoryRef;

    #[test]
    fn endpoints() {
        let by_name = RepositoryRef::by_name("octokit", "octokit.net");
        assert_eq!(
            by_name.endpoint(&["assignees"]),
            vec!["repos", "octokit", "octokit.net", "assignees"]
        );
        assert_eq!(by_name.to_string(), "repos/octokit/octokit.net");

        let by_id = RepositoryRef::from(1234u64);
        assert_eq!(
            by_id.endpoint(&["assignees", "a/b"]),
            vec!["repositories", "1234", "assignees", "a/b"]
        );
    }

    #[test]
    fn validation() {
        assert!(RepositoryRef::by_name("octokit", "octokit.net").validate().is_ok());
        assert!(RepositoryRef::by_id(1).validate().is_ok());

        for repo in &[
            RepositoryRef::by_name("", "octokit.net"),
            RepositoryRef::by_name("octokit", ""),
            RepositoryRef::by_name("..", "octokit.net"),
            RepositoryRef::by_name("octokit", "."),
            RepositoryRef::by_id(0),
        ] {
            assert!(repo.validate().unwrap_err().is_invalid_argument(), "{}", repo);
        }
    }
}
