use super::{
    repository::ensure_segment, Client, ListOptions, Lookup, RepositoryRef, Result,
    MEDIA_TYPE_V3,
};
use crate::User;

/// `AssigneesClient` handles communication with the assignee related methods of the GitHub API.
///
/// GitHub API docs: https://developer.github.com/v3/issues/assignees/
pub struct AssigneesClient<'a> {
    inner: &'a Client,
}

impl<'a> AssigneesClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    /// List all available assignees (owners and collaborators) to which issues may be assigned.
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#list-assignees
    pub async fn list(&self, repo: RepositoryRef<'_>) -> Result<Vec<User>> {
        self.list_with_options(repo, &ListOptions::default()).await
    }

    /// Like `list`, with explicit paging.
    pub async fn list_with_options(
        &self,
        repo: RepositoryRef<'_>,
        options: &ListOptions,
    ) -> Result<Vec<User>> {
        repo.validate()?;

        let endpoint = repo.endpoint(&["assignees"]);
        self.inner
            .get_all(endpoint.as_slice(), MEDIA_TYPE_V3, options)
            .await
    }

    /// Checks if a user has permission to be assigned to an issue in this repository
    ///
    /// GitHub API docs: https://developer.github.com/v3/issues/assignees/#check-assignee
    pub async fn check(&self, repo: RepositoryRef<'_>, assignee: &str) -> Result<bool> {
        repo.validate()?;
        ensure_segment("assignee", assignee)?;

        let endpoint = repo.endpoint(&["assignees", assignee]);

        // 204: the assignee can be assigned to the issue
        // 404: the assignee cannot be assigned to the issue
        // Any other success status is taken as a yes as well.
        match self.inner.get_empty(endpoint.as_slice(), MEDIA_TYPE_V3).await? {
            Lookup::Found(_) => Ok(true),
            Lookup::NotFound => Ok(false),
        }
    }
}
