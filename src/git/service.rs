//! Git endpoints: refs, repositories and commit statuses.

use std::borrow::Cow;

use http::Method;

use crate::client::{Client, ClientError, add_options};
use crate::models::{GitRefList, GitRefListOptions, GitRepository, GitStatus};
use crate::transport::HttpClient;

const REPOSITORIES: &str = "_apis/git/repositories";

/// Typed access to the Git REST endpoints of one project.
///
/// Repository names, ref types and commit ids are escaped before being
/// placed in the path, so names with spaces or `/` stay one segment. Empty
/// values and the dot segments `.` and `..` are rejected.
#[derive(Debug)]
pub struct GitService<'a, H> {
    client: &'a Client<H>,
}

impl<'a, H> GitService<'a, H> {
    /// Creates a proxy borrowing `client`.
    #[must_use]
    pub const fn new(client: &'a Client<H>) -> Self {
        Self { client }
    }
}

impl<H: HttpClient> GitService<'_, H> {
    /// Lists the refs of `ref_type` (for example `heads` or `tags`) in `repo`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidSegment`] for an empty or dot `repo` or
    /// `ref_type`, [`ClientError::Query`] when the options cannot be encoded,
    /// otherwise any error from [`Client::send`].
    pub async fn list_refs(
        &self,
        repo: &str,
        ref_type: &str,
        options: Option<&GitRefListOptions>,
    ) -> Result<GitRefList, ClientError> {
        let path = format!(
            "{REPOSITORIES}/{}/refs/{}",
            segment(repo)?,
            segment(ref_type)?
        );
        let path = add_options(&path, options)?;

        let request = self.client.build_bodyless(Method::GET, &path)?;
        let refs: GitRefList = self.client.execute(request).await?;
        tracing::debug!(repo, ref_type, count = refs.count, "Listed refs");
        Ok(refs)
    }

    /// Fetches a repository by name or id.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidSegment`] for an empty or dot segment, otherwise
    /// any error from [`Client::send`].
    pub async fn get_repository(&self, name: &str) -> Result<GitRepository, ClientError> {
        let path = format!("{REPOSITORIES}/{}", segment(name)?);
        let request = self.client.build_bodyless(Method::GET, &path)?;
        self.client.execute(request).await
    }

    /// Posts `status` against `commit` in `repo` and returns the stored status.
    ///
    /// # Errors
    ///
    /// [`ClientError::InvalidSegment`] for an empty or dot segment, otherwise
    /// any error from [`Client::send`].
    pub async fn create_status(
        &self,
        repo: &str,
        commit: &str,
        status: &GitStatus,
    ) -> Result<GitStatus, ClientError> {
        let path = format!(
            "{REPOSITORIES}/{}/commits/{}/statuses",
            segment(repo)?,
            segment(commit)?
        );
        self.client.send(Method::POST, &path, Some(status)).await
    }
}

fn segment(value: &str) -> Result<Cow<'_, str>, ClientError> {
    match value {
        "" | "." | ".." => Err(ClientError::InvalidSegment(value.to_string())),
        _ => Ok(urlencoding::encode(value)),
    }
}
