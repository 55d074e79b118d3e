//! [`CodeHost`] backed by the GitHub REST API.

use super::{CodeHost, CodeItem, CodeRepository, FileContent, HostError};
use crate::rate_limit::RateLimitInfo;
use octocrab::Octocrab;
use std::fmt;
use url::Url;

/// GitHub REST client authenticated with a personal access token.
#[derive(Clone)]
pub struct GitHubHost {
    octocrab: Octocrab,
}

impl GitHubHost {
    /// Builds an authenticated client.
    ///
    /// `api_base` points at a GitHub Enterprise API root; `None` uses
    /// `https://api.github.com`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the client cannot be constructed.
    pub fn new(token: String, api_base: Option<&Url>) -> Result<Self, HostError> {
        let mut builder = Octocrab::builder().personal_token(token);
        if let Some(base) = api_base {
            builder = builder.base_uri(base.as_str())?;
        }
        Ok(Self {
            octocrab: builder.build()?,
        })
    }
}

impl fmt::Debug for GitHubHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubHost").finish_non_exhaustive()
    }
}

impl CodeHost for GitHubHost {
    async fn search_code(
        &self,
        query: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<CodeItem>, HostError> {
        let page = self
            .octocrab
            .search()
            .code(query)
            .per_page(per_page)
            .page(page)
            .send()
            .await?;

        Ok(page
            .items
            .into_iter()
            .map(|item| CodeItem {
                path: item.path,
                sha: item.sha,
                repository: CodeRepository {
                    name: item.repository.name,
                    owner_login: item.repository.owner.map(|owner| owner.login),
                    url: item.repository.url.to_string(),
                },
            })
            .collect())
    }

    async fn get_file(&self, owner: &str, repo: &str, path: &str) -> Result<FileContent, HostError> {
        let items = self
            .octocrab
            .repos(owner, repo)
            .get_content()
            .path(path)
            .send()
            .await?;

        Ok(FileContent {
            content: items.items.into_iter().next().and_then(|item| item.content),
        })
    }

    async fn search_rate_limit(&self) -> Result<RateLimitInfo, HostError> {
        let rate_limit = self.octocrab.ratelimit().get().await?;
        let search = &rate_limit.resources.search;

        Ok(RateLimitInfo {
            remaining: search.remaining as u32,
            reset: search.reset,
            limit: search.limit as u32,
        })
    }
}
