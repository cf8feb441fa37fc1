//! GitHub adapter

use async_trait::async_trait;
use planbot_config::Config;
use planbot_ghapi_interface::{
    types::{GhIssue, GhLabel, GhRepository},
    ApiService, Result,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const LABELS_PAGE_SIZE: u32 = 100;

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn fetch_repository(&self, owner: &str, name: &str) -> Result<GhRepository, GitHubError> {
        let response = self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}")))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(GitHubError::RepositoryNotFound {
                repository_path: format!("{owner}/{name}"),
            });
        }

        Ok(response.error_for_status()?.json().await?)
    }

    async fn list_labels(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>, GitHubError> {
        Ok(self
            .get_client()?
            .get(self.build_url(format!("/repos/{owner}/{name}/labels")))
            .query(&[("per_page", LABELS_PAGE_SIZE)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn create_label(
        &self,
        owner: &str,
        name: &str,
        label: &GhLabel,
    ) -> Result<(), GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            name: &'a str,
            color: &'a str,
            description: Option<&'a str>,
        }

        self.get_client()?
            .post(self.build_url(format!("/repos/{owner}/{name}/labels")))
            .json(&Request {
                name: &label.name,
                color: &label.color,
                description: label.description.as_deref(),
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn update_label(
        &self,
        owner: &str,
        name: &str,
        label: &GhLabel,
    ) -> Result<(), GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            new_name: &'a str,
            color: &'a str,
            description: Option<&'a str>,
        }

        self.get_client()?
            .patch(self.build_url(format!("/repos/{owner}/{name}/labels/{}", label.name)))
            .json(&Request {
                new_name: &label.name,
                color: &label.color,
                description: label.description.as_deref(),
            })
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    async fn create_issue(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue, GitHubError> {
        #[derive(Serialize)]
        struct Request<'a> {
            title: &'a str,
            body: &'a str,
            labels: &'a [String],
        }

        Ok(self
            .get_client()?
            .post(self.build_url(format!("/repos/{owner}/{name}/issues")))
            .json(&Request {
                title,
                body,
                labels,
            })
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[async_trait(?Send)]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn repositories_get(&self, owner: &str, name: &str) -> Result<GhRepository> {
        Ok(self.fetch_repository(owner, name).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_list(&self, owner: &str, name: &str) -> Result<Vec<GhLabel>> {
        Ok(self.list_labels(owner, name).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_create(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()> {
        Ok(self.create_label(owner, name, label).await?)
    }

    #[tracing::instrument(skip(self))]
    async fn labels_update(&self, owner: &str, name: &str, label: &GhLabel) -> Result<()> {
        Ok(self.update_label(owner, name, label).await?)
    }

    #[tracing::instrument(skip(self, body))]
    async fn issues_create(
        &self,
        owner: &str,
        name: &str,
        title: &str,
        body: &str,
        labels: &[String],
    ) -> Result<GhIssue> {
        Ok(self.create_issue(owner, name, title, body, labels).await?)
    }
}
