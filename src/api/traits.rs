//! Trait abstraction over the backend so handlers can be tested with mocks

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reply to a form POST made with `X-Requested-With: XMLHttpRequest`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormReply {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Reply to `POST /admin/projects/{id}/toggle-featured`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedReply {
    pub success: bool,
    pub featured: bool,
}

/// One entry of `GET /api/projects`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Option<String>,
    #[serde(default)]
    pub project_link: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Backend operations the page issues, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// POST form fields, url-encoded, to `action`
    async fn submit_form(&self, action: &str, fields: Vec<(String, String)>) -> Result<FormReply>;

    /// Flip the featured flag of a project
    async fn toggle_featured(&self, project_id: u64) -> Result<FeaturedReply>;

    /// Fetch the public project list
    async fn list_projects(&self) -> Result<Vec<ProjectSummary>>;
}
