//! Request and response data transfer objects for the HTTP API.
//!
//! Field names on the wire are camelCase to match the chat frontend.

use clgbooks_core::catalog::{CatalogItem, ExternalResource};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request body for `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// A catalog PDF as returned to chat clients. Match scores are never exposed.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PdfResponse {
    pub id: Uuid,
    pub title: String,
    pub author: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub filename: Option<String>,
    pub file_size: Option<u64>,
}

impl From<&CatalogItem> for PdfResponse {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            author: item.author.clone(),
            category: item.category.clone(),
            description: item.description.clone(),
            tags: item.tags.clone(),
            filename: item.filename.clone(),
            file_size: item.file_size,
        }
    }
}

/// An external link suggested when the catalog has nothing.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExternalLinkResponse {
    pub id: Uuid,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
}

impl From<&ExternalResource> for ExternalLinkResponse {
    fn from(res: &ExternalResource) -> Self {
        Self {
            id: res.id,
            title: res.title.clone(),
            url: res.url.clone(),
            description: res.description.clone(),
        }
    }
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    pub pdfs: Vec<PdfResponse>,
    pub external_links: Vec<ExternalLinkResponse>,
}

/// Response body for `GET /health`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub catalog_items: usize,
    pub external_resources: usize,
}
