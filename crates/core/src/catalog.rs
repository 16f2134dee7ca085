//! Catalog record types for clgbooks.
//!
//! A [`CatalogItem`] is a PDF study material searchable by the fuzzy matcher.
//! An [`ExternalResource`] is a link consulted only when no catalog item matches.
//! Both are owned by the catalog store; the matcher only ever borrows snapshots.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A PDF in the library catalog.
///
/// `title`, `author`, `category`, `description` and `tags` are scored by the matcher.
/// `id`, `filename` and `file_size` are carried for clients and never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique identifier (UUID v4). Generated when absent from seed data.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Book title. Required.
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered tags, may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Stored file name of the PDF, if uploaded.
    #[serde(default)]
    pub filename: Option<String>,
    /// PDF size in bytes, if known.
    #[serde(default)]
    pub file_size: Option<u64>,
}

impl CatalogItem {
    /// Creates an item with a random UUID and only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: None,
            category: None,
            description: None,
            tags: Vec::new(),
            filename: None,
            file_size: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_file(mut self, filename: impl Into<String>, file_size: u64) -> Self {
        self.filename = Some(filename.into());
        self.file_size = Some(file_size);
        self
    }

    /// Tags joined by a single space, as scored by the matcher.
    pub fn joined_tags(&self) -> String {
        self.tags.join(" ")
    }
}

/// An external link suggested when the catalog has no match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalResource {
    /// Unique identifier (UUID v4). Generated when absent from seed data.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl ExternalResource {
    /// Creates a resource with a random UUID and no description.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            description: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
