//! Scored result and field weighting types for the catalog matcher.

use crate::catalog::CatalogItem;
use crate::config;
use std::borrow::Cow;

/// A catalog field scored by the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Category,
    Description,
    /// All tags joined by a single space.
    Tags,
}

impl Field {
    /// Every scored field, in weight order.
    pub const ALL: [Field; 5] = [
        Field::Title,
        Field::Author,
        Field::Category,
        Field::Description,
        Field::Tags,
    ];

    /// Returns this field's text on `item`, or `None` when absent or empty.
    pub fn text(self, item: &CatalogItem) -> Option<Cow<'_, str>> {
        let value = match self {
            Field::Title => Some(Cow::Borrowed(item.title.as_str())),
            Field::Author => item.author.as_deref().map(Cow::Borrowed),
            Field::Category => item.category.as_deref().map(Cow::Borrowed),
            Field::Description => item.description.as_deref().map(Cow::Borrowed),
            Field::Tags => Some(Cow::Owned(item.joined_tags())),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}

/// Per-field weights. Always non-negative and summing to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldWeights {
    title: f64,
    author: f64,
    category: f64,
    description: f64,
    tags: f64,
}

impl FieldWeights {
    /// Builds a weight set, rejecting negative weights or a sum other than 1.0.
    pub fn new(
        title: f64,
        author: f64,
        category: f64,
        description: f64,
        tags: f64,
    ) -> Result<Self, String> {
        let weights = Self {
            title,
            author,
            category,
            description,
            tags,
        };
        if Field::ALL
            .iter()
            .any(|&f| !weights.get(f).is_finite() || weights.get(f) < 0.0)
        {
            return Err("Field weights must be finite and non-negative".to_string());
        }
        let total = weights.total();
        if (total - 1.0).abs() > config::WEIGHT_SUM_TOLERANCE {
            return Err(format!("Field weights must sum to 1.0, got {total}"));
        }
        Ok(weights)
    }

    /// Returns the weight of `field`.
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Title => self.title,
            Field::Author => self.author,
            Field::Category => self.category,
            Field::Description => self.description,
            Field::Tags => self.tags,
        }
    }

    /// Sum of all five weights.
    pub fn total(&self) -> f64 {
        Field::ALL.iter().map(|&f| self.get(f)).sum()
    }
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            title: config::FIELD_WEIGHT_TITLE,
            author: config::FIELD_WEIGHT_AUTHOR,
            category: config::FIELD_WEIGHT_CATEGORY,
            description: config::FIELD_WEIGHT_DESCRIPTION,
            tags: config::FIELD_WEIGHT_TAGS,
        }
    }
}

/// A catalog item with its combined relevance score.
///
/// `score` is in `[0, 1]`: 0 is a perfect match, 1 no similarity. It only orders
/// results and is not meant to be shown to users.
#[derive(Debug, Clone, Copy)]
pub struct ScoredItem<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
}
