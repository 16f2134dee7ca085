//! Catalog seed data: the built-in sample library and JSON seed files.
//!
//! A seed file is a JSON object with optional `items` and `external_resources`
//! arrays. Missing ids are generated; titles and URLs must be non-empty.

use crate::catalog::{CatalogItem, ExternalResource};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Initial contents for a [`Catalog`](crate::storage::Catalog).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub external_resources: Vec<ExternalResource>,
}

impl CatalogSeed {
    /// Checks that every record carries its required text fields.
    pub fn validate(&self) -> Result<(), String> {
        for (i, item) in self.items.iter().enumerate() {
            if item.title.trim().is_empty() {
                return Err(format!("items[{i}]: title must not be empty"));
            }
        }
        for (i, res) in self.external_resources.iter().enumerate() {
            if res.title.trim().is_empty() {
                return Err(format!("external_resources[{i}]: title must not be empty"));
            }
            if res.url.trim().is_empty() {
                return Err(format!("external_resources[{i}]: url must not be empty"));
            }
        }
        Ok(())
    }
}

/// Load and validate a JSON seed file.
pub fn load_seed_file(path: &Path) -> io::Result<CatalogSeed> {
    let bytes = fs::read(path)?;
    let seed: CatalogSeed = serde_json::from_slice(&bytes)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    seed.validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    tracing::info!(
        path = %path.display(),
        items = seed.items.len(),
        external_resources = seed.external_resources.len(),
        "Loaded catalog seed file"
    );
    Ok(seed)
}

/// The built-in sample library used when no seed file is given.
pub fn sample_seed() -> CatalogSeed {
    CatalogSeed {
        items: vec![
            CatalogItem::new("Engineering Physics")
                .with_author("H.K. Malik")
                .with_category("Physics")
                .with_description("Comprehensive engineering physics textbook")
                .with_tags(["physics", "engineering", "mechanics"])
                .with_file("engineering_physics.pdf", 5_242_880),
            CatalogItem::new("C Programming Language")
                .with_author("Dennis Ritchie")
                .with_category("Programming")
                .with_description("The classic C programming book")
                .with_tags(["c", "programming", "computer science"])
                .with_file("c_programming.pdf", 3_145_728),
            CatalogItem::new("Data Structures and Algorithms")
                .with_author("Cormen")
                .with_category("Computer Science")
                .with_description("Introduction to algorithms")
                .with_tags(["algorithms", "data structures", "programming"])
                .with_file("dsa.pdf", 8_388_608),
            CatalogItem::new("Engineering Mathematics")
                .with_author("B.S. Grewal")
                .with_category("Mathematics")
                .with_description("Higher engineering mathematics")
                .with_tags(["mathematics", "calculus", "engineering"])
                .with_file("engineering_math.pdf", 6_291_456),
            CatalogItem::new("Digital Electronics")
                .with_author("Morris Mano")
                .with_category("Electronics")
                .with_description("Digital design fundamentals")
                .with_tags(["electronics", "digital", "logic gates"])
                .with_file("digital_electronics.pdf", 4_194_304),
        ],
        external_resources: vec![
            ExternalResource::new("NPTEL Online Courses", "https://nptel.ac.in")
                .with_description("Video lectures for engineering and science"),
            ExternalResource::new("MIT OpenCourseWare", "https://ocw.mit.edu")
                .with_description("Free lecture notes, exams, and videos"),
        ],
    }
}
