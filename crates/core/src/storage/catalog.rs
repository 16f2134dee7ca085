//! In-memory catalog store.
//!
//! [`Catalog`] holds catalog items and external resources in insertion order and
//! hands out immutable snapshots (`Arc<Vec<_>>`). Writers copy-on-write through
//! `Arc::make_mut`, so a snapshot taken before a write is never modified by it.

use crate::catalog::{CatalogItem, ExternalResource};
use crate::storage::seed::CatalogSeed;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// Thread-safe catalog of PDFs and external links. Cloning shares the same data.
#[derive(Clone, Default)]
pub struct Catalog {
    items: Arc<RwLock<Arc<Vec<CatalogItem>>>>,
    resources: Arc<RwLock<Arc<Vec<ExternalResource>>>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from seed data. Returns `Err` on duplicate ids.
    pub fn from_seed(seed: CatalogSeed) -> Result<Self, String> {
        let catalog = Self::new();
        for item in seed.items {
            catalog.insert_item(item)?;
        }
        for resource in seed.external_resources {
            catalog.insert_resource(resource)?;
        }
        Ok(catalog)
    }

    // ── Catalog items ──────────────────────────────────────────────────

    /// Current items, in insertion order. Unaffected by later writes.
    pub fn items_snapshot(&self) -> Arc<Vec<CatalogItem>> {
        self.items.read().clone()
    }

    /// Appends an item. Returns `Err` if an item with the same id exists.
    pub fn insert_item(&self, item: CatalogItem) -> Result<Uuid, String> {
        let mut items = self.items.write();
        if items.iter().any(|existing| existing.id == item.id) {
            return Err(format!("Catalog item '{}' already exists", item.id));
        }
        let id = item.id;
        Arc::make_mut(&mut items).push(item);
        Ok(id)
    }

    /// Returns a copy of the item with `id`, if present.
    pub fn get_item(&self, id: &Uuid) -> Option<CatalogItem> {
        self.items.read().iter().find(|item| item.id == *id).cloned()
    }

    /// Applies `update` to the item with `id` and returns the updated copy.
    ///
    /// The id is restored after `update` runs; records keep their identity.
    pub fn update_item<F>(&self, id: &Uuid, update: F) -> Option<CatalogItem>
    where
        F: FnOnce(&mut CatalogItem),
    {
        let mut items = self.items.write();
        let pos = items.iter().position(|item| item.id == *id)?;
        let item = &mut Arc::make_mut(&mut items)[pos];
        update(item);
        item.id = *id;
        Some(item.clone())
    }

    /// Removes the item with `id`. Returns `true` if it existed.
    pub fn remove_item(&self, id: &Uuid) -> bool {
        let mut items = self.items.write();
        match items.iter().position(|item| item.id == *id) {
            Some(pos) => {
                Arc::make_mut(&mut items).remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of catalog items.
    pub fn item_count(&self) -> usize {
        self.items.read().len()
    }

    // ── External resources ─────────────────────────────────────────────

    /// Current external resources, in insertion order. Unaffected by later writes.
    pub fn resources_snapshot(&self) -> Arc<Vec<ExternalResource>> {
        self.resources.read().clone()
    }

    /// Appends a resource. Returns `Err` if a resource with the same id exists.
    pub fn insert_resource(&self, resource: ExternalResource) -> Result<Uuid, String> {
        let mut resources = self.resources.write();
        if resources.iter().any(|existing| existing.id == resource.id) {
            return Err(format!("External resource '{}' already exists", resource.id));
        }
        let id = resource.id;
        Arc::make_mut(&mut resources).push(resource);
        Ok(id)
    }

    /// Returns a copy of the resource with `id`, if present.
    pub fn get_resource(&self, id: &Uuid) -> Option<ExternalResource> {
        self.resources
            .read()
            .iter()
            .find(|res| res.id == *id)
            .cloned()
    }

    /// Removes the resource with `id`. Returns `true` if it existed.
    pub fn remove_resource(&self, id: &Uuid) -> bool {
        let mut resources = self.resources.write();
        match resources.iter().position(|res| res.id == *id) {
            Some(pos) => {
                Arc::make_mut(&mut resources).remove(pos);
                true
            }
            None => false,
        }
    }

    /// Number of external resources.
    pub fn resource_count(&self) -> usize {
        self.resources.read().len()
    }
}
