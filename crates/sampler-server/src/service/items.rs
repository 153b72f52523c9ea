//! In-memory item store
//!
//! A concurrent map of demo inventory items. Identifiers come from an
//! atomic counter and are never reused within a process lifetime.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// A demo inventory item
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub created_at: i64,
}

impl Item {
    /// Price including tax at the given rate
    pub fn price_with_tax(&self, rate: f64) -> f64 {
        self.price * (1.0 + rate)
    }
}

/// Concurrent in-memory item store
///
/// Seeded with a single demo item so the read endpoints work out of the box.
pub struct ItemStore {
    items: DashMap<u64, Item>,
    next_id: AtomicU64,
}

impl ItemStore {
    pub fn new() -> Self {
        let store = Self {
            items: DashMap::new(),
            next_id: AtomicU64::new(1),
        };
        store.create("apple".to_string(), 0.5);
        store
    }

    /// Insert a new item under the next free identifier
    pub fn create(&self, name: String, price: f64) -> Item {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let item = Item {
            id,
            name,
            price,
            created_at: chrono::Utc::now().timestamp_millis(),
        };
        self.items.insert(id, item.clone());

        item
    }

    pub fn get(&self, id: u64) -> Option<Item> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    /// All items ordered by identifier
    pub fn list(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self
            .items
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by_key(|item| item.id);

        items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
