//! Catalog record types.
//!
//! Records are compiled into the binary, so every text field is `&'static str`
//! and the catalog hands out `&'static` references to them.

use common::{ItemType, Price};
use serde::Serialize;

/// A part sold by a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    /// One of [`crate::PRODUCT_CATEGORIES`].
    pub category: &'static str,
    pub description: &'static str,
    pub price: Price,
    /// Average rating in `[0, 5]`.
    pub rating: f32,
    /// Display name of the selling store.
    pub store: &'static str,
    pub store_id: &'static str,
    pub location: &'static str,
    pub image: &'static str,
}

/// A service booked with a provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    /// One of [`crate::SERVICE_CATEGORIES`].
    pub category: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub rating: f32,
    /// Display name of the provider.
    pub provider: &'static str,
    pub provider_id: &'static str,
    pub location: &'static str,
    pub image: &'static str,
    /// Free text, e.g. `"45 minutes"`.
    pub duration: &'static str,
}

/// A physical store or garage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rating: f32,
    pub location: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
    pub image: &'static str,
    /// Category tags the store specializes in.
    pub categories: &'static [&'static str],
}

impl Product {
    pub const ITEM_TYPE: ItemType = ItemType::Product;
}

impl Service {
    pub const ITEM_TYPE: ItemType = ItemType::Service;
}

impl Store {
    /// Returns true if the store carries the given category tag.
    pub fn specializes_in(&self, category: &str) -> bool {
        self.categories.contains(&category)
    }
}
