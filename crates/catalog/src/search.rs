use serde::{Deserialize, Serialize};

use crate::item::{CatalogItem, ItemKind};

/// Builder for explore-style catalog searches.
///
/// A query always targets one kind of item. Category and text filters are
/// optional; an empty string behaves like no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Which collection to search.
    pub kind: ItemKind,

    /// Exact category for products and services; a tag for stores.
    pub category: Option<String>,

    /// Case-insensitive substring of the name, location or seller.
    pub text: Option<String>,
}

impl CatalogQuery {
    /// Creates a query over products with no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query over the given kind with no filters.
    pub fn for_kind(kind: ItemKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    /// Selects which collection to search.
    pub fn kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Filters by category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filters by free text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Returns true if the item passes every filter set on this query.
    ///
    /// The kind is not checked here; [`crate::Catalog::search`] only feeds
    /// items of the selected kind.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            let in_category = match item {
                CatalogItem::Product(p) => p.category == category,
                CatalogItem::Service(s) => s.category == category,
                CatalogItem::Store(s) => s.specializes_in(category),
            };
            if !in_category {
                return false;
            }
        }

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            let needle = text.to_lowercase();
            let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
            let seller_match = match item {
                CatalogItem::Product(p) => contains(p.store),
                CatalogItem::Service(s) => contains(s.provider),
                CatalogItem::Store(_) => false,
            };
            return contains(item.name()) || contains(item.location()) || seller_match;
        }

        true
    }
}
