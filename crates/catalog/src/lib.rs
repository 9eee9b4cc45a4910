//! Read-only catalog of automotive parts, services and stores.
//!
//! The catalog is compiled in: lookups never fail, they return `None` when no
//! record has the requested identifier. Records are tagged once at this
//! boundary ([`CatalogItem`], [`Offering`]) so callers never have to probe
//! fields to tell a product from a service or a store.

mod data;
mod item;
mod records;
mod search;

pub use data::{PRODUCT_CATEGORIES, SERVICE_CATEGORIES};
pub use item::{CatalogItem, ItemKind, Offering};
pub use records::{Product, Service, Store};
pub use search::CatalogQuery;

const FEATURED_PRODUCTS: usize = 4;
const FEATURED_SERVICES: usize = 4;
const FEATURED_STORES: usize = 2;

/// Items highlighted on the home screen.
#[derive(Debug, Clone, Copy)]
pub struct Featured {
    pub products: &'static [Product],
    pub services: &'static [Service],
    pub stores: &'static [Store],
}

/// Lookup and listing over the three fixed collections.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
    services: &'static [Service],
    stores: &'static [Store],
    product_categories: &'static [&'static str],
    service_categories: &'static [&'static str],
}

impl Catalog {
    /// Returns the catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            products: &data::PRODUCTS,
            services: &data::SERVICES,
            stores: &data::STORES,
            product_categories: &PRODUCT_CATEGORIES,
            service_categories: &SERVICE_CATEGORIES,
        }
    }

    /// Creates a catalog over other static collections, keeping the shipped
    /// category lists.
    pub fn new(
        products: &'static [Product],
        services: &'static [Service],
        stores: &'static [Store],
    ) -> Self {
        Self {
            products,
            services,
            stores,
            ..Self::builtin()
        }
    }

    pub fn find_product(&self, id: &str) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn find_service(&self, id: &str) -> Option<&'static Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn find_store(&self, id: &str) -> Option<&'static Store> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Looks up an item of a known kind.
    ///
    /// Product, service and store identifiers live in separate namespaces
    /// (`"s1"` is both a service and a store), so the kind is required.
    pub fn find(&self, kind: ItemKind, id: &str) -> Option<CatalogItem> {
        match kind {
            ItemKind::Product => self.find_product(id).map(CatalogItem::Product),
            ItemKind::Service => self.find_service(id).map(CatalogItem::Service),
            ItemKind::Store => self.find_store(id).map(CatalogItem::Store),
        }
    }

    pub fn list_products(&self) -> &'static [Product] {
        self.products
    }

    pub fn list_services(&self) -> &'static [Service] {
        self.services
    }

    pub fn list_stores(&self) -> &'static [Store] {
        self.stores
    }

    pub fn product_categories(&self) -> &'static [&'static str] {
        self.product_categories
    }

    pub fn service_categories(&self) -> &'static [&'static str] {
        self.service_categories
    }

    /// Category chips offered when exploring the given kind.
    pub fn categories_for(&self, kind: ItemKind) -> &'static [&'static str] {
        match kind {
            ItemKind::Product => self.product_categories,
            ItemKind::Service => self.service_categories,
            ItemKind::Store => &[],
        }
    }

    /// Every purchasable item: products first, then services.
    pub fn offerings(&self) -> impl Iterator<Item = Offering> + '_ {
        self.products
            .iter()
            .map(Offering::Product)
            .chain(self.services.iter().map(Offering::Service))
    }

    /// Number of purchasable items.
    pub fn offering_count(&self) -> usize {
        self.products.len() + self.services.len()
    }

    /// Items of one collection, in declaration order.
    pub fn items(&self, kind: ItemKind) -> Vec<CatalogItem> {
        match kind {
            ItemKind::Product => self.products.iter().map(CatalogItem::Product).collect(),
            ItemKind::Service => self.services.iter().map(CatalogItem::Service).collect(),
            ItemKind::Store => self.stores.iter().map(CatalogItem::Store).collect(),
        }
    }

    /// Runs an explore query. Results keep declaration order.
    pub fn search(&self, query: &CatalogQuery) -> Vec<CatalogItem> {
        let results: Vec<_> = self
            .items(query.kind)
            .into_iter()
            .filter(|item| query.matches(item))
            .collect();
        tracing::debug!(kind = %query.kind, results = results.len(), "catalog search");
        results
    }

    /// Products a store sells and services it provides.
    pub fn offerings_by_store(&self, store_id: &str) -> Vec<Offering> {
        self.offerings()
            .filter(|o| o.seller_id() == store_id)
            .collect()
    }

    /// The leading items of each collection, as shown on the home screen.
    pub fn featured(&self) -> Featured {
        Featured {
            products: &self.products[..FEATURED_PRODUCTS.min(self.products.len())],
            services: &self.services[..FEATURED_SERVICES.min(self.services.len())],
            stores: &self.stores[..FEATURED_STORES.min(self.stores.len())],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
