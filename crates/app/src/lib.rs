//! Storefront front end over the catalog, the order history and the
//! recommendation selector.
//!
//! [`Storefront`] performs the flows the screens need (buy, book, confirm,
//! explore, recommend) and the `storefront` binary exposes them on the command
//! line through [`cli`].

pub mod cli;
pub mod config;
pub mod error;

use catalog::{Catalog, CatalogItem, CatalogQuery, Featured, ItemKind, Offering, Store};
use common::OrderId;
use domain::{NewOrder, Order, Recommender};
use order_store::{FileStorage, OrderStore, Storage};
use serde::Serialize;

use config::Config;
use error::AppError;

pub type Result<T> = std::result::Result<T, AppError>;

/// A store together with what it sells.
#[derive(Debug, Clone, Serialize)]
pub struct StoreDetails {
    pub store: &'static Store,
    pub offerings: Vec<Offering>,
}

/// The storefront: catalog lookups plus the device-local order history.
pub struct Storefront<S: Storage> {
    catalog: Catalog,
    orders: OrderStore<S>,
    recommender: Recommender,
}

impl Storefront<FileStorage> {
    /// Opens the storefront over the order history in the configured data
    /// directory, creating the directory if needed.
    ///
    /// Fails with [`StorageError::InvalidKey`] if the configured orders key
    /// cannot name a storage slot.
    ///
    /// [`StorageError::InvalidKey`]: order_store::StorageError::InvalidKey
    pub fn open(config: &Config) -> Result<Self> {
        order_store::validate_key(&config.orders_key)?;
        let storage = FileStorage::open(&config.data_dir)?;
        tracing::debug!(data_dir = %config.data_dir.display(), "opened order history");
        Ok(Self::new(
            Catalog::builtin(),
            OrderStore::with_key(storage, config.orders_key.clone()),
        ))
    }
}

impl<S: Storage> Storefront<S> {
    pub fn new(catalog: Catalog, orders: OrderStore<S>) -> Self {
        Self {
            catalog,
            orders,
            recommender: Recommender::new(catalog),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn order_store(&self) -> &OrderStore<S> {
        &self.orders
    }

    /// Buys a product for in-store pickup.
    #[tracing::instrument(skip(self))]
    pub fn buy_product(&self, product_id: &str) -> Result<Order> {
        let product = self
            .catalog
            .find_product(product_id)
            .ok_or_else(|| AppError::ItemNotFound {
                kind: ItemKind::Product,
                id: product_id.to_string(),
            })?;
        Ok(self.place(Offering::Product(product)))
    }

    /// Books a service with its provider.
    #[tracing::instrument(skip(self))]
    pub fn book_service(&self, service_id: &str) -> Result<Order> {
        let service = self
            .catalog
            .find_service(service_id)
            .ok_or_else(|| AppError::ItemNotFound {
                kind: ItemKind::Service,
                id: service_id.to_string(),
            })?;
        Ok(self.place(Offering::Service(service)))
    }

    fn place(&self, offering: Offering) -> Order {
        self.orders.create(NewOrder::for_offering(offering))
    }

    /// The order shown on the confirmation screen.
    pub fn order_confirmation(&self, id: &OrderId) -> Result<Order> {
        self.orders
            .get_by_id(id)
            .ok_or_else(|| AppError::OrderNotFound(id.clone()))
    }

    /// Order history, most recent first.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.list()
    }

    /// Picks offerings for the "AI picks" screen.
    pub fn recommend(&self, vehicle: &str, past_purchases: &str) -> Result<Vec<Offering>> {
        let picks = self.recommender.recommend(vehicle, past_purchases)?;
        metrics::counter!("recommendations_served_total").increment(1);
        Ok(picks)
    }

    /// Runs an explore query.
    pub fn explore(&self, query: &CatalogQuery) -> Vec<CatalogItem> {
        self.catalog.search(query)
    }

    /// Category chips offered for a kind on the explore screen.
    pub fn categories(&self, kind: ItemKind) -> &'static [&'static str] {
        self.catalog.categories_for(kind)
    }

    /// Items highlighted on the home screen.
    pub fn featured(&self) -> Featured {
        self.catalog.featured()
    }

    /// A store page: the store and its products and services.
    pub fn store_details(&self, store_id: &str) -> Result<StoreDetails> {
        let store = self
            .catalog
            .find_store(store_id)
            .ok_or_else(|| AppError::ItemNotFound {
                kind: ItemKind::Store,
                id: store_id.to_string(),
            })?;
        Ok(StoreDetails {
            store,
            offerings: self.catalog.offerings_by_store(store_id),
        })
    }
}
