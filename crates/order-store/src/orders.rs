use chrono::Utc;
use common::OrderId;
use domain::{ConfirmationCode, NewOrder, Order};

use crate::{Result, storage::Storage};

/// Storage slot used by the shipped app.
pub const DEFAULT_ORDERS_KEY: &str = "autodinar_orders";

/// The device-local order history.
///
/// All orders live in one slot as a JSON array, newest first. Every `create`
/// reads the array, prepends the new order and writes the whole array back,
/// so the cost of placing an order grows with the history. That is fine for a
/// single user's few dozen orders.
///
/// The store fails open: an unreadable or malformed slot lists as empty, and
/// the next successful `create` overwrites it.
pub struct OrderStore<S: Storage> {
    storage: S,
    key: String,
}

impl<S: Storage> OrderStore<S> {
    /// Creates an order store over the default slot.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_ORDERS_KEY)
    }

    /// Creates an order store over a custom slot.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Returns a reference to the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the slot name.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Places an order and persists it ahead of the existing history.
    ///
    /// The order is returned even if it could not be written: the failure is
    /// logged and counted, and the order exists for the current session only.
    #[tracing::instrument(skip(self, input), fields(item_id = %input.item_id, item_type = %input.item_type))]
    pub fn create(&self, input: NewOrder) -> Order {
        let mut orders = self.list();

        let mut id = OrderId::generate();
        while orders.iter().any(|o| o.id() == &id) {
            id = OrderId::generate();
        }
        let order = Order::place_with(input, id, ConfirmationCode::generate(), Utc::now());

        orders.insert(0, order.clone());
        match self.save(&orders) {
            Ok(()) => {
                metrics::counter!("orders_created_total").increment(1);
                tracing::info!(
                    order_id = %order.id(),
                    orders = orders.len(),
                    "order created"
                );
            }
            Err(e) => {
                metrics::counter!("order_store_write_failures_total").increment(1);
                tracing::error!(
                    order_id = %order.id(),
                    error = %e,
                    "failed to persist order"
                );
            }
        }

        order
    }

    /// Returns every order, most recently created first.
    ///
    /// Never fails: a missing slot is an empty history, and a slot that cannot
    /// be read or parsed is treated the same way.
    pub fn list(&self) -> Vec<Order> {
        match self.load() {
            Ok(orders) => orders,
            Err(e) => {
                metrics::counter!("order_store_read_recoveries_total").increment(1);
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "order history unreadable, starting from empty"
                );
                Vec::new()
            }
        }
    }

    /// Finds an order by identifier.
    pub fn get_by_id(&self, id: &OrderId) -> Option<Order> {
        self.list().into_iter().find(|o| o.id() == id)
    }

    fn load(&self) -> Result<Vec<Order>> {
        match self.storage.get(&self.key)? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    fn save(&self, orders: &[Order]) -> Result<()> {
        let bytes = serde_json::to_vec(orders)?;
        self.storage.set(&self.key, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use common::{ItemType, Price};

    use super::*;
    use crate::InMemoryStorage;

    fn air_filter() -> NewOrder {
        NewOrder::new(
            "p3",
            "Air Filter",
            Price::new(1200),
            ItemType::Product,
            "FilterPro Blida",
            "Blida",
        )
    }

    #[test]
    fn test_uses_default_slot() {
        let store = OrderStore::new(InMemoryStorage::new());
        store.create(air_filter());
        assert_eq!(store.key(), "autodinar_orders");
        assert!(store.storage().raw(DEFAULT_ORDERS_KEY).is_some());
    }

    #[test]
    fn test_custom_slots_are_independent() {
        let storage = InMemoryStorage::new();
        let a = OrderStore::with_key(storage.clone(), "orders_a");
        let b = OrderStore::with_key(storage.clone(), "orders_b");

        a.create(air_filter());

        assert_eq!(a.list().len(), 1);
        assert!(b.list().is_empty());
        assert_eq!(storage.slot_count(), 1);
    }

    #[test]
    fn test_persisted_blob_is_a_json_array() {
        let store = OrderStore::new(InMemoryStorage::new());
        let order = store.create(air_filter());

        let raw = store.storage().raw(DEFAULT_ORDERS_KEY).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["id"], order.id().as_str());
        assert_eq!(array[0]["status"], "Pickup Pending");
    }
}
