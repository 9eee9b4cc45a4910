//! The order record.

use chrono::{DateTime, Utc};
use common::{ItemId, ItemType, OrderId, Price};
use serde::{Deserialize, Serialize};

use super::{ConfirmationCode, NewOrder, OrderError, OrderStatus};

/// A purchase or booking, as persisted in the order history.
///
/// Field names follow the stored JSON layout (`itemId`, `confirmationCode`,
/// ...). Apart from [`Order::mark_completed`] an order never changes after it
/// is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    id: OrderId,
    item_id: ItemId,
    item_name: String,
    item_price: Price,
    item_type: ItemType,
    store_name: String,
    store_location: String,
    /// When the order was placed.
    date: DateTime<Utc>,
    status: OrderStatus,
    confirmation_code: ConfirmationCode,
}

impl Order {
    /// Places an order now, with a fresh identifier and confirmation code.
    pub fn place(input: NewOrder) -> Self {
        Self::place_with(
            input,
            OrderId::generate(),
            ConfirmationCode::generate(),
            Utc::now(),
        )
    }

    /// Places an order with caller-supplied identity and timestamp.
    pub fn place_with(
        input: NewOrder,
        id: OrderId,
        confirmation_code: ConfirmationCode,
        date: DateTime<Utc>,
    ) -> Self {
        let NewOrder {
            item_id,
            item_name,
            item_price,
            item_type,
            store_name,
            store_location,
        } = input;

        Self {
            id,
            item_id,
            item_name,
            item_price,
            item_type,
            store_name,
            store_location,
            date,
            status: OrderStatus::PickupPending,
            confirmation_code,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn item_price(&self) -> Price {
        self.item_price
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    pub fn store_location(&self) -> &str {
        &self.store_location
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn confirmation_code(&self) -> &ConfirmationCode {
        &self.confirmation_code
    }

    /// Records that the customer picked the order up.
    ///
    /// This is the only mutation an order allows. The storefront itself never
    /// calls it; it exists for staff-side pickup confirmation.
    pub fn mark_completed(&mut self) -> Result<(), OrderError> {
        if !self.status.can_complete() {
            return Err(OrderError::InvalidStatusTransition {
                current: self.status,
                target: OrderStatus::Completed,
            });
        }
        self.status = OrderStatus::Completed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn brake_pads() -> NewOrder {
        NewOrder::new(
            "p1",
            "Premium Brake Pads",
            Price::new(4500),
            ItemType::Product,
            "AutoParts Algiers",
            "Algiers",
        )
    }

    #[test]
    fn test_placed_order_is_pickup_pending() {
        let order = Order::place(brake_pads());
        assert_eq!(order.status(), OrderStatus::PickupPending);
        assert!(order.confirmation_code().is_well_formed());
        assert_eq!(order.item_name(), "Premium Brake Pads");
        assert_eq!(order.store_location(), "Algiers");
    }

    #[test]
    fn test_placed_orders_get_distinct_ids() {
        let a = Order::place(brake_pads());
        let b = Order::place(brake_pads());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_complete_once() {
        let mut order = Order::place(brake_pads());
        order.mark_completed().unwrap();
        assert_eq!(order.status(), OrderStatus::Completed);

        let err = order.mark_completed().unwrap_err();
        assert!(matches!(
            err,
            OrderError::InvalidStatusTransition {
                current: OrderStatus::Completed,
                ..
            }
        ));
    }

    #[test]
    fn test_serializes_with_camel_case_layout() {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap();
        let order = Order::place_with(
            brake_pads(),
            OrderId::new("abc123"),
            ConfirmationCode::from("K7Q2ZP"),
            date,
        );

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["itemId"], "p1");
        assert_eq!(json["itemPrice"], 4500);
        assert_eq!(json["itemType"], "product");
        assert_eq!(json["storeName"], "AutoParts Algiers");
        assert_eq!(json["status"], "Pickup Pending");
        assert_eq!(json["confirmationCode"], "K7Q2ZP");
        assert_eq!(json["date"], "2024-05-01T09:30:00Z");
    }

    #[test]
    fn test_date_is_parseable_iso_8601() {
        let order = Order::place(brake_pads());
        let json = serde_json::to_value(&order).unwrap();
        let raw = json["date"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(raw).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), order.date());
    }

    #[test]
    fn test_reads_order_written_by_web_client() {
        let json = r#"{
            "id": "x8f2kq9m1l0abc7h3n5p2",
            "itemId": "s2",
            "itemName": "Oil Change Service",
            "itemPrice": 3500,
            "itemType": "service",
            "storeName": "QuickService Garage",
            "storeLocation": "Oran",
            "date": "2024-03-12T14:05:33.123Z",
            "status": "Pickup Pending",
            "confirmationCode": "A1B2C3"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id().as_str(), "x8f2kq9m1l0abc7h3n5p2");
        assert_eq!(order.item_type(), ItemType::Service);
        assert_eq!(order.status(), OrderStatus::PickupPending);
        assert_eq!(order.date().timestamp_subsec_millis(), 123);
    }
}
