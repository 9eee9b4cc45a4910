//! Integration tests for placing orders from catalog offerings.
//!
//! These tests go from a catalog lookup to a persisted-shape order and back,
//! checking that the purchase-time snapshot survives serialization.

use catalog::{Catalog, Offering};
use common::{ItemType, Price};
use domain::{NewOrder, Order, OrderError, OrderStatus, Recommender};

mod placing_orders {
    use super::*;

    #[test]
    fn test_buy_product_from_catalog() {
        let catalog = Catalog::builtin();
        let product = catalog.find_product("p1").unwrap();

        let order = Order::place(NewOrder::for_offering(Offering::Product(product)));

        assert_eq!(order.item_id().as_str(), "p1");
        assert_eq!(order.item_name(), "Premium Brake Pads");
        assert_eq!(order.item_price(), Price::new(4500));
        assert_eq!(order.item_type(), ItemType::Product);
        assert_eq!(order.store_name(), "AutoParts Algiers");
        assert_eq!(order.status(), OrderStatus::PickupPending);
        assert!(order.confirmation_code().is_well_formed());
    }

    #[test]
    fn test_book_service_from_catalog() {
        let catalog = Catalog::builtin();
        let service = catalog.find_service("s7").unwrap();

        let order = Order::place(Offering::Service(service).into());

        assert_eq!(order.item_type(), ItemType::Service);
        assert_eq!(order.store_name(), "ElectroCar");
        assert_eq!(order.store_location(), "Sétif");
    }

    #[test]
    fn test_recommended_items_can_be_ordered() {
        let picks = Recommender::new(Catalog::builtin())
            .recommend("Renault Clio 2018", "")
            .unwrap();

        for pick in picks {
            let order = Order::place(NewOrder::from(pick));
            assert_eq!(order.item_id().as_str(), pick.id());
            assert_eq!(order.item_type(), pick.item_type());
        }
    }
}

mod persistence_shape {
    use super::*;

    #[test]
    fn test_order_survives_json_roundtrip() {
        let product = Catalog::builtin().find_product("p3").unwrap();
        let order = Order::place(Offering::Product(product).into());

        let json = serde_json::to_string(&order).unwrap();
        let restored: Order = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, order);
    }

    #[test]
    fn test_completed_order_roundtrips_status() {
        let product = Catalog::builtin().find_product("p5").unwrap();
        let mut order = Order::place(Offering::Product(product).into());
        order.mark_completed().unwrap();

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains(r#""status":"Completed""#));

        let restored: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.status(), OrderStatus::Completed);
        assert!(matches!(
            restored.clone().mark_completed(),
            Err(OrderError::InvalidStatusTransition { .. })
        ));
    }
}
