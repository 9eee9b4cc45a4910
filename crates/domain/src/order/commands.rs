//! Order creation input.

use catalog::Offering;
use common::{ItemId, ItemType, Price};

/// Everything needed to place an order, captured at purchase time.
///
/// The item and seller fields are copied, not referenced: later catalog
/// changes never alter an order that was already placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub item_id: ItemId,
    pub item_name: String,
    pub item_price: Price,
    pub item_type: ItemType,
    /// Store name for products, provider name for services.
    pub store_name: String,
    pub store_location: String,
}

impl NewOrder {
    /// Creates an order input from explicit values.
    pub fn new(
        item_id: impl Into<ItemId>,
        item_name: impl Into<String>,
        item_price: Price,
        item_type: ItemType,
        store_name: impl Into<String>,
        store_location: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            item_price,
            item_type,
            store_name: store_name.into(),
            store_location: store_location.into(),
        }
    }

    /// Snapshots a catalog offering and its seller.
    pub fn for_offering(offering: Offering) -> Self {
        Self {
            item_id: offering.item_id(),
            item_name: offering.name().to_string(),
            item_price: offering.price(),
            item_type: offering.item_type(),
            store_name: offering.seller_name().to_string(),
            store_location: offering.location().to_string(),
        }
    }
}

impl From<Offering> for NewOrder {
    fn from(offering: Offering) -> Self {
        Self::for_offering(offering)
    }
}
