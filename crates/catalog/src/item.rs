//! Tagged views over catalog records.

use common::{ItemId, ItemType, Price};
use serde::{Deserialize, Serialize};

use crate::records::{Product, Service, Store};

/// Discriminant for the three kinds of catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Product,
    Service,
    Store,
}

impl ItemKind {
    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Product => "product",
            ItemKind::Service => "service",
            ItemKind::Store => "store",
        }
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ItemKind::Product),
            "service" => Ok(ItemKind::Service),
            "store" => Ok(ItemKind::Store),
            other => Err(format!("unknown item kind: {other}")),
        }
    }
}

impl From<ItemType> for ItemKind {
    fn from(item_type: ItemType) -> Self {
        match item_type {
            ItemType::Product => ItemKind::Product,
            ItemType::Service => ItemKind::Service,
        }
    }
}

/// Any catalog record, tagged with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Product(&'static Product),
    Service(&'static Service),
    Store(&'static Store),
}

impl CatalogItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            CatalogItem::Product(_) => ItemKind::Product,
            CatalogItem::Service(_) => ItemKind::Service,
            CatalogItem::Store(_) => ItemKind::Store,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.id,
            CatalogItem::Service(s) => s.id,
            CatalogItem::Store(s) => s.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.name,
            CatalogItem::Service(s) => s.name,
            CatalogItem::Store(s) => s.name,
        }
    }

    pub fn location(&self) -> &'static str {
        match self {
            CatalogItem::Product(p) => p.location,
            CatalogItem::Service(s) => s.location,
            CatalogItem::Store(s) => s.location,
        }
    }

    pub fn rating(&self) -> f32 {
        match self {
            CatalogItem::Product(p) => p.rating,
            CatalogItem::Service(s) => s.rating,
            CatalogItem::Store(s) => s.rating,
        }
    }

    /// Returns the purchasable view of this item, if it is one.
    pub fn as_offering(&self) -> Option<Offering> {
        match *self {
            CatalogItem::Product(p) => Some(Offering::Product(p)),
            CatalogItem::Service(s) => Some(Offering::Service(s)),
            CatalogItem::Store(_) => None,
        }
    }
}

/// A catalog item that can be bought or booked.
///
/// The seller is the owning store for products and the provider for services.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Offering {
    Product(&'static Product),
    Service(&'static Service),
}

impl Offering {
    pub fn item_type(&self) -> ItemType {
        match self {
            Offering::Product(_) => Product::ITEM_TYPE,
            Offering::Service(_) => Service::ITEM_TYPE,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.id,
            Offering::Service(s) => s.id,
        }
    }

    /// Returns the identifier as an owned [`ItemId`].
    pub fn item_id(&self) -> ItemId {
        ItemId::new(self.id())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.name,
            Offering::Service(s) => s.name,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.category,
            Offering::Service(s) => s.category,
        }
    }

    pub fn price(&self) -> Price {
        match self {
            Offering::Product(p) => p.price,
            Offering::Service(s) => s.price,
        }
    }

    /// Identifier of the store or provider.
    pub fn seller_id(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.store_id,
            Offering::Service(s) => s.provider_id,
        }
    }

    /// Display name of the store or provider.
    pub fn seller_name(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.store,
            Offering::Service(s) => s.provider,
        }
    }

    pub fn location(&self) -> &'static str {
        match self {
            Offering::Product(p) => p.location,
            Offering::Service(s) => s.location,
        }
    }
}

impl From<Offering> for CatalogItem {
    fn from(offering: Offering) -> Self {
        match offering {
            Offering::Product(p) => CatalogItem::Product(p),
            Offering::Service(s) => CatalogItem::Service(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    #[test]
    fn test_kind_parses_and_displays() {
        for kind in [ItemKind::Product, ItemKind::Service, ItemKind::Store] {
            assert_eq!(kind.to_string().parse::<ItemKind>().unwrap(), kind);
        }
        assert!("garage".parse::<ItemKind>().is_err());
    }

    #[test]
    fn test_store_has_no_offering_view() {
        let catalog = Catalog::builtin();
        let store = CatalogItem::Store(catalog.find_store("s1").unwrap());
        assert_eq!(store.kind(), ItemKind::Store);
        assert!(store.as_offering().is_none());
    }

    #[test]
    fn test_offering_exposes_seller_snapshot() {
        let catalog = Catalog::builtin();
        let product = Offering::Product(catalog.find_product("p2").unwrap());
        assert_eq!(product.item_type(), ItemType::Product);
        assert_eq!(product.seller_name(), "LubriTech");
        assert_eq!(product.location(), "Oran");

        let service = Offering::Service(catalog.find_service("s4").unwrap());
        assert_eq!(service.item_type(), ItemType::Service);
        assert_eq!(service.seller_name(), "DiagTech Auto");
        assert_eq!(service.seller_id(), "s9");
    }

    #[test]
    fn test_catalog_item_serializes_with_kind_tag() {
        let catalog = Catalog::builtin();
        let item = CatalogItem::Product(catalog.find_product("p1").unwrap());
        let json = serde_json::to_value(item).unwrap();
        assert_eq!(json["kind"], "product");
        assert_eq!(json["name"], "Premium Brake Pads");
        assert_eq!(json["storeId"], "s1");
    }
}
