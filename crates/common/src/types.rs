use serde::{Deserialize, Serialize};
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of base36 digits needed to render any `u128`.
const ORDER_ID_LEN: usize = 25;

/// Unique identifier for an order.
///
/// Freshly generated identifiers are 25 lowercase base36 characters taken from
/// a random v4 UUID. The value is kept as a string so identifiers written by
/// older clients, whatever their shape, still round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generates a new random order ID.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Renders a UUID as a fixed-width base36 order ID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let mut value = uuid.as_u128();
        let mut digits = [b'0'; ORDER_ID_LEN];
        for slot in digits.iter_mut().rev() {
            *slot = BASE36[(value % 36) as usize];
            value /= 36;
        }
        // digits only ever holds ASCII from BASE36
        Self(digits.iter().map(|&b| b as char).collect())
    }

    /// Wraps an existing identifier without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a catalog item (product, service or store), e.g. `"p1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates a new item ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the item ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// What kind of catalog item an order was placed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// A part bought for pickup at a store.
    Product,
    /// A service booked with a provider.
    Service,
}

impl ItemType {
    /// Returns the type name as written in persisted orders.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Product => "product",
            ItemType::Service => "service",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
