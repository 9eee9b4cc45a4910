use serde::{Deserialize, Serialize};

/// A price in whole Algerian dinars, the smallest unit the storefront quotes.
///
/// Prices are never negative, so the amount is unsigned.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Currency suffix used when displaying prices.
    pub const CURRENCY: &'static str = "DZD";

    /// Creates a price from an amount in dinars.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns zero.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in dinars.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Returns true if the price is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Price {
    /// Formats as `4 500 DZD`, grouping thousands with spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        write!(f, "{grouped} {}", Self::CURRENCY)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}
