//! Pickup confirmation codes.

use rand::Rng;
use serde::{Deserialize, Serialize};

const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Code shown to store staff when the customer picks up an order.
///
/// Six characters, each drawn uniformly from `A-Z0-9`. Codes are a display
/// convenience: two orders may share a code, and nothing relies on them being
/// unguessable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Number of characters in a code.
    pub const LEN: usize = 6;

    /// Generates a code from the thread-local random source.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generates a code from the given random source.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..Self::LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the code has the expected length and alphabet.
    ///
    /// Generated codes always do; codes loaded from storage are kept as-is.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == Self::LEN && self.0.bytes().all(|b| ALPHABET.contains(&b))
    }
}

impl std::fmt::Display for ConfirmationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ConfirmationCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
