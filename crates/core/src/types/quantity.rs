//! Line item quantity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A cart line quantity, always at least 1.
///
/// A quantity of zero never exists in a cart: removing an item is an
/// explicit command, not a side effect of counting down. Constructors and
/// mutators clamp instead of failing so callers never see an error for
/// out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The minimum quantity of a cart line.
    pub const ONE: Self = Self(1);

    /// Create a quantity, clamping anything below 1 up to 1.
    #[must_use]
    pub fn clamped(value: i64) -> Self {
        let value = value.clamp(1, i64::from(u32::MAX));
        Self(u32::try_from(value).unwrap_or(1))
    }

    /// Get the quantity as a plain integer.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// The quantity one step higher.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The quantity one step lower, never going below 1.
    #[must_use]
    pub const fn decremented(self) -> Self {
        if self.0 > 1 { Self(self.0 - 1) } else { Self(1) }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
