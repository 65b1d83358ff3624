//! Core types for Boutique Cart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod quantity;
pub mod variant;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use quantity::Quantity;
pub use variant::{DEFAULT_SIZE, Variant};
