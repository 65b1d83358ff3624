//! Boutique Core - Shared types library.
//!
//! This crate provides common types used across all Boutique Cart components:
//! - `cart` - The cart state engine (store, controller, persistence)
//! - `cli` - The command-line view layer
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities, and
//!   product variants

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
