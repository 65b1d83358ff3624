//! Boutique Cart engine.
//!
//! This crate owns the cart state: the line item model, the merge and
//! clamping rules, and the persistence contract. It has no view code — a
//! rendering layer (the `boutique-cli` crate, a web page, anything) reads
//! the query surface and dispatches commands.
//!
//! # Architecture
//!
//! - [`storage`] - Key-value persistence collaborator (trait + backends)
//! - [`store`] - [`CartStore`]: the authoritative item list and derived totals
//! - [`controller`] - [`CartController`]: the command surface mutating the store
//! - [`item`] - The [`LineItem`] model and [`NewLineItem`] candidates
//!
//! Every mutating command finishes its read-modify-write-persist cycle
//! before returning; the engine is synchronous and single-writer by design.
//! No command returns an error: bad input degrades to safe defaults and
//! storage failures are logged, not propagated.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod controller;
pub mod item;
pub mod storage;
pub mod store;

pub use controller::CartController;
pub use item::{LineItem, NewLineItem};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use store::{CART_KEY, CartStore, CartTotals};
