//! Integration tests for Boutique Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p boutique-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Full sessions over a file-backed store, including
//!   reload-across-process behavior
//! - `legacy_state` - Loading carts persisted by other writers (and the
//!   recovery path for corrupt state)

#![cfg_attr(not(test), forbid(unsafe_code))]

use boutique_cart::{CartController, FileStorage};
use tempfile::TempDir;

/// A controller over a throwaway storage directory.
///
/// Keep the returned `TempDir` alive for as long as the controller is in
/// use; dropping it deletes the backing files.
#[must_use]
pub fn temp_cart() -> (TempDir, CartController<FileStorage>) {
    let dir = TempDir::new().expect("create temp storage dir");
    let cart = CartController::new(FileStorage::new(dir.path()));
    (dir, cart)
}
