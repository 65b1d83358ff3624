//! Plain-text rendering of the cart.
//!
//! Rendering is a pure function of the controller's query surface so it
//! can be tested without touching stdout or storage.

use boutique_cart::{CartTotals, LineItem};

/// Render the full cart: one row per line item plus the grand total.
///
/// The empty cart gets its own branch, mirroring the storefront's
/// "Your cart is empty" state.
#[must_use]
pub fn render_cart(items: &[LineItem], totals: &CartTotals) -> String {
    if items.is_empty() {
        return "Your cart is empty\n".to_owned();
    }

    let mut out = String::new();
    for item in items {
        out.push_str(&render_line(item));
    }
    out.push_str(&format!("Total: {}\n", totals.total_price.display()));
    out
}

fn render_line(item: &LineItem) -> String {
    let mut line = format!("{}  [{}]", item.name, item.id);
    if !item.variant.is_default_size() {
        line.push_str(&format!("  Size: {}", item.variant.size));
    }
    if item.variant.has_color() {
        line.push_str(&format!("  Color: {}", item.variant.color));
    }
    line.push_str(&format!(
        "  x{}  {}\n",
        item.quantity,
        item.line_total().display()
    ));
    line
}

/// Render the count badge: empty when the cart is empty, otherwise the
/// literal item count.
#[must_use]
pub fn render_count(total_items: u64) -> String {
    if total_items == 0 {
        String::new()
    } else {
        total_items.to_string()
    }
}
