//! Cart line items and add candidates.

use boutique_core::{CurrencyCode, LineItemId, Price, Quantity, Variant};

/// One entry in the cart: a product/variant selection and its quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// Stable handle for targeted mutations; assigned at creation.
    pub id: LineItemId,
    /// Product name.
    pub name: String,
    /// Numeric unit price extracted from the display text.
    pub unit_price: Price,
    /// Original formatted price text, kept verbatim for display fidelity.
    pub price_display: String,
    /// Product image reference; possibly empty.
    pub image: String,
    /// Selected size/color pair.
    pub variant: Variant,
    /// How many of this selection are in the cart; always at least 1.
    pub quantity: Quantity,
}

impl LineItem {
    /// Whether this line matches a candidate's merge key
    /// (name, size, color).
    #[must_use]
    pub fn matches(&self, candidate: &NewLineItem) -> bool {
        self.name == candidate.name
            && self.variant.size == candidate.variant().size
            && self.variant.color == candidate.variant().color
    }

    /// The line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        Price::new(
            self.unit_price.amount * rust_decimal::Decimal::from(self.quantity.get()),
            self.unit_price.currency_code,
        )
    }
}

/// An add-to-cart candidate, as handed over by the view layer.
///
/// Carries no quantity on purpose: each add contributes exactly one unit,
/// whether it merges into an existing line or opens a new one.
#[derive(Debug, Clone)]
pub struct NewLineItem {
    name: String,
    price_text: String,
    image: String,
    variant: Variant,
}

impl NewLineItem {
    /// Create a candidate from raw view-layer fields.
    ///
    /// `price_text` is the display text as scraped or entered
    /// (e.g. `"1500 DA"`); the numeric amount is extracted leniently when
    /// the candidate materializes into a [`LineItem`]. Missing size/color
    /// selections fall back to the variant defaults.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price_text: impl Into<String>,
        image: Option<String>,
        size: Option<String>,
        color: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price_text: price_text.into(),
            image: image.unwrap_or_default(),
            variant: Variant::new(size, color),
        }
    }

    /// The candidate's product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The candidate's variant selection.
    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Materialize the candidate into a fresh cart line with quantity 1.
    #[must_use]
    pub fn into_line_item(self, currency: CurrencyCode) -> LineItem {
        let unit_price = Price::parse_lenient(&self.price_text, currency);
        LineItem {
            id: LineItemId::generate(),
            name: self.name,
            unit_price,
            price_display: self.price_text,
            image: self.image,
            variant: self.variant,
            quantity: Quantity::ONE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: Option<&str>, color: Option<&str>) -> NewLineItem {
        NewLineItem::new(
            name,
            "1000 DA",
            None,
            size.map(str::to_owned),
            color.map(str::to_owned),
        )
    }

    #[test]
    fn materialized_candidate_starts_at_quantity_one() {
        let item = candidate("Shirt", Some("M"), Some("Red")).into_line_item(CurrencyCode::DZD);
        assert_eq!(item.quantity, Quantity::ONE);
        assert_eq!(item.price_display, "1000 DA");
        assert_eq!(item.unit_price.amount, rust_decimal::Decimal::from(1000));
    }

    #[test]
    fn merge_key_is_name_size_color() {
        let item = candidate("Shirt", Some("M"), Some("Red")).into_line_item(CurrencyCode::DZD);

        assert!(item.matches(&candidate("Shirt", Some("M"), Some("Red"))));
        assert!(!item.matches(&candidate("Shirt", Some("L"), Some("Red"))));
        assert!(!item.matches(&candidate("Shirt", Some("M"), Some("Blue"))));
        assert!(!item.matches(&candidate("Jacket", Some("M"), Some("Red"))));
    }

    #[test]
    fn line_total_scales_with_quantity() {
        let mut item = candidate("Shirt", None, None).into_line_item(CurrencyCode::DZD);
        item.quantity = Quantity::clamped(3);
        assert_eq!(item.line_total().amount, rust_decimal::Decimal::from(3000));
    }
}
