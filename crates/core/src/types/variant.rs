//! Product variant selection.

use serde::{Deserialize, Serialize};

/// The sentinel size used when a product has no size options.
pub const DEFAULT_SIZE: &str = "One Size";

/// The (size, color) pair distinguishing otherwise-identical products.
///
/// Together with the product name this forms the merge key: adding an item
/// whose name and variant match an existing cart line increments that line
/// instead of creating a second entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    /// Selected size, or [`DEFAULT_SIZE`] when none applies.
    pub size: String,
    /// Selected color; empty when none was chosen.
    pub color: String,
}

impl Variant {
    /// Create a variant, substituting the defaults for missing selections.
    #[must_use]
    pub fn new(size: Option<String>, color: Option<String>) -> Self {
        Self {
            size: size.unwrap_or_else(|| DEFAULT_SIZE.to_owned()),
            color: color.unwrap_or_default(),
        }
    }

    /// Whether the size is the "no size options" sentinel.
    #[must_use]
    pub fn is_default_size(&self) -> bool {
        self.size == DEFAULT_SIZE
    }

    /// Whether a color was chosen.
    #[must_use]
    pub fn has_color(&self) -> bool {
        !self.color.is_empty()
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_size_and_no_color() {
        let variant = Variant::default();
        assert_eq!(variant.size, DEFAULT_SIZE);
        assert!(variant.is_default_size());
        assert!(!variant.has_color());
    }

    #[test]
    fn explicit_selections_are_kept() {
        let variant = Variant::new(Some("M".to_owned()), Some("Red".to_owned()));
        assert_eq!(variant.size, "M");
        assert_eq!(variant.color, "Red");
        assert!(variant.has_color());
    }
}
