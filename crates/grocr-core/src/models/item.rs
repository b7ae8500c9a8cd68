//! Parsed pantry item model.

use serde::{Deserialize, Serialize};

/// Default unit when a line carries no unit token.
pub const DEFAULT_UNIT: &str = "pcs";

/// Default quantity when a line carries no quantity token.
pub const DEFAULT_QUANTITY: &str = "1";

/// A single candidate pantry item extracted from a receipt.
///
/// Quantities stay strings: the review UI edits them as text, and OCR
/// output is too noisy to commit to a numeric type this early.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// Cleaned product name. Never empty - a line that would produce an
    /// empty name is dropped instead.
    pub name: String,

    /// Numeric literal with '.' as the decimal separator.
    #[serde(default = "default_quantity")]
    pub quantity: String,

    /// Canonical unit token after synonym folding.
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_quantity() -> String {
    DEFAULT_QUANTITY.to_string()
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

impl ParsedItem {
    /// Create an item with defaults for missing quantity/unit.
    pub fn new(name: impl Into<String>, quantity: Option<String>, unit: Option<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.unwrap_or_else(default_quantity),
            unit: unit.unwrap_or_else(default_unit),
        }
    }

    /// De-duplication key for the heuristic path: lowercased name only.
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Composite de-duplication key for the model-assisted path. Lets the
    /// same product appear twice with different package sizes.
    pub fn composite_key(&self) -> String {
        format!("{}\u{1f}{}\u{1f}{}", self.name.to_lowercase(), self.quantity, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_applies_defaults() {
        let item = ParsedItem::new("Milk", None, None);
        assert_eq!(item.quantity, "1");
        assert_eq!(item.unit, "pcs");
    }

    #[test]
    fn test_name_key_is_case_insensitive() {
        let a = ParsedItem::new("Organic Milk", None, None);
        let b = ParsedItem::new("ORGANIC MILK", None, None);
        assert_eq!(a.name_key(), b.name_key());
    }

    #[test]
    fn test_composite_key_distinguishes_quantities() {
        let a = ParsedItem::new("Milk", Some("1".into()), Some("l".into()));
        let b = ParsedItem::new("Milk", Some("2".into()), Some("l".into()));
        assert_ne!(a.composite_key(), b.composite_key());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let item: ParsedItem = serde_json::from_str(r#"{"name":"Eggs"}"#).unwrap();
        assert_eq!(item.quantity, "1");
        assert_eq!(item.unit, "pcs");
    }
}
