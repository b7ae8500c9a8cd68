//! Unit, quantity, and name normalization.

use crate::models::item::{DEFAULT_QUANTITY, DEFAULT_UNIT};

use super::patterns::{LEADING_PREFIX, QTY_TOKEN, WHITESPACE};

/// Fold a raw unit token into its canonical form.
///
/// Total and idempotent: missing or empty input yields "pcs"; unknown
/// units pass through lowercased.
pub fn normalize_unit(raw: Option<&str>) -> String {
    let token = raw.map(str::trim).unwrap_or("").to_lowercase();
    if token.is_empty() {
        return DEFAULT_UNIT.to_string();
    }

    match token.as_str() {
        "lb" | "lbs" => "lb".to_string(),
        "pc" | "pcs" | "ea" => DEFAULT_UNIT.to_string(),
        "pkt" | "pkg" | "pack" | "bag" => "pack".to_string(),
        _ if token.starts_with("unit") => DEFAULT_UNIT.to_string(),
        _ => token,
    }
}

/// Normalize a raw quantity literal: missing/empty becomes "1", a comma
/// decimal separator becomes a dot. No numeric validation happens here;
/// downstream consumers parse for display.
pub fn sanitize_quantity(raw: Option<&str>) -> String {
    let token = raw.map(str::trim).unwrap_or("");
    if token.is_empty() {
        return DEFAULT_QUANTITY.to_string();
    }
    token.replace(',', ".")
}

/// Clean a candidate product name: drop the leading bullet/enumerator
/// prefix, drop standalone qty/ea tokens, collapse whitespace, trim.
/// Returns an empty string when nothing survives; callers drop the line.
pub fn clean_name(raw: &str) -> String {
    let no_prefix = LEADING_PREFIX.replace(raw.trim(), "");
    let no_qty = QTY_TOKEN.replace_all(&no_prefix, " ");
    WHITESPACE.replace_all(&no_qty, " ").trim().to_string()
}
