//! Line tokenizer/extractor: turns one candidate receipt line into a
//! `ParsedItem`.

use crate::models::item::DEFAULT_UNIT;
use crate::models::ParsedItem;

use super::classifier::is_noise;
use super::normalize::{clean_name, normalize_unit, sanitize_quantity};
use super::patterns::{MULTIPLIER, QUANTITY_UNIT, TRAILING_NUMBER, TRAILING_PRICE, WHITESPACE};

/// Extract a candidate item from one raw receipt line.
///
/// Returns `None` for noise lines and for lines whose cleaned name comes
/// out empty. Signal precedence: quantity+unit beats multiplier beats
/// bare-trailing-number stripping.
pub fn derive_item(line: &str) -> Option<ParsedItem> {
    if is_noise(line) {
        return None;
    }

    let no_price = TRAILING_PRICE.replace(line.trim(), "");
    let text = WHITESPACE.replace_all(no_price.trim(), " ").into_owned();
    if text.is_empty() {
        return None;
    }

    // Quantity + unit: "Chicken Breast 1.5kg", "Flour 2 lbs".
    if let Some(caps) = QUANTITY_UNIT.captures(&text) {
        let whole = caps.get(0)?;
        let name = clean_name(&text[..whole.start()]);
        if name.is_empty() {
            return None;
        }
        return Some(ParsedItem {
            name,
            quantity: sanitize_quantity(caps.get(1).map(|m| m.as_str())),
            unit: normalize_unit(caps.get(2).map(|m| m.as_str())),
        });
    }

    // Multiplier: "2x Milk", "Milk 2x". Unit defaults to pcs.
    if let Some(caps) = MULTIPLIER.captures(&text) {
        let whole = caps.get(0)?;
        let remainder = format!("{} {}", &text[..whole.start()], &text[whole.end()..]);
        let name = clean_name(&remainder);
        if name.is_empty() {
            return None;
        }
        return Some(ParsedItem {
            name,
            quantity: sanitize_quantity(caps.get(1).map(|m| m.as_str())),
            unit: DEFAULT_UNIT.to_string(),
        });
    }

    // A trailing bare number with no unit is stripped as noise rather
    // than read as a quantity: on real receipts it is more often a price
    // remainder or department code than a count.
    let no_number = TRAILING_NUMBER.replace(&text, "");
    let name = clean_name(&no_number);
    if name.is_empty() {
        return None;
    }
    Some(ParsedItem::new(name, None, None))
}
