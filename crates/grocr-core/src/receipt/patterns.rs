//! Named regex patterns for receipt line extraction.
//!
//! Each pattern covers one concern so it can be unit-tested on its own:
//! trailing prices, quantity+unit pairs, multipliers, trailing bare
//! numbers, and name-cleanup prefixes.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trailing price token: currency marker before or after the number
    // ("$4.99", "USD 4.99", "4,99 EUR"), or a bare N.NN / N,NN at the end
    // of the line.
    pub static ref TRAILING_PRICE: Regex = Regex::new(
        r"(?i)(?:(?:[$€£]|USD|EUR|GBP|PLN)\s*\d+(?:[.,]\d{1,2})?|\d+[.,]\d{2}\s*(?:[$€£]|USD|EUR|GBP|PLN)?)\s*$"
    ).unwrap();

    // Quantity immediately followed (directly or with one space) by a
    // recognized unit token. Longer synonyms come first in the
    // alternation so "lbs" is not split into "lb" + "s".
    pub static ref QUANTITY_UNIT: Regex = Regex::new(
        r"(?i)\b(\d+(?:[.,]\d+)?)\s?(kg|mg|g|lbs|lb|oz|ml|cl|l|pcs|pc|pack|pkt|pkg|bag|ct|ea|units|unit)\b"
    ).unwrap();

    // Multiplier token: "2x Milk" or "Milk 2x", space allowed before the x.
    pub static ref MULTIPLIER: Regex = Regex::new(
        r"(?i)\b(\d+(?:[.,]\d+)?)\s*x\b"
    ).unwrap();

    // Trailing bare number with no unit attached ("Apples 3").
    pub static ref TRAILING_NUMBER: Regex = Regex::new(
        r"\s\d+(?:[.,]\d+)?\s*$"
    ).unwrap();

    // Leading bullet / enumerator prefix ("- Milk", "• Milk", "1. Milk",
    // "2) Milk", "3 Milk").
    pub static ref LEADING_PREFIX: Regex = Regex::new(
        r"^(?:[-•·*#]+\s*|\d+[.)]\s*|\d+\s+)+"
    ).unwrap();

    // Standalone qty/ea tokens left over inside a name.
    pub static ref QTY_TOKEN: Regex = Regex::new(
        r"(?i)\b(?:qty|ea)\b\.?"
    ).unwrap();

    // Line that is purely a DD/MM/YY or DD/MM/YYYY date.
    pub static ref DATE_LINE: Regex = Regex::new(
        r"^\d{1,2}/\d{1,2}/\d{2}(?:\d{2})?$"
    ).unwrap();

    // Line that is purely digits (a lone code or quantity with no name).
    pub static ref DIGITS_LINE: Regex = Regex::new(
        r"^\d+$"
    ).unwrap();

    // Separator line: only dashes, equals, stars, underscores.
    pub static ref SEPARATOR_LINE: Regex = Regex::new(
        r"^[-=*_\s]+$"
    ).unwrap();

    // Whitespace runs, collapsed to a single space during cleanup.
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}
