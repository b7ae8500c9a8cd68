//! Line classifier: decides whether a raw OCR line is receipt noise.

use super::patterns::{DATE_LINE, DIGITS_LINE, SEPARATOR_LINE};

/// Lowercase substrings that mark a line as non-product noise: totals,
/// payment info, store metadata. Fixed at build time. A few entries keep
/// an anchoring space so product names do not collide ("cash " misses
/// "cashew", " card" misses "cardamom").
const STOP_WORDS: &[&str] = &[
    "subtotal",
    "total",
    "tax",
    "vat",
    "visa",
    "mastercard",
    "debit",
    "credit",
    "cash ",
    "cashier",
    "change",
    " card",
    "thank you",
    "clerk",
    "balance",
    "amount due",
    "receipt",
    "invoice",
    "tel:",
    "www.",
    "approved",
    "terminal",
    "loyalty",
    "coupon",
    "discount",
];

/// Whether a raw line should be discarded as noise.
///
/// Pure predicate. The cheap structural checks run before the stop-word
/// substring scan, but the result does not depend on the order.
pub fn is_noise(line: &str) -> bool {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.chars().count() < 3 {
        return true;
    }
    if SEPARATOR_LINE.is_match(trimmed) {
        return true;
    }
    if DATE_LINE.is_match(trimmed) {
        return true;
    }
    if DIGITS_LINE.is_match(trimmed) {
        return true;
    }

    let lowered = trimmed.to_lowercase();
    STOP_WORDS.iter().any(|w| lowered.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_short_lines() {
        assert!(is_noise(""));
        assert!(is_noise("   "));
        assert!(is_noise("ab"));
        assert!(!is_noise("abc"));
    }

    #[test]
    fn test_separator_lines() {
        assert!(is_noise("--------------------"));
        assert!(is_noise("====="));
        assert!(is_noise("* * * * *"));
    }

    #[test]
    fn test_date_lines() {
        assert!(is_noise("12/03/24"));
        assert!(is_noise("01/11/2023"));
    }

    #[test]
    fn test_pure_digit_lines() {
        assert!(is_noise("230482"));
        assert!(!is_noise("7Up 2l"));
    }

    #[test]
    fn test_stop_words_case_insensitive() {
        assert!(is_noise("SUBTOTAL   23.40"));
        assert!(is_noise("Total due"));
        assert!(is_noise("VISA ****1234"));
        assert!(is_noise("Thank You for shopping"));
        assert!(is_noise("Clerk #12"));
    }

    #[test]
    fn test_product_lines_pass() {
        assert!(!is_noise("Organic Milk $4.99"));
        assert!(!is_noise("Chicken Breast 1.5kg"));
        assert!(!is_noise("Apples 3"));
    }

    #[test]
    fn test_payment_lines_dropped() {
        assert!(is_noise("CASH 20.00"));
        assert!(is_noise("DEBIT CARD ****5678"));
        assert!(is_noise("CHANGE 1.55"));
    }

    #[test]
    fn test_stop_words_do_not_collide_with_products() {
        assert!(!is_noise("Cardamom Pods 50g"));
        assert!(!is_noise("Cashew Milk 1l"));
        assert!(!is_noise("Camembert 250g"));
    }
}
