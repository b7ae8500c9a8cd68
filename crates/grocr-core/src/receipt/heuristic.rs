//! Rule-based fallback parser over a full set of receipt lines.

use std::collections::HashSet;

use tracing::debug;

use crate::models::ParsedItem;

use super::extractor::derive_item;

/// Parse a full set of OCR lines with the rule-based engine.
///
/// Deterministic and local: no I/O, no failure modes. Items keep the
/// original line order. Duplicate names (lowercased) keep the first
/// occurrence even when later quantity/unit differ; the rules cannot
/// reliably merge quantities across OCR noise, so the first clean parse
/// wins.
pub fn parse_heuristically(lines: &[String]) -> Vec<ParsedItem> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for line in lines {
        let Some(item) = derive_item(line) else {
            continue;
        };
        if seen.insert(item.name_key()) {
            items.push(item);
        } else {
            debug!(name = %item.name, "dropping duplicate heuristic parse");
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_heuristically(&[]), Vec::<ParsedItem>::new());
    }

    #[test]
    fn test_noise_only_input() {
        let input = lines(&["SUBTOTAL 23.40", "------------", "12/03/24", "VISA ****1234"]);
        assert_eq!(parse_heuristically(&input), Vec::<ParsedItem>::new());
    }

    #[test]
    fn test_full_receipt() {
        let input = lines(&[
            "FRESH MART",
            "12/03/24",
            "2 x Organic Milk  $4.99",
            "Chicken Breast 1.5kg",
            "Apples 3",
            "SUBTOTAL   23.40",
            "TOTAL 23.40",
            "Thank you for shopping",
        ]);

        let items = parse_heuristically(&input);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "FRESH MART");
        assert_eq!(items[1].name, "Organic Milk");
        assert_eq!(items[1].quantity, "2");
        assert_eq!(items[2].name, "Chicken Breast");
        assert_eq!(items[2].quantity, "1.5");
        assert_eq!(items[2].unit, "kg");
        assert_eq!(items[3].name, "Apples");
        assert_eq!(items[3].quantity, "1");
    }

    #[test]
    fn test_deduplicates_by_lowercased_name() {
        let input = lines(&["Milk 2L", "milk 2l"]);
        let items = parse_heuristically(&input);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert_eq!(items[0].quantity, "2");
        assert_eq!(items[0].unit, "l");
    }

    #[test]
    fn test_first_occurrence_wins_despite_different_quantity() {
        let input = lines(&["Butter 250g", "Butter 500g"]);
        let items = parse_heuristically(&input);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "250");
    }

    #[test]
    fn test_preserves_line_order() {
        let input = lines(&["Bread 1.99", "Eggs 3.49", "Coffee 8.99"]);
        let names: Vec<String> = parse_heuristically(&input)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["Bread", "Eggs", "Coffee"]);
    }
}
