//! Model-assisted extraction: delegates receipt parsing to a hosted
//! chat-completion model and sanitizes its JSON reply into `ParsedItem`s.

pub mod backend;

pub use backend::{ChatBackend, OpenAiBackend};

use std::collections::HashSet;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ModelError;
use crate::models::{ModelConfig, ParsedItem};
use crate::receipt::{clean_name, normalize_unit, sanitize_quantity};

/// Alternate key names models use for the quantity field.
const QUANTITY_KEYS: &[&str] = &["quantity", "qty"];

/// Alternate key names models use for the unit field.
const UNIT_KEYS: &[&str] = &["unit", "units", "measurement"];

/// Model-assisted receipt extractor.
pub struct ModelExtractor {
    backend: Box<dyn ChatBackend>,
    target_language: String,
}

impl ModelExtractor {
    /// Create an extractor over an injected backend.
    pub fn new(backend: Box<dyn ChatBackend>, target_language: impl Into<String>) -> Self {
        Self {
            backend,
            target_language: target_language.into(),
        }
    }

    /// Create an extractor with the production HTTP backend.
    pub fn from_config(config: &ModelConfig) -> Result<Self, ModelError> {
        let backend = OpenAiBackend::from_config(config)?;
        Ok(Self::new(Box::new(backend), config.target_language.clone()))
    }

    /// Extract items from the full set of receipt lines.
    ///
    /// Transport failures surface as `Err`; a reply the sanitizer cannot
    /// use is logged and yields `Ok(vec![])`. Either way the orchestrator
    /// falls back to the heuristic parser.
    pub async fn extract(&self, lines: &[String]) -> Result<Vec<ParsedItem>, ModelError> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        let completion = self
            .backend
            .complete(&self.system_prompt(), &lines.join("\n"))
            .await?;

        let items = sanitize_response(&completion);
        debug!(count = items.len(), "model tier extracted items");
        Ok(items)
    }

    fn system_prompt(&self) -> String {
        format!(
            "You extract grocery items from OCR text of a store receipt. \
             Consider only edible or grocery products; ignore totals, taxes, \
             payments, discounts, and store metadata. Translate every item \
             name to {}. Respond with strict JSON of the shape \
             {{\"items\":[{{\"name\":\"...\",\"quantity\":\"...\",\"unit\":\"...\"}}]}}. \
             When a quantity is missing use \"1\"; when a unit is missing use \"pcs\". \
             Respond with JSON only, no prose and no code fences.",
            self.target_language
        )
    }
}

/// Parse and sanitize a model completion into items.
///
/// Treats the reply as untrusted input: code fences are stripped, the
/// entries are coerced field by field, and anything that fails coercion
/// is skipped rather than propagated.
pub fn sanitize_response(completion: &str) -> Vec<ParsedItem> {
    let text = strip_code_fences(completion);

    let payload: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "model reply is not valid JSON");
            return Vec::new();
        }
    };

    // Accept a bare array or an object with an `items` array.
    let entries = match &payload {
        Value::Array(entries) => entries.as_slice(),
        Value::Object(map) => match map.get("items").and_then(Value::as_array) {
            Some(entries) => entries.as_slice(),
            None => {
                warn!("model reply has no items array");
                return Vec::new();
            }
        },
        _ => {
            warn!("model reply has unexpected JSON shape");
            return Vec::new();
        }
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut items = Vec::new();

    for entry in entries {
        let Some(item) = coerce_entry(entry) else {
            debug!("skipping uncoercible model entry");
            continue;
        };
        if seen.insert(item.composite_key()) {
            items.push(item);
        }
    }

    items
}

/// Coerce one untyped model entry into a `ParsedItem`. Entries without a
/// usable name are rejected.
fn coerce_entry(entry: &Value) -> Option<ParsedItem> {
    let raw_name = coerce_string(entry.get("name")?)?;
    let name = clean_name(&raw_name);
    if name.is_empty() {
        return None;
    }

    let quantity = first_string(entry, QUANTITY_KEYS);
    let unit = first_string(entry, UNIT_KEYS);

    Some(ParsedItem {
        name,
        quantity: sanitize_quantity(quantity.as_deref()),
        unit: normalize_unit(unit.as_deref()),
    })
}

fn first_string(entry: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| entry.get(key).and_then(coerce_string))
}

/// Render a JSON scalar as a string; numbers keep their literal form so
/// `2` and `1.5` survive as quantities.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Drop Markdown code-fence markers around a JSON reply.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Skip the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().trim_end_matches("```").trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("{\"items\":[]}"), "{\"items\":[]}");
        assert_eq!(
            strip_code_fences("```json\n{\"items\":[]}\n```"),
            "{\"items\":[]}"
        );
        assert_eq!(strip_code_fences("```\n[]\n```"), "[]");
    }

    #[test]
    fn test_sanitize_object_shape() {
        let reply = r#"{"items":[{"name":"Organic Milk","quantity":"2","unit":"l"}]}"#;
        let items = sanitize_response(reply);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Organic Milk");
        assert_eq!(items[0].quantity, "2");
        assert_eq!(items[0].unit, "l");
    }

    #[test]
    fn test_sanitize_bare_array_shape() {
        let reply = r#"[{"name":"Eggs"}]"#;
        let items = sanitize_response(reply);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "1");
        assert_eq!(items[0].unit, "pcs");
    }

    #[test]
    fn test_sanitize_alternate_keys_and_numbers() {
        let reply = r#"{"items":[{"name":"Flour","qty":2,"measurement":"LBS"}]}"#;
        let items = sanitize_response(reply);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, "2");
        assert_eq!(items[0].unit, "lb");
    }

    #[test]
    fn test_sanitize_rejects_entries_without_names() {
        let reply = r#"{"items":[{"quantity":"2"},{"name":"   "},{"name":"Rice"}]}"#;
        let items = sanitize_response(reply);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Rice");
    }

    #[test]
    fn test_sanitize_composite_dedup() {
        let reply = r#"{"items":[
            {"name":"Milk","quantity":"1","unit":"l"},
            {"name":"milk","quantity":"1","unit":"l"},
            {"name":"Milk","quantity":"2","unit":"l"}
        ]}"#;
        let items = sanitize_response(reply);
        // Identical composites collapse; a different quantity survives.
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, "1");
        assert_eq!(items[1].quantity, "2");
    }

    #[test]
    fn test_sanitize_garbage_yields_empty() {
        assert_eq!(sanitize_response("not json at all"), Vec::new());
        assert_eq!(sanitize_response(r#"{"unexpected":true}"#), Vec::new());
        assert_eq!(sanitize_response("42"), Vec::new());
    }

    #[test]
    fn test_sanitize_cleans_names() {
        let reply = r#"{"items":[{"name":"- Olive  Oil qty","quantity":"1"}]}"#;
        let items = sanitize_response(reply);
        assert_eq!(items[0].name, "Olive Oil");
    }
}
