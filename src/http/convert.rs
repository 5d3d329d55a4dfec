//! snake_case → camelCase key rewriting
//!
//! The wire API speaks camelCase; callers write Rust-style snake_case. Keys
//! are rewritten recursively through nested mappings only — sequence elements
//! and scalar values pass through untouched.

use serde_json::Value;

/// Rewrite one key: every `_x`, where `x` is a lowercase ASCII letter,
/// becomes `X`. Other underscores survive.
pub(crate) fn camelize(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Deep-rewrite every mapping key in `value`.
///
/// Recurses into nested objects; arrays and scalars are returned as-is, so an
/// object inside an array keeps its keys.
pub(crate) fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camelize(&key), camelize_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camelize_basic() {
        assert_eq!(camelize("foo_bar_baz"), "fooBarBaz");
        assert_eq!(camelize("source_type"), "sourceType");
    }

    #[test]
    fn test_camelize_leaves_plain_keys_alone() {
        assert_eq!(camelize("amount"), "amount");
        assert_eq!(camelize("currency"), "currency");
    }

    #[test]
    fn test_camelize_only_consumes_lowercase() {
        assert_eq!(camelize("foo_"), "foo_");
        assert_eq!(camelize("foo_1"), "foo_1");
        assert_eq!(camelize("foo_Bar"), "foo_Bar");
        assert_eq!(camelize("_leading"), "Leading");
        assert_eq!(camelize("foo__bar"), "foo_Bar");
    }

    #[test]
    fn test_camelize_keys_recurses_into_objects() {
        let converted = camelize_keys(json!({
            "source_type": "card",
            "billing_address": {
                "address_line1": "1 Test Street",
                "country_code": "GB"
            }
        }));

        assert_eq!(
            converted,
            json!({
                "sourceType": "card",
                "billingAddress": {
                    "addressLine1": "1 Test Street",
                    "countryCode": "GB"
                }
            })
        );
    }

    #[test]
    fn test_camelize_keys_skips_sequence_elements() {
        let converted = camelize_keys(json!({
            "line_items": [{ "unit_price": 100 }],
            "tags": ["gift_card"]
        }));

        assert_eq!(
            converted,
            json!({
                "lineItems": [{ "unit_price": 100 }],
                "tags": ["gift_card"]
            })
        );
    }

    #[test]
    fn test_camelize_keys_passes_scalars_through() {
        assert_eq!(camelize_keys(json!(42)), json!(42));
        assert_eq!(camelize_keys(json!("snake_case")), json!("snake_case"));
        assert_eq!(camelize_keys(json!(null)), json!(null));
    }
}
