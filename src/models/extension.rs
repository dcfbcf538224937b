//! Extension bags for provider-specific payload blocks.
//!
//! The gateway attaches open-ended objects to many requests and responses
//! (payment-method blocks like `PAP`/`TWI`/`KLN`, `mcp`, `airlineData`,
//! free-form `metadata`). Rather than arbitrary JSON, these are modeled as
//! a closed variant over the value shapes the gateway actually uses, which
//! keeps serialization total and round-trippable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An ordered mapping of extension keys to values.
pub type ExtensionBag = BTreeMap<String, ExtensionValue>;

/// A single extension value: string, number, boolean, or a nested bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Bag(ExtensionBag),
}

impl From<&str> for ExtensionValue {
    fn from(value: &str) -> Self {
        ExtensionValue::String(value.to_string())
    }
}

impl From<String> for ExtensionValue {
    fn from(value: String) -> Self {
        ExtensionValue::String(value)
    }
}

impl From<i64> for ExtensionValue {
    fn from(value: i64) -> Self {
        ExtensionValue::Integer(value)
    }
}

impl From<bool> for ExtensionValue {
    fn from(value: bool) -> Self {
        ExtensionValue::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag() -> ExtensionBag {
        let mut bag = ExtensionBag::new();
        bag.insert("successUrl".to_string(), "https://shop.test/ok".into());
        bag.insert("attempts".to_string(), 2i64.into());
        bag.insert("express".to_string(), true.into());

        let mut nested = ExtensionBag::new();
        nested.insert("subMerchantId".to_string(), "sub-1".into());
        bag.insert("marketplace".to_string(), ExtensionValue::Bag(nested));
        bag
    }

    #[test]
    fn round_trips_through_json() {
        let original = bag();
        let json = serde_json::to_string(&original).unwrap();
        let restored: ExtensionBag = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }

    #[test]
    fn integers_stay_integers() {
        let json = serde_json::to_value(ExtensionValue::Integer(42)).unwrap();
        assert_eq!(json, serde_json::json!(42));

        let back: ExtensionValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, ExtensionValue::Integer(42));
    }

    #[test]
    fn floats_deserialize_when_not_integral() {
        let back: ExtensionValue = serde_json::from_value(serde_json::json!(1.5)).unwrap();
        assert_eq!(back, ExtensionValue::Float(1.5));
    }

    #[test]
    fn nested_bags_deserialize() {
        let value: ExtensionValue =
            serde_json::from_value(serde_json::json!({"a": {"b": "c"}})).unwrap();
        let ExtensionValue::Bag(outer) = value else {
            panic!("expected bag");
        };
        assert!(matches!(outer.get("a"), Some(ExtensionValue::Bag(_))));
    }

    #[test]
    fn arrays_are_rejected() {
        // The closed variant deliberately excludes arrays.
        let result: Result<ExtensionValue, _> = serde_json::from_value(serde_json::json!([1, 2]));
        assert!(result.is_err());
    }
}
