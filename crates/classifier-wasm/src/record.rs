//! Serialized classification records for JS interop.

use classifier_core::ClassificationResult;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// The classification record consumed by the input widget.
///
/// Field names follow the widget's wire contract: unknown network, type and
/// encoding are empty strings, `error` is a human-readable message or null,
/// and `errors` lists character offsets to highlight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// The exact input string that was classified.
    pub address: String,
    /// Detected network name, or "" while unknown.
    pub network: String,
    /// Detected address type name, or "" while unknown.
    #[serde(rename = "type")]
    pub address_type: String,
    /// Detected encoding name, or "" while unknown.
    pub encoding: String,
    /// Whether checksum verification has run.
    #[serde(rename = "final")]
    pub is_final: bool,
    /// Human-readable error message, if any.
    pub error: Option<String>,
    /// Character offsets suspected of a checksum mismatch.
    pub errors: Vec<usize>,
}

impl ClassificationRecord {
    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}

impl From<&ClassificationResult> for ClassificationRecord {
    fn from(result: &ClassificationResult) -> Self {
        ClassificationRecord {
            address: result.address.clone(),
            network: result.network.map(|n| n.name()).unwrap_or("").to_string(),
            address_type: result.address_type.map(|t| t.name()).unwrap_or("").to_string(),
            encoding: result.encoding.map(|e| e.name()).unwrap_or("").to_string(),
            is_final: result.is_final,
            error: result.error.map(|e| e.to_string()),
            errors: result.error_positions.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classifier_core::{classify, ParseOptions};

    #[test]
    fn test_record_wire_shape() {
        let result = classify("bc1q5k8esvpl78qrqx0tt3l3rwy73snc5hkayujk5z", ParseOptions::default());
        let record = ClassificationRecord::from(&result);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "address": "bc1q5k8esvpl78qrqx0tt3l3rwy73snc5hkayujk5z",
                "network": "main",
                "type": "P2WPKH",
                "encoding": "bech32",
                "final": true,
                "error": null,
                "errors": [],
            })
        );
    }

    #[test]
    fn test_record_for_unmatched_text() {
        let result = classify("zzz", ParseOptions::default());
        let record = ClassificationRecord::from(&result);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["network"], "");
        assert_eq!(json["type"], "");
        assert_eq!(json["encoding"], "");
        assert_eq!(json["final"], false);
        assert_eq!(json["error"], "Could not find address.");
        assert_eq!(json["errors"], serde_json::json!([]));
    }

    #[test]
    fn test_record_carries_error_positions() {
        // valid mainnet P2WPKH with offset 10 flipped
        let result = classify("bc1q5k8esvql78qrqx0tt3l3rwy73snc5hkayujk5z", ParseOptions::default());
        let record = ClassificationRecord::from(&result);

        assert_eq!(record.address_type, "P2WPKH");
        assert!(record.is_final);
        assert_eq!(record.error.as_deref(), Some("Address appears to be misspelled."));
        assert_eq!(record.errors, vec![10]);
    }

    #[test]
    fn test_record_for_partial_input() {
        let result = classify("1G6", ParseOptions::default());
        let record = ClassificationRecord::from(&result);

        assert_eq!(record.network, "main");
        assert_eq!(record.address_type, "P2PKH");
        assert_eq!(record.encoding, "base58");
        assert!(!record.is_final);
        assert_eq!(record.error, None);
    }
}
