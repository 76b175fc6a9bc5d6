//! Classification controller exposed to JavaScript.

use classifier_core::{classify, Network, ParseOptions};
use wasm_bindgen::prelude::*;

use crate::record::ClassificationRecord;

/// A configured classifier for a text-entry widget.
///
/// Holds only the options; every call to [`Classifier::classify`] is an
/// independent, pure computation over the current input string, so it is
/// safe to call once per keystroke.
#[wasm_bindgen]
pub struct Classifier {
    options: ParseOptions,
}

#[wasm_bindgen]
impl Classifier {
    /// Create a new classifier.
    ///
    /// # Arguments
    /// * `network` - Restrict matches to one network ("main", "testnet",
    ///   "regtest" or "simnet"); pass nothing to accept any network
    /// * `detect_errors` - Whether to localize bech32 checksum errors
    #[wasm_bindgen(constructor)]
    pub fn new(network: Option<String>, detect_errors: bool) -> Result<Classifier, JsValue> {
        let expected_network = match network.as_deref() {
            None | Some("") => None,
            Some(name) => {
                Some(Network::from_str(name).ok_or_else(|| JsValue::from_str("Invalid network"))?)
            }
        };

        Ok(Classifier {
            options: ParseOptions {
                expected_network,
                want_error_positions: detect_errors,
            },
        })
    }

    /// Classify an address string (typically called on every keystroke).
    ///
    /// Returns the classification record; structural problems come back as
    /// data on the record, never as a thrown error.
    #[wasm_bindgen]
    pub fn classify(&self, address: &str) -> Result<JsValue, JsValue> {
        let result = classify(address, self.options);
        ClassificationRecord::from(&result).to_js()
    }

    /// Whether `address` is a complete, valid address under these options.
    #[wasm_bindgen]
    pub fn is_valid(&self, address: &str) -> bool {
        classify(address, self.options).is_valid()
    }

    /// Get the configured network restriction, if any.
    #[wasm_bindgen(getter)]
    pub fn network(&self) -> Option<String> {
        self.options.expected_network.map(|n| n.name().to_string())
    }
}

/// One-shot classification without keeping a `Classifier` around.
#[wasm_bindgen]
pub fn classify_address(address: &str, network: Option<String>) -> Result<JsValue, JsValue> {
    Classifier::new(network, true)?.classify(address)
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructor_options() {
        let classifier = Classifier::new(Some("testnet".to_string()), true).unwrap();
        assert_eq!(classifier.options.expected_network, Some(Network::Testnet));
        assert!(classifier.options.want_error_positions);

        let classifier = Classifier::new(None, false).unwrap();
        assert_eq!(classifier.options.expected_network, None);
        assert!(!classifier.options.want_error_positions);

        let classifier = Classifier::new(Some(String::new()), true).unwrap();
        assert_eq!(classifier.options.expected_network, None);
    }

    #[test]
    fn test_is_valid() {
        let classifier = Classifier::new(None, true).unwrap();
        assert!(classifier.is_valid("1G6QWmmSxRnx7p87XAToXpB1dfytmndM8C"));
        assert!(!classifier.is_valid("1G6"));
        assert!(!classifier.is_valid("zzz"));
    }
}
