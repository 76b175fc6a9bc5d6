//! WebAssembly bindings for the incremental address classifier.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Classifying a (possibly partial) address string on every keystroke
//! - Reporting live network / type / encoding feedback
//! - Serializing results into the record consumed by the input widget,
//!   including checksum error positions for highlighting

use wasm_bindgen::prelude::*;

pub mod classifier;
pub mod record;

// Re-export main types for JS access
pub use classifier::Classifier;
pub use record::ClassificationRecord;

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
