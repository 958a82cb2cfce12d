//! Iris WASM - WebAssembly bindings for the Iris crop engine
//!
//! This crate exposes iris-core to a JavaScript host that owns HTTP routing
//! and multipart decoding.
//!
//! # Module Structure
//!
//! - `crop` - Crop and resolve bindings
//! - `error` - Error objects thrown to JavaScript
//!
//! # Usage
//!
//! ```typescript
//! import init, { crop_image } from '@iris/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const jpeg = crop_image(bytes, 0, 0, 200, undefined, 'sixteen-nine', 'landscape');
//! ```

use wasm_bindgen::prelude::*;

mod crop;
mod error;

pub use crop::{crop_image, resolve_crop, ResolvedCrop};
pub use error::ErrorBody;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Smallest crop width or height accepted, in pixels
#[wasm_bindgen]
pub fn min_crop_size() -> u32 {
    iris_core::MIN_CROP_SIZE
}
