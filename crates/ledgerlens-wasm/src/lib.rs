//! Ledgerlens WASM - WebAssembly bindings for the receipt crop engine
//!
//! This crate exposes the ledgerlens-core functionality to the browser UI of
//! the Ledgerlens bookkeeping assistant.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `decode` - Image decoding bindings (JPEG/PNG, EXIF orientation, resize)
//! - `session` - The interactive crop session (rotate, pan, pinch, wheel,
//!   draw commands, confirm)
//! - `pipeline` - Standalone rotate → crop → compress processing
//! - `encode` - JPEG export bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, CropSession } from '@ledgerlens/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const session = new CropSession(image.width, image.height, vw, vh);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod pipeline;
mod session;
mod types;

// Re-export public types
pub use decode::{decode_image, resize_to_fit};
pub use encode::{encode_jpeg, encode_jpeg_from_image};
pub use pipeline::process_image;
pub use session::CropSession;
pub use types::JsSourceImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&format!("ledgerlens wasm {} ready", version()).into());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
