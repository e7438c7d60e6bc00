//! Image encoding WASM bindings.
//!
//! This module exposes the core JPEG encoding to JavaScript so the host can
//! export a processed receipt as an uploadable byte buffer.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_jpeg_from_image } from '@ledgerlens/wasm';
//!
//! // Encode raw pixel data
//! const jpegBytes = encode_jpeg(pixels, width, height, 85);
//!
//! // Encode a decoded image
//! const jpegBytes = encode_jpeg_from_image(image, 85);
//! ```

use crate::types::JsSourceImage;
use ledgerlens_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `quality` - JPEG quality (1-100; the pipeline default is 85)
///
/// # Errors
///
/// Returns an error if the pixel data length doesn't match the dimensions,
/// a dimension is zero, or encoding fails internally.
#[wasm_bindgen]
pub fn encode_jpeg(pixels: &[u8], width: u32, height: u32, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a decoded image to JPEG bytes.
///
/// Convenience wrapper over [`encode_jpeg`] for images already held on the
/// WASM side.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsSourceImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    let pixels = image.pixels();
    encode::encode_jpeg(&pixels, image.width(), image.height(), quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Tests for encode bindings.
///
/// Note: The binding functions return `Result<T, JsValue>`, which only works
/// on wasm32 targets. For comprehensive encode testing, see the tests in
/// `ledgerlens_core::encode` which test the underlying functionality.
#[cfg(test)]
mod tests {
    use super::*;

    // Tests that work on all targets

    #[test]
    fn test_encode_through_wrapper_types() {
        let img = JsSourceImage::new(10, 10, vec![128u8; 10 * 10 * 3]);

        let pixels = img.pixels();
        let jpeg =
            ledgerlens_core::encode::encode_jpeg(&pixels, img.width(), img.height(), 85).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }
}
