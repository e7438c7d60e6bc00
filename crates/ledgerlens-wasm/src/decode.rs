//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a receipt photo (JPEG/PNG) from bytes, with
//!   EXIF orientation applied
//! - [`resize_to_fit`] - Shrink an image to fit within a max edge, preserving
//!   aspect ratio
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@ledgerlens/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::{filter_from_u8, JsSourceImage};
use ledgerlens_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a receipt photo from bytes.
///
/// The format (JPEG or PNG) is sniffed from the bytes and EXIF orientation
/// is applied, so the returned bitmap is upright regardless of how the phone
/// was held when the photo was taken.
///
/// # Errors
///
/// Returns an error if the bytes are not a decodable image.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsSourceImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsSourceImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Shrink an image so its longest edge is at most `max_edge`.
///
/// Aspect ratio is preserved and images that already fit are returned
/// unchanged. `filter`: 0 = Nearest, 1 = Bilinear, 2 = Lanczos3.
#[wasm_bindgen]
pub fn resize_to_fit(
    image: &JsSourceImage,
    max_edge: u32,
    filter: u8,
) -> Result<JsSourceImage, JsValue> {
    decode::resize_to_fit(&image.to_decoded(), max_edge, filter_from_u8(filter))
        .map(JsSourceImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
