//! WASM-compatible wrapper types for image data.
//!
//! This module provides the JavaScript-friendly wrapper around the core
//! decoded-image type, handling the conversion between Rust and JavaScript
//! data representations.

use ledgerlens_core::decode::{DecodedImage, FilterType};
use wasm_bindgen::prelude::*;

/// A decoded receipt image exposed to JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`; for preview rendering keep the image on the WASM side and
/// only extract pixels when a canvas actually needs them.
///
/// `free()` releases WASM memory immediately; otherwise wasm-bindgen's
/// finalizer cleans up automatically.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create an image from dimensions and RGB pixel data
    /// (3 bytes per pixel, row-major order).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// RGB pixel data as a Uint8Array (copies out of WASM memory).
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    /// Wrap a core DecodedImage.
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self {
            width: img.width,
            height: img.height,
            pixels: img.pixels,
        }
    }

    /// Convert back to a core DecodedImage. Clones the pixel data.
    pub(crate) fn to_decoded(&self) -> DecodedImage {
        DecodedImage {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}

/// Convert a u8 filter type value to the core FilterType enum.
///
/// Values:
/// - 0 = Nearest (fastest, lowest quality)
/// - 1 = Bilinear (good balance of speed and quality)
/// - 2 = Lanczos3 (best quality, slowest)
///
/// Any other value defaults to Bilinear.
pub(crate) fn filter_from_u8(value: u8) -> FilterType {
    match value {
        0 => FilterType::Nearest,
        2 => FilterType::Lanczos3,
        _ => FilterType::Bilinear, // Default
    }
}
