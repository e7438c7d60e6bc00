//! Image decoding for the crop engine.
//!
//! This module provides functionality for:
//! - Decoding receipt photos (JPEG/PNG) with EXIF orientation applied
//! - Resizing for the compression stage of the pipeline
//!
//! # Architecture
//!
//! Decoding is designed to be driven from the browser via WASM bindings.
//! All operations are synchronous and single-threaded within WASM.
//!
//! EXIF orientation is baked into the pixel data at decode time so the crop
//! session, layout math, and pipeline only ever see an upright bitmap whose
//! rows match what the user sees on screen.

mod raster;
mod resize;
mod types;

pub use raster::{decode_image, decode_image_no_orientation, detect_orientation};
pub use resize::{resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
