//! Bitmap transform operations: quarter-turn rotation and region cropping.
//!
//! # Transform Order
//!
//! The processing pipeline applies transforms in this order:
//! 1. Rotation (90° steps, lossless remap)
//! 2. Crop (normalized region, applied to the rotated bitmap)
//! 3. Resize to the output edge limit
//!
//! # Coordinate System
//!
//! - Rotation is clockwise, matching the on-screen rotate control
//! - Crop coordinates are normalized (0.0 to 1.0) relative to the dimensions
//!   of the bitmap they are applied to
//! - Origin is the top-left corner

mod crop;
mod rotation;

pub use crop::{apply_crop, CropRegion};
pub use rotation::{rotate_quarter, rotated_bounds, QuarterTurns};
