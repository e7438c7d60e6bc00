//! Normalized-region cropping.
//!
//! The crop region produced by the layout mapper is expressed as fractions of
//! whatever bitmap it is applied to, which in the processing pipeline is the
//! already-rotated bitmap. (0, 0) is the top-left corner, (1, 1) the
//! bottom-right.

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// A crop rectangle in fractions [0, 1] of the target bitmap's dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole image.
    pub fn full() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }

    /// True when the region stays inside the unit square (with float slack).
    pub fn is_within_bounds(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.x + self.width <= 1.0 + 1e-9
            && self.y + self.height <= 1.0 + 1e-9
    }
}

/// Cut the region out of the image.
///
/// The pixel rectangle is `round(region × dimensions)`, clamped into the
/// image bounds; the output is never smaller than 1×1. A full region returns
/// a copy of the input.
pub fn apply_crop(image: &DecodedImage, region: &CropRegion) -> DecodedImage {
    // Fast path: full crop.
    if region.x <= 0.0 && region.y <= 0.0 && region.width >= 1.0 && region.height >= 1.0 {
        return image.clone();
    }

    let src_w = image.width as f64;
    let src_h = image.height as f64;

    let px_left = (region.x.clamp(0.0, 1.0) * src_w).round() as u32;
    let px_top = (region.y.clamp(0.0, 1.0) * src_h).round() as u32;
    let px_width = (region.width.clamp(0.0, 1.0) * src_w).round() as u32;
    let px_height = (region.height.clamp(0.0, 1.0) * src_h).round() as u32;

    let px_left = px_left.min(image.width.saturating_sub(1));
    let px_top = px_top.min(image.height.saturating_sub(1));
    let px_right = (px_left + px_width).min(image.width);
    let px_bottom = (px_top + px_height).min(image.height);

    let out_width = px_right.saturating_sub(px_left).max(1);
    let out_height = px_bottom.saturating_sub(px_top).max(1);

    let row_bytes = (out_width * 3) as usize;
    let mut output = vec![0u8; (out_width * out_height * 3) as usize];

    for y in 0..out_height {
        let src_start = (((px_top + y) * image.width + px_left) * 3) as usize;
        let dst_start = (y * out_width * 3) as usize;
        output[dst_start..dst_start + row_bytes]
            .copy_from_slice(&image.pixels[src_start..src_start + row_bytes]);
    }

    DecodedImage {
        width: out_width,
        height: out_height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (4u32..=100, 4u32..=100)
    }

    fn region_strategy() -> impl Strategy<Value = CropRegion> {
        (0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0, 0.0f64..=1.0)
            .prop_map(|(x, y, width, height)| CropRegion::new(x, y, width, height))
    }

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = ((y * width + x) % 256) as u8;
                pixels.extend_from_slice(&[v, v, v]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    proptest! {
        /// Output dimensions are positive and never exceed the input.
        #[test]
        fn prop_output_dimensions_bounded(
            (width, height) in dimensions_strategy(),
            region in region_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, &region);

            prop_assert!(result.width >= 1 && result.width <= width);
            prop_assert!(result.height >= 1 && result.height <= height);
        }

        /// Pixel buffer length always matches the output dimensions.
        #[test]
        fn prop_pixel_data_matches_dimensions(
            (width, height) in dimensions_strategy(),
            region in region_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, &region);

            prop_assert_eq!(result.pixels.len(), (result.width * result.height * 3) as usize);
        }

        /// The full region reproduces the input exactly.
        #[test]
        fn prop_full_region_identity((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let result = apply_crop(&img, &CropRegion::full());

            prop_assert_eq!(result.width, img.width);
            prop_assert_eq!(result.height, img.height);
            prop_assert_eq!(result.pixels, img.pixels);
        }

        /// Cropping is deterministic.
        #[test]
        fn prop_crop_is_deterministic(
            (width, height) in dimensions_strategy(),
            region in region_strategy(),
        ) {
            let img = create_test_image(width, height);
            let a = apply_crop(&img, &region);
            let b = apply_crop(&img, &region);

            prop_assert_eq!(a.width, b.width);
            prop_assert_eq!(a.height, b.height);
            prop_assert_eq!(a.pixels, b.pixels);
        }

        /// An in-bounds region maps to the expected pixel rectangle.
        #[test]
        fn prop_in_bounds_region_dimensions(
            (width, height) in (20u32..=100, 20u32..=100),
            x in 0.0f64..=0.4,
            y in 0.0f64..=0.4,
        ) {
            let img = create_test_image(width, height);
            let region = CropRegion::new(x, y, 0.5, 0.5);
            let result = apply_crop(&img, &region);

            let expected_w = (0.5 * width as f64).round() as u32;
            let expected_h = (0.5 * height as f64).round() as u32;
            prop_assert!((result.width as i64 - expected_w as i64).abs() <= 1);
            prop_assert!((result.height as i64 - expected_h as i64).abs() <= 1);
        }
    }
}
