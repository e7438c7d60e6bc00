//! Ledgerlens Core - receipt image crop engine
//!
//! This crate provides the interactive crop engine the Ledgerlens bookkeeping
//! assistant uses to prepare receipt photos for AI recognition:
//!
//! - [`session`] - transform and gesture state (rotate, pan, pinch, wheel)
//! - [`layout`] - viewport layout and the mapping from the on-screen crop
//!   window back into source-image fractions
//! - [`transform`] - lossless quarter-turn rotation and region cropping
//! - [`pipeline`] - the ordered rotate → crop → shrink → encode processing
//! - [`decode`] / [`encode`] - the codec boundary (JPEG/PNG in, JPEG out)
//!
//! All engine tunables are named constants re-exported from the crate root.

pub mod decode;
pub mod encode;
pub mod geometry;
pub mod layout;
pub mod pipeline;
pub mod session;
pub mod transform;

pub use geometry::{Point, Rect, Vec2};
pub use layout::{
    base_fit_scale, crop_region, crop_region_for_window, crop_window, draw_rect, render,
    DrawCommands, GeometryError, ImagePlacement, Viewport, CROP_ASPECT_RATIO,
    CROP_MAX_HEIGHT_FRACTION, CROP_WIDTH_FRACTION, FIT_FRACTION, FIT_VERTICAL_MARGIN,
};
pub use pipeline::{
    process_decoded, process_image, PipelineError, MAX_OUTPUT_EDGE, OUTPUT_JPEG_QUALITY,
};
pub use session::{
    CropSession, GestureState, PresentationTransform, MAX_SCALE, MIN_SCALE, WHEEL_ZOOM_STEP,
};
pub use transform::{apply_crop, rotate_quarter, rotated_bounds, CropRegion, QuarterTurns};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_consistent() {
        assert!(MIN_SCALE < MAX_SCALE);
        assert!(WHEEL_ZOOM_STEP > 0.0 && WHEEL_ZOOM_STEP < MAX_SCALE - MIN_SCALE);
        assert!(CROP_ASPECT_RATIO > 0.0 && CROP_ASPECT_RATIO < 1.0); // portrait
        assert!(MAX_OUTPUT_EDGE > 0);
        assert!((1..=100).contains(&OUTPUT_JPEG_QUALITY));
    }

    #[test]
    fn test_session_region_pipeline_compose() {
        // The three layers wired together the way the host drives them.
        let mut session = CropSession::new(640, 480);
        session.rotate();
        session.zoom_by_wheel(-1.0);

        let viewport = Viewport::new(400.0, 600.0);
        let t = session.transform();
        let region = crop_region(viewport, &t, 640, 480).unwrap();
        assert!(region.is_within_bounds());

        let image = decode::DecodedImage::new(640, 480, vec![90u8; 640 * 480 * 3]);
        let out = process_decoded(&image, t.rotation, &region).unwrap();
        assert!(out.width > 0 && out.height > 0);
        assert!(out.width <= MAX_OUTPUT_EDGE && out.height <= MAX_OUTPUT_EDGE);
    }
}
