//! Viewport layout and the viewport to source-image coordinate mapping.
//!
//! Two coordinate frames meet here and are easy to conflate:
//!
//! - **Source pixel space**: the unrotated bitmap's own pixels. Draw sizes
//!   are always expressed in this frame, because rotation is applied as a
//!   display transform around the draw center rather than by re-encoding the
//!   bitmap.
//! - **Display logical space**: the extents the viewer actually sees, with
//!   width and height swapped for odd quarter turns. Fit scaling works in
//!   this frame.
//!
//! Everything here is a pure function of `(Viewport, PresentationTransform,
//! source dimensions)`. The host redraws by calling [`render`] whenever any
//! of those inputs change, and on confirmation maps the fixed crop window
//! back into source fractions with [`crop_region`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Point, Rect};
use crate::session::PresentationTransform;
use crate::transform::CropRegion;

/// Crop window width over height (portrait 3:4).
pub const CROP_ASPECT_RATIO: f64 = 3.0 / 4.0;
/// Fraction of the available viewport the fitted image may occupy.
pub const FIT_FRACTION: f64 = 0.9;
/// Logical pixels reserved vertically (toolbar/hint strip) when fitting.
pub const FIT_VERTICAL_MARGIN: f64 = 40.0;
/// Fraction of the viewport width the crop window prefers.
pub const CROP_WIDTH_FRACTION: f64 = 0.85;
/// Upper bound on crop window height as a fraction of viewport height.
pub const CROP_MAX_HEIGHT_FRACTION: f64 = 0.7;

/// Logical pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Geometry failures; each one indicates a violated precondition rather than
/// a recoverable condition.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    /// Draw extents resolved to zero; the source image is missing or empty.
    #[error("degenerate draw geometry: draw size is {width}x{height}")]
    DegenerateGeometry { width: f64, height: f64 },
}

/// The fixed-aspect crop window, centered in the viewport.
///
/// Preferred width is `0.85 · viewport width`; if the implied 3:4 height
/// exceeds `0.7 · viewport height`, the height is capped and the width
/// re-derived so the ratio is preserved.
pub fn crop_window(viewport: Viewport) -> Rect {
    let mut width = viewport.width * CROP_WIDTH_FRACTION;
    let mut height = width / CROP_ASPECT_RATIO;

    let max_height = viewport.height * CROP_MAX_HEIGHT_FRACTION;
    if height > max_height {
        height = max_height;
        width = height * CROP_ASPECT_RATIO;
    }

    Rect::from_center_size(viewport.center(), width, height)
}

/// Scale that fits the rotated image inside the viewport with margin.
///
/// Fit math runs in display logical space (extents swapped for odd quarter
/// turns); the returned scale nevertheless multiplies *source* pixel
/// dimensions, since a quarter turn only exchanges which source axis meets
/// which viewport axis.
pub fn base_fit_scale(
    viewport: Viewport,
    source_width: u32,
    source_height: u32,
    transform: &PresentationTransform,
) -> f64 {
    let (logical_w, logical_h) = if transform.rotation.swaps_dimensions() {
        (source_height as f64, source_width as f64)
    } else {
        (source_width as f64, source_height as f64)
    };

    if logical_w <= 0.0 || logical_h <= 0.0 {
        return 0.0;
    }

    let fit_x = viewport.width * FIT_FRACTION / logical_w;
    let fit_y = (viewport.height - FIT_VERTICAL_MARGIN) * FIT_FRACTION / logical_h;
    fit_x.min(fit_y)
}

/// On-screen rectangle the source bitmap is drawn into, in source pixel
/// units, centered at the viewport center plus the pan offset.
pub fn draw_rect(
    viewport: Viewport,
    transform: &PresentationTransform,
    source_width: u32,
    source_height: u32,
) -> Rect {
    let base = base_fit_scale(viewport, source_width, source_height, transform);
    let draw_w = source_width as f64 * base * transform.scale;
    let draw_h = source_height as f64 * base * transform.scale;

    let viewport_center = viewport.center();
    let center = Point::new(
        viewport_center.x + transform.offset.x,
        viewport_center.y + transform.offset.y,
    );

    Rect::from_center_size(center, draw_w, draw_h)
}

/// Map the crop window back into source-image fractions.
///
/// The region is expressed against the *unrotated* source draw dimensions;
/// the pipeline compensates by rotating the bitmap first and applying the
/// fractions to the rotated bitmap's own extents, which quarter-turn rotation
/// keeps equivalent.
pub fn crop_region(
    viewport: Viewport,
    transform: &PresentationTransform,
    source_width: u32,
    source_height: u32,
) -> Result<CropRegion, GeometryError> {
    crop_region_for_window(
        viewport,
        transform,
        source_width,
        source_height,
        crop_window(viewport),
    )
}

/// [`crop_region`] against an explicit crop window rectangle.
pub fn crop_region_for_window(
    viewport: Viewport,
    transform: &PresentationTransform,
    source_width: u32,
    source_height: u32,
    window: Rect,
) -> Result<CropRegion, GeometryError> {
    let draw = draw_rect(viewport, transform, source_width, source_height);
    if draw.width <= 0.0 || draw.height <= 0.0 {
        return Err(GeometryError::DegenerateGeometry {
            width: draw.width,
            height: draw.height,
        });
    }

    let x = ((window.left - draw.left) / draw.width).max(0.0);
    let y = ((window.top - draw.top) / draw.height).max(0.0);
    let width = (window.width / draw.width).min(1.0);
    let height = (window.height / draw.height).min(1.0);

    Ok(CropRegion {
        x: x.min(1.0 - width),
        y: y.min(1.0 - height),
        width,
        height,
    })
}

/// Placement of the source bitmap for one preview frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImagePlacement {
    /// Where the bitmap center lands in the viewport.
    pub center: Point,
    /// Draw size in source pixel units; the host applies `rotation_degrees`
    /// as a display transform around `center`.
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation to apply while drawing.
    pub rotation_degrees: u32,
}

/// Everything the host needs to draw one preview frame.
///
/// Produced by [`render`] so frames can be asserted against in tests without
/// a real display surface; the host-side adapter just replays the commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommands {
    pub image: ImagePlacement,
    /// Four rectangles dimming the viewport outside the crop window, in
    /// top, bottom, left, right order.
    pub overlay: [Rect; 4],
    /// The crop window outline.
    pub crop_frame: Rect,
}

/// Describe one preview frame for the current inputs.
pub fn render(
    viewport: Viewport,
    transform: &PresentationTransform,
    source_width: u32,
    source_height: u32,
) -> Result<DrawCommands, GeometryError> {
    let draw = draw_rect(viewport, transform, source_width, source_height);
    if draw.width <= 0.0 || draw.height <= 0.0 {
        return Err(GeometryError::DegenerateGeometry {
            width: draw.width,
            height: draw.height,
        });
    }

    let window = crop_window(viewport);
    let overlay = [
        Rect::new(0.0, 0.0, viewport.width, window.top),
        Rect::new(
            0.0,
            window.bottom(),
            viewport.width,
            viewport.height - window.bottom(),
        ),
        Rect::new(0.0, window.top, window.left, window.height),
        Rect::new(
            window.right(),
            window.top,
            viewport.width - window.right(),
            window.height,
        ),
    ];

    Ok(DrawCommands {
        image: ImagePlacement {
            center: draw.center(),
            width: draw.width,
            height: draw.height,
            rotation_degrees: transform.rotation.degrees(),
        },
        overlay,
        crop_frame: window,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
