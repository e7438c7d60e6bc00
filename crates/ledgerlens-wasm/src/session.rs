//! Interactive crop session bindings.
//!
//! The host UI forwards pointer, touch, and wheel events into a [`CropSession`]
//! and redraws from [`CropSession::draw_commands`] whenever the transform or
//! the viewport changes. On confirmation it hands the original file bytes to
//! [`CropSession::confirm`], which runs the full rotate → crop → compress
//! pipeline with the session's current framing.
//!
//! ```typescript
//! const session = new CropSession(image.width, image.height, vw, vh);
//!
//! canvas.onpointerdown = (e) => session.begin_drag(e.offsetX, e.offsetY);
//! canvas.onpointermove = (e) => { session.update_drag(e.offsetX, e.offsetY); redraw(); };
//! canvas.onwheel = (e) => { session.zoom_by_wheel(e.deltaY); redraw(); };
//!
//! const jpeg = session.confirm(fileBytes);
//! ```

use ledgerlens_core::geometry::Point;
use ledgerlens_core::layout;
use ledgerlens_core::pipeline;
use ledgerlens_core::session::CropSession as CoreSession;
use wasm_bindgen::prelude::*;

/// Interactive crop session for one receipt image.
#[wasm_bindgen]
pub struct CropSession {
    inner: CoreSession,
    viewport: layout::Viewport,
}

#[wasm_bindgen]
impl CropSession {
    /// Start a session for a decoded image of the given pixel size inside a
    /// viewport of the given logical size.
    #[wasm_bindgen(constructor)]
    pub fn new(
        source_width: u32,
        source_height: u32,
        viewport_width: f64,
        viewport_height: f64,
    ) -> CropSession {
        CropSession {
            inner: CoreSession::new(source_width, source_height),
            viewport: layout::Viewport::new(viewport_width, viewport_height),
        }
    }

    /// Call when the hosting container resizes.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.viewport = layout::Viewport::new(width, height);
    }

    /// Rotate 90° clockwise; zoom and pan reset to the new orientation's
    /// initial framing.
    pub fn rotate(&mut self) {
        self.inner.rotate();
    }

    /// Current clockwise rotation in degrees (0, 90, 180, 270).
    #[wasm_bindgen(getter)]
    pub fn rotation_degrees(&self) -> u32 {
        self.inner.transform().rotation.degrees()
    }

    /// Current zoom factor.
    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f64 {
        self.inner.transform().scale
    }

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.inner.begin_drag(Point::new(x, y));
    }

    pub fn update_drag(&mut self, x: f64, y: f64) {
        self.inner.update_drag(Point::new(x, y));
    }

    pub fn begin_pinch(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.inner.begin_pinch(Point::new(x1, y1), Point::new(x2, y2));
    }

    pub fn update_pinch(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.inner.update_pinch(Point::new(x1, y1), Point::new(x2, y2));
    }

    /// Pointer-up / touch-end: ends any drag or pinch, keeps the framing.
    pub fn end_gesture(&mut self) {
        self.inner.end_gesture();
    }

    /// Wheel zoom; only the sign of `delta` matters.
    pub fn zoom_by_wheel(&mut self, delta: f64) {
        self.inner.zoom_by_wheel(delta);
    }

    /// Current crop region as `{x, y, width, height}` fractions of the
    /// source image.
    pub fn crop_region(&self) -> Result<JsValue, JsValue> {
        let (width, height) = self.inner.source_dimensions();
        let region = layout::crop_region(self.viewport, &self.inner.transform(), width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&region).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Draw description for the current frame: image placement, dimming
    /// overlay, and crop frame.
    pub fn draw_commands(&self) -> Result<JsValue, JsValue> {
        let (width, height) = self.inner.source_dimensions();
        let commands = layout::render(self.viewport, &self.inner.transform(), width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&commands).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Run the full pipeline on the original file bytes with the current
    /// framing, returning the compressed JPEG for upload.
    ///
    /// The host should disable its confirm control while a call is pending;
    /// the engine provides no cancellation.
    pub fn confirm(&self, bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
        let (width, height) = self.inner.source_dimensions();
        let transform = self.inner.transform();
        let region = layout::crop_region(self.viewport, &transform, width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        pipeline::process_image(bytes, transform.rotation, &region)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// Tests for session bindings.
///
/// Note: `crop_region`, `draw_commands`, and `confirm` return
/// `Result<T, JsValue>` and are exercised in the wasm32-only tests below;
/// the gesture surface itself is plain data and tests on all targets.
#[cfg(test)]
mod tests {
    use super::*;

    // Tests that work on all targets

    #[test]
    fn test_rotate_updates_degrees_and_resets_scale() {
        let mut session = CropSession::new(800, 600, 400.0, 600.0);
        session.zoom_by_wheel(-1.0);
        assert!(session.scale() > 1.0);

        session.rotate();
        assert_eq!(session.rotation_degrees(), 90);
        assert_eq!(session.scale(), 1.0);

        for _ in 0..3 {
            session.rotate();
        }
        assert_eq!(session.rotation_degrees(), 0);
    }

    #[test]
    fn test_gesture_surface_forwards_to_core() {
        let mut session = CropSession::new(800, 600, 400.0, 600.0);

        session.begin_pinch(0.0, 0.0, 100.0, 0.0);
        session.update_pinch(0.0, 0.0, 200.0, 0.0);
        assert!((session.scale() - 2.0).abs() < 1e-12);

        session.end_gesture();
        assert!((session.scale() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_region_through_core_layout() {
        // The same computation confirm() runs, without the JsValue boundary.
        let session = CropSession::new(800, 600, 400.0, 600.0);
        let region = layout::crop_region(
            session.viewport,
            &session.inner.transform(),
            800,
            600,
        )
        .unwrap();
        assert!(region.is_within_bounds());
    }
}

/// WASM-specific tests that require JsValue.
///
/// These use functions returning `Result<T, JsValue>` and can only run on
/// wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_crop_region_returns_object() {
        let session = CropSession::new(800, 600, 400.0, 600.0);
        let value = session.crop_region().unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_draw_commands_returns_object() {
        let session = CropSession::new(800, 600, 400.0, 600.0);
        let value = session.draw_commands().unwrap();
        assert!(value.is_object());
    }

    #[wasm_bindgen_test]
    fn test_confirm_rejects_corrupt_bytes() {
        let session = CropSession::new(800, 600, 400.0, 600.0);
        assert!(session.confirm(b"not an image").is_err());
    }
}
