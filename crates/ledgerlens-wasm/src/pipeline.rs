//! Processing pipeline WASM bindings.
//!
//! Standalone entry point for hosts that track the rotation and crop region
//! themselves instead of going through [`crate::session::CropSession`].

use ledgerlens_core::pipeline;
use ledgerlens_core::transform::{CropRegion, QuarterTurns};
use wasm_bindgen::prelude::*;

/// Process a receipt image: rotate → crop → shrink → JPEG-encode.
///
/// # Arguments
///
/// * `bytes` - The original file bytes (JPEG or PNG)
/// * `rotation_degrees` - Clockwise rotation; must be one of 0, 90, 180, 270
/// * `region` - `{x, y, width, height}` fractions of the *rotated* bitmap
///
/// # Returns
///
/// The compressed JPEG bytes (longest edge ≤ 1024, quality 85), ready for
/// upload to the recognition backend.
///
/// # Example
///
/// ```typescript
/// const jpeg = process_image(bytes, 90, { x: 0.1, y: 0, width: 0.8, height: 1 });
/// await uploadForRecognition(new Blob([jpeg], { type: 'image/jpeg' }));
/// ```
#[wasm_bindgen]
pub fn process_image(
    bytes: &[u8],
    rotation_degrees: u32,
    region: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let region: CropRegion = serde_wasm_bindgen::from_value(region)
        .map_err(|e| JsValue::from_str(&format!("invalid crop region: {e}")))?;

    let rotation = QuarterTurns::from_degrees(rotation_degrees)
        .ok_or_else(|| JsValue::from_str("rotation must be one of 0, 90, 180, 270"))?;

    pipeline::process_image(bytes, rotation, &region).map_err(|e| JsValue::from_str(&e.to_string()))
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
    fn test_rejects_non_quarter_rotation() {
        let region = serde_wasm_bindgen::to_value(&CropRegion::full()).unwrap();
        let result = process_image(&[0u8; 4], 45, region);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_rejects_malformed_region() {
        let result = process_image(&[0u8; 4], 0, JsValue::from_str("nope"));
        assert!(result.is_err());
    }
}
