//! Raster decoding with EXIF orientation handling.
//!
//! Receipt photos arrive as JPEG or PNG bytes from a file input or a camera
//! capture. The format is sniffed from the bytes; EXIF orientation is baked
//! into the pixel data so every later stage sees an upright bitmap.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Decode an image from bytes, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes are not a decodable
/// image in one of the enabled formats.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    // Extract EXIF orientation before decoding; PNG and EXIF-less JPEG
    // simply come back as Normal.
    let orientation = detect_orientation(bytes);

    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);

    Ok(DecodedImage::from_rgb_image(oriented.into_rgb8()))
}

/// Decode an image from bytes without applying EXIF orientation.
///
/// Use this when the caller manages orientation itself.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn detect_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
