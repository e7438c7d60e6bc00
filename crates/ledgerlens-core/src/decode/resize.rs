//! Image resizing for the compression stage of the pipeline.
//!
//! All functions return new `DecodedImage` instances without modifying the
//! input. `resize_to_fit` is the one the pipeline uses: it only ever shrinks.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for zero target dimensions or
/// `DecodeError::CorruptedFile` if the source buffer is inconsistent.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}

/// Shrink an image so its longest edge is at most `max_edge`, preserving
/// aspect ratio. An image that already fits is returned unchanged; this
/// function never upscales.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::InvalidFormat);
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = fit_dimensions(image.width, image.height, max_edge);
    resize(image, new_width, new_height, filter)
}

/// Dimensions that fit within max_edge while preserving aspect ratio.
fn fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8); // R
                pixels.push(((y * 255) / height.max(1)) as u8); // G
                pixels.push(128); // B
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_resize_basic() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 50, 25, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 50);
        assert_eq!(resized.height, 25);
        assert_eq!(resized.pixels.len(), 50 * 25 * 3);
    }

    #[test]
    fn test_resize_same_dimensions() {
        let img = create_test_image(100, 50);
        let resized = resize(&img, 100, 50, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 100);
        assert_eq!(resized.height, 50);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(resize(&img, 0, 50, FilterType::Bilinear).is_err());
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_resize_to_fit_landscape() {
        let img = create_test_image(2048, 1536);
        let resized = resize_to_fit(&img, 1024, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 1024);
        assert_eq!(resized.height, 768);
    }

    #[test]
    fn test_resize_to_fit_portrait() {
        let img = create_test_image(1536, 2048);
        let resized = resize_to_fit(&img, 1024, FilterType::Lanczos3).unwrap();

        assert_eq!(resized.width, 768);
        assert_eq!(resized.height, 1024);
    }

    #[test]
    fn test_resize_to_fit_never_upscales() {
        let img = create_test_image(640, 480);
        let resized = resize_to_fit(&img, 1024, FilterType::Bilinear).unwrap();

        assert_eq!(resized.width, 640);
        assert_eq!(resized.height, 480);
        assert_eq!(resized.pixels, img.pixels);
    }

    #[test]
    fn test_resize_to_fit_zero_max_edge_error() {
        let img = create_test_image(100, 50);
        assert!(resize_to_fit(&img, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_fit_dimensions_landscape() {
        let (w, h) = fit_dimensions(2048, 1536, 1024);
        assert_eq!(w, 1024);
        assert_eq!(h, 768);
    }

    #[test]
    fn test_fit_dimensions_portrait() {
        let (w, h) = fit_dimensions(1536, 2048, 1024);
        assert_eq!(w, 768);
        assert_eq!(h, 1024);
    }

    #[test]
    fn test_fit_dimensions_extreme_strip() {
        // A till-roll receipt: very tall and narrow. Width must not hit 0.
        let (w, h) = fit_dimensions(50, 4000, 1024);
        assert_eq!(h, 1024);
        assert!(w >= 1);
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
