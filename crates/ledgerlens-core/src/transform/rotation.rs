//! Lossless quarter-turn rotation.
//!
//! The cropper only ever rotates in 90° steps, so rotation is an exact pixel
//! remapping: no resampling and no canvas padding. Output dimensions swap on
//! odd turns; content is rotated clockwise about the image center with no
//! clipping.

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// Clockwise rotation in 90° steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum QuarterTurns {
    #[default]
    None = 0,
    /// 90° clockwise.
    Quarter = 1,
    /// 180°.
    Half = 2,
    /// 270° clockwise (90° counter-clockwise).
    ThreeQuarter = 3,
}

impl QuarterTurns {
    /// Advance by one 90° step, wrapping after a full turn.
    pub fn advance(self) -> Self {
        Self::from_steps(self as u8 + 1)
    }

    pub fn from_steps(steps: u8) -> Self {
        match steps % 4 {
            0 => QuarterTurns::None,
            1 => QuarterTurns::Quarter,
            2 => QuarterTurns::Half,
            _ => QuarterTurns::ThreeQuarter,
        }
    }

    /// Parse a clockwise angle; only exact quarter turns are valid.
    pub fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees % 360 {
            0 => Some(QuarterTurns::None),
            90 => Some(QuarterTurns::Quarter),
            180 => Some(QuarterTurns::Half),
            270 => Some(QuarterTurns::ThreeQuarter),
            _ => None,
        }
    }

    pub fn degrees(self) -> u32 {
        self as u32 * 90
    }

    /// True when the rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurns::Quarter | QuarterTurns::ThreeQuarter)
    }
}

/// Dimensions of the canvas that exactly contains the rotated image.
pub fn rotated_bounds(width: u32, height: u32, turns: QuarterTurns) -> (u32, u32) {
    if turns.swaps_dimensions() {
        (height, width)
    } else {
        (width, height)
    }
}

/// Rotate an image clockwise by the given number of quarter turns.
///
/// The remapping is exact: every output pixel is a source pixel, so rotating
/// four quarters in sequence reproduces the input byte for byte.
pub fn rotate_quarter(image: &DecodedImage, turns: QuarterTurns) -> DecodedImage {
    if turns == QuarterTurns::None {
        return image.clone();
    }

    let src_w = image.width as usize;
    let src_h = image.height as usize;
    let (dst_w32, dst_h32) = rotated_bounds(image.width, image.height, turns);
    let (dst_w, dst_h) = (dst_w32 as usize, dst_h32 as usize);

    let mut output = vec![0u8; image.pixels.len()];

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            // Inverse mapping: which source pixel lands at (dst_x, dst_y).
            let (src_x, src_y) = match turns {
                QuarterTurns::Quarter => (dst_y, src_h - 1 - dst_x),
                QuarterTurns::Half => (src_w - 1 - dst_x, src_h - 1 - dst_y),
                QuarterTurns::ThreeQuarter => (src_w - 1 - dst_y, dst_x),
                QuarterTurns::None => unreachable!(),
            };

            let src_idx = (src_y * src_w + src_x) * 3;
            let dst_idx = (dst_y * dst_w + dst_x) * 3;
            output[dst_idx..dst_idx + 3].copy_from_slice(&image.pixels[src_idx..src_idx + 3]);
        }
    }

    DecodedImage {
        width: dst_w32,
        height: dst_h32,
        pixels: output,
    }
}
