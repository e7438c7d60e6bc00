//! Transform and gesture state for the interactive crop session.
//!
//! The session tracks how the source bitmap is presented inside the viewport:
//! a quarter-turn rotation, a continuous zoom factor, and a pan offset. All
//! mutations happen synchronously inside the host's input callbacks; the
//! session never touches a drawing surface and carries no pixel data.
//!
//! Gesture state is a tagged union so that a drag anchor and a pinch anchor
//! cannot coexist: a second pointer always replaces an in-progress drag, and
//! pointer-up returns the session to `Idle` without disturbing the framing.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Vec2};
use crate::transform::QuarterTurns;

/// Lower zoom bound for wheel and pinch input.
pub const MIN_SCALE: f64 = 0.5;
/// Upper zoom bound for wheel and pinch input.
pub const MAX_SCALE: f64 = 3.0;
/// Fixed zoom increment per wheel event, regardless of delta magnitude.
pub const WHEEL_ZOOM_STEP: f64 = 0.1;

/// How the source bitmap is presented inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresentationTransform {
    /// Clockwise rotation in 90° steps.
    pub rotation: QuarterTurns,
    /// Zoom factor on top of the base fit scale, within [`MIN_SCALE`, `MAX_SCALE`].
    pub scale: f64,
    /// Displacement of the image center from the viewport center.
    pub offset: Vec2,
}

impl Default for PresentationTransform {
    fn default() -> Self {
        Self {
            rotation: QuarterTurns::None,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

/// Transient interaction state between a gesture begin and its end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Single-pointer pan. The anchor is chosen so that
    /// `offset = pointer − anchor` for every subsequent move.
    Dragging { anchor: Point },
    /// Two-pointer pinch, anchored at the starting distance and scale.
    Pinching {
        initial_distance: f64,
        initial_scale: f64,
    },
}

/// Interactive crop session for one source image.
///
/// Owns the source dimensions and the presentation transform; the matching
/// layout math lives in [`crate::layout`].
#[derive(Debug, Clone)]
pub struct CropSession {
    source_width: u32,
    source_height: u32,
    transform: PresentationTransform,
    gesture: GestureState,
}

impl CropSession {
    pub fn new(source_width: u32, source_height: u32) -> Self {
        Self {
            source_width,
            source_height,
            transform: PresentationTransform::default(),
            gesture: GestureState::Idle,
        }
    }

    pub fn source_dimensions(&self) -> (u32, u32) {
        (self.source_width, self.source_height)
    }

    /// Snapshot of the current transform.
    pub fn transform(&self) -> PresentationTransform {
        self.transform
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    /// Advance rotation by 90° clockwise and reset zoom and pan.
    ///
    /// The previous framing has no sensible meaning in the new orientation,
    /// so the session starts over instead of re-projecting stale offsets.
    /// Any in-progress gesture is dropped for the same reason: its anchor
    /// refers to the old framing.
    pub fn rotate(&mut self) {
        self.transform.rotation = self.transform.rotation.advance();
        self.transform.scale = 1.0;
        self.transform.offset = Vec2::ZERO;
        self.gesture = GestureState::Idle;
    }

    pub fn begin_drag(&mut self, pointer: Point) {
        self.gesture = GestureState::Dragging {
            anchor: Point::new(
                pointer.x - self.transform.offset.x,
                pointer.y - self.transform.offset.y,
            ),
        };
    }

    /// No-op unless a drag is anchored.
    pub fn update_drag(&mut self, pointer: Point) {
        if let GestureState::Dragging { anchor } = self.gesture {
            self.transform.offset = Vec2::new(pointer.x - anchor.x, pointer.y - anchor.y);
        }
    }

    /// Anchor a pinch at the current pointer distance and scale.
    ///
    /// A second pointer always wins over an in-progress drag. Coincident
    /// pointers cannot anchor a scale ratio and leave the session idle.
    pub fn begin_pinch(&mut self, first: Point, second: Point) {
        let distance = first.distance(second);
        if distance <= f64::EPSILON {
            self.gesture = GestureState::Idle;
            return;
        }
        self.gesture = GestureState::Pinching {
            initial_distance: distance,
            initial_scale: self.transform.scale,
        };
    }

    /// Rescale from the anchored pinch: `scale = initial_scale · d / d₀`.
    ///
    /// No-op without a matching begin; the host may deliver moves without one
    /// when multi-pointer events are coalesced.
    pub fn update_pinch(&mut self, first: Point, second: Point) {
        if let GestureState::Pinching {
            initial_distance,
            initial_scale,
        } = self.gesture
        {
            let ratio = first.distance(second) / initial_distance;
            self.transform.scale = (initial_scale * ratio).clamp(MIN_SCALE, MAX_SCALE);
        }
    }

    /// Wheel zoom: a fixed step per event, scroll-up zooms in.
    pub fn zoom_by_wheel(&mut self, delta: f64) {
        let step = if delta > 0.0 {
            -WHEEL_ZOOM_STEP
        } else {
            WHEEL_ZOOM_STEP
        };
        self.transform.scale = (self.transform.scale + step).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Pointer-up: clears the gesture anchor but keeps the framing.
    pub fn end_gesture(&mut self) {
        self.gesture = GestureState::Idle;
    }
}
