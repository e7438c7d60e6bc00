//! Image encoding for the crop engine.
//!
//! The processed receipt leaves the engine as a JPEG byte buffer; this module
//! provides that final encoding step with configurable quality.

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError};
