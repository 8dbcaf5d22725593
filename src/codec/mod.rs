//! The transform pipeline.
//!
//! Encoding runs RGB24 -> YUV420p -> temporal prediction -> entropy coding.
//! Run-length coding of the predicted frames is only measured for the
//! report. Decoding undoes the persisted stages in reverse order.

pub mod decode;
pub mod delta;
pub mod encode;
pub mod entropy;
pub mod rle;

pub use decode::{decode_video, frames_to_rgb24, split_frames};
pub use encode::{encode_video, EncodedVideo};
