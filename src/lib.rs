//! gvid: a small lossy-then-lossless video codec.
//!
//! Raw RGB24 frames are converted to planar YUV420, every frame after the
//! first is replaced by its byte-wise difference from the previous one, and
//! the resulting stream is DEFLATE compressed. Decoding reverses the chain.

mod binary;
pub mod codec;
pub mod colors;
pub mod config;
pub mod demuxers;
pub mod error;
pub mod image;
pub mod muxers;
pub mod pixel_formats;
pub mod report;
pub mod stream;

pub use codec::{decode_video, encode_video, frames_to_rgb24, EncodedVideo};
pub use config::{CodecConfig, CompressionLevel, EntropyBackend, PartialCodecConfig};
pub use error::{CodecError, Result};
pub use image::Resolution;
