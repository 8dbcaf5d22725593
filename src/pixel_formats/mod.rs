use crate::image::Resolution;

pub mod rgb24;
mod utils;
pub mod yuv420p;

pub use rgb24::{Rgb24, Rgb24Frame};
pub use yuv420p::{ColorPlanes, Yuv420p, Yuv420pFrame};

pub trait PixelFormat {
    /// The ffmpeg `-pixel_format` name.
    fn name(&self) -> &'static str;
    fn frame_size(&self, resolution: Resolution) -> usize;
}
