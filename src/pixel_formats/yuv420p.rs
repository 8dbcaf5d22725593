use crate::{
    colors::{Rgb, YCbCr},
    error::{CodecError, Result},
    image::Resolution,
};

use super::{utils::ensure_bytestream_size_fits_resolution, PixelFormat, Rgb24Frame};

pub struct Yuv420p;

impl PixelFormat for Yuv420p {
    fn name(&self) -> &'static str {
        "yuv420p"
    }

    fn frame_size(&self, resolution: Resolution) -> usize {
        resolution.yuv420p_frame_size()
    }
}

/// Full resolution planes produced by color conversion, one entry per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPlanes {
    pub luma: Vec<u8>,
    pub cb: Vec<f64>,
    pub cr: Vec<f64>,
}

/// Planar frame: the luma plane, then the quarter resolution Cb plane, then Cr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yuv420pFrame {
    resolution: Resolution,
    bytes: Vec<u8>,
}

impl Yuv420pFrame {
    pub fn from_bytes(resolution: Resolution, bytes: Vec<u8>) -> Result<Self> {
        ensure_bytestream_size_fits_resolution(&Yuv420p, &bytes, resolution)?;

        Ok(Self { resolution, bytes })
    }

    pub fn from_rgb24(frame: &Rgb24Frame) -> Self {
        let resolution = frame.resolution();

        Self::subsample(resolution, &frame.to_color_planes())
    }

    /// Averages every 2x2 chroma block down to a single 8-bit sample.
    pub fn from_color_planes(resolution: Resolution, planes: &ColorPlanes) -> Result<Self> {
        let expected = resolution.pixel_count();

        for (plane, actual) in [
            ("luma plane", planes.luma.len()),
            ("cb plane", planes.cb.len()),
            ("cr plane", planes.cr.len()),
        ] {
            if actual != expected {
                return Err(CodecError::FrameSizeMismatch {
                    format: plane,
                    expected,
                    actual,
                });
            }
        }

        Ok(Self::subsample(resolution, planes))
    }

    fn subsample(resolution: Resolution, planes: &ColorPlanes) -> Self {
        let width = resolution.width();
        let chroma_width = resolution.chroma_width();
        let mut cb = vec![0; resolution.chroma_len()];
        let mut cr = vec![0; resolution.chroma_len()];

        for row in (0..resolution.height()).step_by(2) {
            for col in (0..width).step_by(2) {
                let top = row * width + col;
                let bottom = top + width;
                let index = (row / 2) * chroma_width + col / 2;

                cb[index] = average_block(&planes.cb, top, bottom);
                cr[index] = average_block(&planes.cr, top, bottom);
            }
        }

        let mut bytes = Vec::with_capacity(resolution.yuv420p_frame_size());
        bytes.extend_from_slice(&planes.luma);
        bytes.extend_from_slice(&cb);
        bytes.extend_from_slice(&cr);

        Self { resolution, bytes }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn luma(&self) -> &[u8] {
        &self.bytes[..self.resolution.luma_len()]
    }

    pub fn cb(&self) -> &[u8] {
        let start = self.resolution.luma_len();

        &self.bytes[start..start + self.resolution.chroma_len()]
    }

    pub fn cr(&self) -> &[u8] {
        let start = self.resolution.luma_len() + self.resolution.chroma_len();

        &self.bytes[start..]
    }

    /// Luma at (row, col), chroma from the block covering it.
    pub fn sample(&self, row: usize, col: usize) -> YCbCr {
        let luma = self.luma()[row * self.resolution.width() + col];
        let chroma_index = (row / 2) * self.resolution.chroma_width() + col / 2;

        YCbCr::new(luma, self.cb()[chroma_index], self.cr()[chroma_index])
    }

    pub fn to_rgb24(&self) -> Rgb24Frame {
        let mut bytes = Vec::with_capacity(self.resolution.rgb24_frame_size());

        for row in 0..self.resolution.height() {
            for col in 0..self.resolution.width() {
                let rgb = Rgb::from(self.sample(row, col));
                bytes.extend_from_slice(&<[u8; 3]>::from(&rgb));
            }
        }

        Rgb24Frame::from_validated(self.resolution, bytes)
    }
}

impl AsRef<[u8]> for Yuv420pFrame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

fn average_block(plane: &[f64], top: usize, bottom: usize) -> u8 {
    ((plane[top] + plane[top + 1] + plane[bottom] + plane[bottom + 1]) / 4.0) as u8
}
