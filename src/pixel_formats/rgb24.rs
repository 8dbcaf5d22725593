use crate::{
    colors::{FullYCbCr, Rgb},
    error::Result,
    image::Resolution,
};

use super::{utils::ensure_bytestream_size_fits_resolution, ColorPlanes, PixelFormat};

pub struct Rgb24;

impl PixelFormat for Rgb24 {
    fn name(&self) -> &'static str {
        "rgb24"
    }

    fn frame_size(&self, resolution: Resolution) -> usize {
        resolution.rgb24_frame_size()
    }
}

/// Interleaved R, G, B bytes, row major, no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgb24Frame {
    resolution: Resolution,
    bytes: Vec<u8>,
}

impl Rgb24Frame {
    pub fn new(resolution: Resolution, bytes: Vec<u8>) -> Result<Self> {
        ensure_bytestream_size_fits_resolution(&Rgb24, &bytes, resolution)?;

        Ok(Self { resolution, bytes })
    }

    pub fn filled(resolution: Resolution, color: Rgb) -> Self {
        let bytes = <[u8; 3]>::from(&color).repeat(resolution.pixel_count());

        Self { resolution, bytes }
    }

    pub(crate) fn from_validated(resolution: Resolution, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), resolution.rgb24_frame_size());

        Self { resolution, bytes }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn pixel(&self, row: usize, col: usize) -> Rgb {
        let offset = (row * self.resolution.width() + col) * 3;

        Rgb::new(
            self.bytes[offset],
            self.bytes[offset + 1],
            self.bytes[offset + 2],
        )
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// Converts every pixel to full resolution luma and chroma.
    pub fn to_color_planes(&self) -> ColorPlanes {
        let pixel_count = self.resolution.pixel_count();
        let mut planes = ColorPlanes {
            luma: Vec::with_capacity(pixel_count),
            cb: Vec::with_capacity(pixel_count),
            cr: Vec::with_capacity(pixel_count),
        };

        for pixel in self.pixels() {
            let ycbcr = FullYCbCr::from(&pixel);
            planes.luma.push(ycbcr.y);
            planes.cb.push(ycbcr.cb);
            planes.cr.push(ycbcr.cr);
        }

        planes
    }
}

impl AsRef<[u8]> for Rgb24Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
