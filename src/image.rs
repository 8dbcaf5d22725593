use crate::error::{CodecError, Result};

pub const DEFAULT_WIDTH: usize = 384;
pub const DEFAULT_HEIGHT: usize = 216;

/// Frame dimensions shared by every stage of the pipeline.
///
/// Both sides are positive and even so that chroma can be averaged over
/// whole 2x2 blocks, and an RGB24 frame size always fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: usize,
    height: usize,
}

impl Resolution {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let rgb24_frame_size = width.checked_mul(height).and_then(|p| p.checked_mul(3));

        if width == 0
            || height == 0
            || width % 2 != 0
            || height % 2 != 0
            || rgb24_frame_size.is_none()
        {
            return Err(CodecError::InvalidDimensions { width, height });
        }

        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn luma_len(&self) -> usize {
        self.pixel_count()
    }

    pub fn chroma_width(&self) -> usize {
        self.width / 2
    }

    pub fn chroma_len(&self) -> usize {
        self.pixel_count() / 4
    }

    pub fn rgb24_frame_size(&self) -> usize {
        self.pixel_count() * 3
    }

    pub fn yuv420p_frame_size(&self) -> usize {
        self.pixel_count() * 3 / 2
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_odd_dimensions() {
        assert!(matches!(
            Resolution::new(5, 4),
            Err(CodecError::InvalidDimensions { width: 5, height: 4 })
        ));
        assert!(Resolution::new(4, 3).is_err());
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(Resolution::new(0, 2).is_err());
        assert!(Resolution::new(2, 0).is_err());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert!(matches!(
            Resolution::new(1 << 33, 1 << 32),
            Err(CodecError::InvalidDimensions { .. })
        ));
        assert!(Resolution::new(usize::MAX - 1, 2).is_err());
        assert!(Resolution::new(2, usize::MAX / 4).is_err());
    }

    #[test]
    fn test_frame_sizes() {
        let resolution = Resolution::new(4, 2).unwrap();
        assert_eq!(resolution.rgb24_frame_size(), 24);
        assert_eq!(resolution.luma_len(), 8);
        assert_eq!(resolution.chroma_len(), 2);
        assert_eq!(resolution.chroma_width(), 2);
        assert_eq!(resolution.yuv420p_frame_size(), 12);
    }

    #[test]
    fn test_default_resolution() {
        let resolution = Resolution::default();
        assert_eq!((resolution.width(), resolution.height()), (384, 216));
        assert_eq!(resolution.to_string(), "384x216");
    }
}
