#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<&Rgb> for [u8; 3] {
    fn from(rgb: &Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

/// A sample as stored in a YUV420p plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

impl YCbCr {
    pub fn new(y: u8, cb: u8, cr: u8) -> Self {
        Self { y, cb, cr }
    }
}

/// Full resolution sample straight out of color conversion. Luma is already
/// truncated to 8 bits, chroma stays in floating point until it has been
/// averaged over its 2x2 block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FullYCbCr {
    pub y: u8,
    pub cb: f64,
    pub cr: f64,
}

impl From<&Rgb> for FullYCbCr {
    fn from(rgb: &Rgb) -> Self {
        let (r, g, b) = (rgb.r as f64, rgb.g as f64, rgb.b as f64);

        // Term order is kept fixed so results stay bit-exact across builds.
        let y = 0.299 * r + 0.587 * g + 0.114 * b;
        let cb = -0.169 * r - 0.331 * g + 0.449 * b + 128.0;
        let cr = 0.499 * r - 0.418 * g - 0.0813 * b + 128.0;

        Self {
            y: y as u8,
            cb,
            cr,
        }
    }
}

impl From<YCbCr> for Rgb {
    fn from(ycbcr: YCbCr) -> Self {
        let y = ycbcr.y as f64;
        let u = ycbcr.cb as f64 - 128.0;
        let v = ycbcr.cr as f64 - 128.0;

        Rgb {
            r: clamp_to_u8(y + 1.402 * v),
            g: clamp_to_u8(y - 0.344 * u - 0.714 * v),
            b: clamp_to_u8(y + 1.772 * u),
        }
    }
}

/// Saturates to [0, 255] then truncates.
pub fn clamp_to_u8(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_is_truncated() {
        // 0.299 * 100 + 0.587 * 150 + 0.114 * 200 = 140.75
        let ycbcr = FullYCbCr::from(&Rgb::new(100, 150, 200));
        assert_eq!(ycbcr.y, 140);
        assert!((ycbcr.cb - 151.25).abs() < 1e-9);
        assert!((ycbcr.cr - 98.94).abs() < 1e-9);
    }

    #[test]
    fn test_black_has_neutral_chroma() {
        let ycbcr = FullYCbCr::from(&Rgb::new(0, 0, 0));
        assert_eq!(ycbcr.y, 0);
        assert_eq!(ycbcr.cb, 128.0);
        assert_eq!(ycbcr.cr, 128.0);
    }

    #[test]
    fn test_rgb_from_ycbcr() {
        assert_eq!(Rgb::from(YCbCr::new(140, 151, 98)), Rgb::new(97, 153, 180));
        assert_eq!(Rgb::from(YCbCr::new(0, 128, 128)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_rgb_from_ycbcr_saturates() {
        assert_eq!(Rgb::from(YCbCr::new(255, 255, 255)), Rgb::new(255, 120, 255));
        assert_eq!(Rgb::from(YCbCr::new(0, 0, 0)), Rgb::new(0, 135, 0));
    }

    #[test]
    fn test_clamp_to_u8() {
        assert_eq!(clamp_to_u8(-3.5), 0);
        assert_eq!(clamp_to_u8(254.9), 254);
        assert_eq!(clamp_to_u8(300.0), 255);
    }
}
