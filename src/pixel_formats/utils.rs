use crate::{
    error::{CodecError, Result},
    image::Resolution,
};

use super::PixelFormat;

pub fn ensure_bytestream_size_fits_resolution(
    format: &dyn PixelFormat,
    bytes: &[u8],
    resolution: Resolution,
) -> Result<()> {
    let expected = format.frame_size(resolution);

    if bytes.len() != expected {
        return Err(CodecError::FrameSizeMismatch {
            format: format.name(),
            expected,
            actual: bytes.len(),
        });
    }

    Ok(())
}
