use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{error::Result, image::Resolution, pixel_formats::PixelFormat};

use super::Muxer;

pub const FRAMERATE_HINT: u32 = 25;

pub struct RawFileMuxer {
    output_dir: PathBuf,
}

impl RawFileMuxer {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;

        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    fn playback_hint(format: &dyn PixelFormat, resolution: Resolution, path: &Path) -> String {
        format!(
            "ffplay -f rawvideo -pixel_format {} -video_size {} -framerate {} {}",
            format.name(),
            resolution,
            FRAMERATE_HINT,
            path.display()
        )
    }
}

impl Muxer for RawFileMuxer {
    fn write_frames<F: AsRef<[u8]>>(
        &self,
        file_name: &str,
        format: &dyn PixelFormat,
        resolution: Resolution,
        frames: &[F],
    ) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let mut writer = BufWriter::new(File::create(&path)?);

        for frame in frames {
            writer.write_all(frame.as_ref())?;
        }
        writer.flush()?;

        info!(
            frames = frames.len(),
            "wrote {}, play with: {}",
            path.display(),
            Self::playback_hint(format, resolution, &path)
        );

        Ok(path)
    }

    fn write_bitstream(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        fs::write(&path, bytes)?;
        info!(bytes = bytes.len(), "wrote {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel_formats::Yuv420p;

    #[test]
    fn test_playback_hint() {
        let resolution = Resolution::new(384, 216).unwrap();
        let hint = RawFileMuxer::playback_hint(&Yuv420p, resolution, Path::new("encoded.yuv"));

        assert_eq!(
            hint,
            "ffplay -f rawvideo -pixel_format yuv420p -video_size 384x216 -framerate 25 encoded.yuv"
        );
    }
}
