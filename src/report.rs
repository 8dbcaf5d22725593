use std::fmt;

use tracing::info;

/// Byte counts after each stage of the encoder. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    pub frame_count: usize,
    pub raw_size: usize,
    pub yuv_size: usize,
    /// Keyframe stored raw plus every predicted frame run-length coded.
    pub rle_size: usize,
    pub entropy_size: usize,
    pub entropy_backend: &'static str,
}

impl CompressionReport {
    pub fn percent_of_raw(&self, size: usize) -> f64 {
        if self.raw_size == 0 {
            return 0.0;
        }

        100.0 * size as f64 / self.raw_size as f64
    }

    pub fn log(&self) {
        info!(frames = self.frame_count, "Raw size: {} bytes", self.raw_size);
        info!(
            "YUV420P size: {} bytes ({:.2}% original size)",
            self.yuv_size,
            self.percent_of_raw(self.yuv_size)
        );
        info!(
            "RLE size: {} bytes ({:.2}% original size)",
            self.rle_size,
            self.percent_of_raw(self.rle_size)
        );
        info!(
            "{} size: {} bytes ({:.2}% original size)",
            self.entropy_backend.to_uppercase(),
            self.entropy_size,
            self.percent_of_raw(self.entropy_size)
        );
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages = [
            ("raw", self.raw_size),
            ("yuv420p", self.yuv_size),
            ("rle", self.rle_size),
            (self.entropy_backend, self.entropy_size),
        ];

        for (stage, size) in stages {
            writeln!(
                f,
                "{:<8} {:>12} bytes {:>7.2}%",
                stage,
                size,
                self.percent_of_raw(size)
            )?;
        }

        Ok(())
    }
}
