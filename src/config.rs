use std::str::FromStr;

use crate::{
    codec::entropy::{DeflateCoder, EntropyCoder, ZlibCoder},
    error::{CodecError, Result},
    image::{Resolution, DEFAULT_HEIGHT, DEFAULT_WIDTH},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    None,
    Fast,
    Default,
    #[default]
    Best,
}

impl CompressionLevel {
    pub fn to_flate2(&self) -> flate2::Compression {
        match self {
            CompressionLevel::None => flate2::Compression::none(),
            CompressionLevel::Fast => flate2::Compression::fast(),
            CompressionLevel::Default => flate2::Compression::default(),
            CompressionLevel::Best => flate2::Compression::best(),
        }
    }
}

impl FromStr for CompressionLevel {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(CompressionLevel::None),
            "fast" => Ok(CompressionLevel::Fast),
            "default" => Ok(CompressionLevel::Default),
            "best" => Ok(CompressionLevel::Best),
            _ => Err(CodecError::UnknownCompressionLevel(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntropyBackend {
    #[default]
    Deflate,
    Zlib,
}

impl FromStr for EntropyBackend {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "deflate" => Ok(EntropyBackend::Deflate),
            "zlib" => Ok(EntropyBackend::Zlib),
            _ => Err(CodecError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    pub resolution: Resolution,
    pub compression_level: CompressionLevel,
    pub backend: EntropyBackend,
}

impl CodecConfig {
    pub fn entropy_coder(&self) -> Box<dyn EntropyCoder> {
        match self.backend {
            EntropyBackend::Deflate => Box::new(DeflateCoder::new(self.compression_level)),
            EntropyBackend::Zlib => Box::new(ZlibCoder::new(self.compression_level)),
        }
    }
}

#[derive(Default)]
pub struct PartialCodecConfig {
    width: Option<usize>,
    height: Option<usize>,
    compression_level: Option<CompressionLevel>,
    backend: Option<EntropyBackend>,
}

impl PartialCodecConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }

    pub fn compression_level(mut self, compression_level: CompressionLevel) -> Self {
        self.compression_level = Some(compression_level);
        self
    }

    pub fn backend(mut self, backend: EntropyBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn build(self) -> Result<CodecConfig> {
        let resolution = Resolution::new(
            self.width.unwrap_or(DEFAULT_WIDTH),
            self.height.unwrap_or(DEFAULT_HEIGHT),
        )?;

        Ok(CodecConfig {
            resolution,
            compression_level: self.compression_level.unwrap_or_default(),
            backend: self.backend.unwrap_or_default(),
        })
    }
}
