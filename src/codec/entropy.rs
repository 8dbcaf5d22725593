//! Lossless back end applied to the concatenated delta frames.

use std::io::{Read, Write};

use flate2::{
    read::{DeflateDecoder, ZlibDecoder},
    write::{DeflateEncoder, ZlibEncoder},
};

use crate::{
    config::CompressionLevel,
    error::{CodecError, Result},
};

/// A general purpose lossless byte-stream compressor.
///
/// `decompress(compress(x)) == x` must hold for every input, including the
/// empty one.
pub trait EntropyCoder: Send + Sync {
    fn name(&self) -> &'static str;
    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>>;
    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>>;

    /// Compresses `chunks` as a single stream, as if they were concatenated.
    fn compress_chunks(&self, chunks: &[Vec<u8>]) -> Result<Vec<u8>> {
        self.compress(&chunks.concat())
    }
}

/// Raw DEFLATE (RFC 1951) with no container.
pub struct DeflateCoder {
    level: CompressionLevel,
}

impl DeflateCoder {
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    fn encode<'a>(&self, chunks: impl IntoIterator<Item = &'a [u8]>) -> Result<Vec<u8>> {
        let mut encoder = DeflateEncoder::new(Vec::new(), self.level.to_flate2());
        write_chunks(&mut encoder, chunks)?;

        encoder.finish().map_err(CodecError::Compression)
    }
}

impl EntropyCoder for DeflateCoder {
    fn name(&self) -> &'static str {
        "deflate"
    }

    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.encode([bytes])
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        read_all(DeflateDecoder::new(bytes))
    }

    fn compress_chunks(&self, chunks: &[Vec<u8>]) -> Result<Vec<u8>> {
        self.encode(chunks.iter().map(Vec::as_slice))
    }
}

/// DEFLATE inside a zlib wrapper (RFC 1950), adding an Adler-32 trailer.
pub struct ZlibCoder {
    level: CompressionLevel,
}

impl ZlibCoder {
    pub fn new(level: CompressionLevel) -> Self {
        Self { level }
    }

    fn encode<'a>(&self, chunks: impl IntoIterator<Item = &'a [u8]>) -> Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::new(), self.level.to_flate2());
        write_chunks(&mut encoder, chunks)?;

        encoder.finish().map_err(CodecError::Compression)
    }
}

impl EntropyCoder for ZlibCoder {
    fn name(&self) -> &'static str {
        "zlib"
    }

    fn compress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.encode([bytes])
    }

    fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        read_all(ZlibDecoder::new(bytes))
    }

    fn compress_chunks(&self, chunks: &[Vec<u8>]) -> Result<Vec<u8>> {
        self.encode(chunks.iter().map(Vec::as_slice))
    }
}

fn write_chunks<'a>(
    encoder: &mut impl Write,
    chunks: impl IntoIterator<Item = &'a [u8]>,
) -> Result<()> {
    for chunk in chunks {
        encoder
            .write_all(chunk)
            .map_err(CodecError::Compression)?;
    }

    Ok(())
}

fn read_all(mut decoder: impl Read) -> Result<Vec<u8>> {
    let mut decompressed = Vec::new();
    decoder
        .read_to_end(&mut decompressed)
        .map_err(CodecError::Decompression)?;

    Ok(decompressed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coders() -> Vec<Box<dyn EntropyCoder>> {
        vec![
            Box::new(DeflateCoder::new(CompressionLevel::Best)),
            Box::new(ZlibCoder::new(CompressionLevel::Fast)),
        ]
    }

    #[test]
    fn test_roundtrip() {
        let input: Vec<u8> = (0..4096u32).map(|i| (i % 7) as u8).collect();

        for coder in coders() {
            let compressed = coder.compress(&input).unwrap();
            assert!(compressed.len() < input.len(), "{}", coder.name());
            assert_eq!(coder.decompress(&compressed).unwrap(), input);
        }
    }

    #[test]
    fn test_empty_roundtrip() {
        for coder in coders() {
            let compressed = coder.compress(&[]).unwrap();
            assert!(coder.decompress(&compressed).unwrap().is_empty());
        }
    }

    #[test]
    fn test_chunks_match_concatenation() {
        let chunks = vec![vec![1, 2, 3], vec![], vec![4, 4, 4, 4]];

        for coder in coders() {
            let compressed = coder.compress_chunks(&chunks).unwrap();
            assert_eq!(coder.decompress(&compressed).unwrap(), chunks.concat());
        }
    }

    #[test]
    fn test_corrupt_stream_is_rejected() {
        // BTYPE 0b11 is reserved in DEFLATE.
        let deflate = DeflateCoder::new(CompressionLevel::Default);
        assert!(matches!(
            deflate.decompress(&[0xff, 0xff, 0xff, 0xff]),
            Err(CodecError::Decompression(_))
        ));

        let zlib = ZlibCoder::new(CompressionLevel::Default);
        assert!(matches!(
            zlib.decompress(&[0x00, 0x01, 0x02, 0x03]),
            Err(CodecError::Decompression(_))
        ));
    }
}
