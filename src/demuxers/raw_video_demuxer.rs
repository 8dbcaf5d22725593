use std::io::{ErrorKind, Read};

use tracing::warn;

use crate::{
    error::{CodecError, Result},
    image::Resolution,
    pixel_formats::{PixelFormat, Rgb24, Rgb24Frame},
    stream::FrameStream,
};

/// Reads back to back RGB24 frames until the underlying reader is exhausted.
///
/// A partial frame at the end of the input stops the stream without an
/// error. It is kept observable through [`RawVideoDemuxer::incomplete_frame`].
pub struct RawVideoDemuxer<R> {
    reader: R,
    resolution: Resolution,
    frames_read: usize,
    incomplete: Option<usize>,
    is_consumed: bool,
}

impl<R: Read> RawVideoDemuxer<R> {
    pub fn new(reader: R, resolution: Resolution) -> Self {
        Self {
            reader,
            resolution,
            frames_read: 0,
            incomplete: None,
            is_consumed: false,
        }
    }

    pub fn frames_read(&self) -> usize {
        self.frames_read
    }

    /// The `IncompleteFrame` condition, if the input ended mid frame.
    pub fn incomplete_frame(&self) -> Option<CodecError> {
        self.incomplete.map(|available| CodecError::IncompleteFrame {
            expected: Rgb24.frame_size(self.resolution),
            available,
        })
    }

    pub fn ensure_complete(&self) -> Result<()> {
        match self.incomplete_frame() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fill(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let mut filled = 0;

        while filled < buffer.len() {
            match self.reader.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(filled)
    }
}

impl<R: Read> FrameStream for RawVideoDemuxer<R> {
    fn next_frame(&mut self) -> Result<Option<Rgb24Frame>> {
        if self.is_consumed {
            return Ok(None);
        }

        let frame_size = Rgb24.frame_size(self.resolution);
        let mut buffer = vec![0; frame_size];
        let filled = self.fill(&mut buffer)?;

        if filled < frame_size {
            self.is_consumed = true;

            if filled > 0 {
                warn!(
                    frames = self.frames_read,
                    available = filled,
                    expected = frame_size,
                    "input ended mid frame, dropping partial frame"
                );
                self.incomplete = Some(filled);
            }

            return Ok(None);
        }

        self.frames_read += 1;
        Rgb24Frame::new(self.resolution, buffer).map(Some)
    }

    fn resolution(&self) -> Resolution {
        self.resolution
    }
}
