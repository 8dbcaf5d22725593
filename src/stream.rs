use crate::{error::Result, image::Resolution, pixel_formats::Rgb24Frame};

pub trait FrameStream {
    /// `Ok(None)` once the stream has no further whole frames.
    fn next_frame(&mut self) -> Result<Option<Rgb24Frame>>;
    fn resolution(&self) -> Resolution;

    fn collect_frames(&mut self) -> Result<Vec<Rgb24Frame>> {
        let mut frames = Vec::new();

        while let Some(frame) = self.next_frame()? {
            frames.push(frame);
        }

        Ok(frames)
    }
}
