//! GIF animation composition.
//!
//! Thin adapter over the `image` crate's GIF encoder. Frames are expected to
//! share identical dimensions, which the writer's version normalization
//! guarantees.

use std::io::Cursor;

use bytes::Bytes;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame};

use crate::error::Result;

use super::EncodedFrame;

/// Compose rendered frames into an infinitely looping GIF.
///
/// `frame_delay_ms` is the playback delay per frame. An empty frame slice
/// yields empty bytes.
pub fn compose_gif(frames: &[EncodedFrame], frame_delay_ms: u32) -> Result<Bytes> {
    if frames.is_empty() {
        return Ok(Bytes::new());
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buf, 10);
        encoder.set_repeat(Repeat::Infinite)?;

        for frame in frames {
            let rgba = DynamicImage::ImageLuma8(frame.image.clone()).to_rgba8();
            let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
            encoder.encode_frame(Frame::from_parts(rgba, 0, 0, delay))?;
        }
    }

    tracing::debug!(frames = frames.len(), bytes = buf.get_ref().len(), "composed GIF");

    Ok(Bytes::from(buf.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;

    #[test]
    fn test_compose_empty() {
        let gif = compose_gif(&[], 100).unwrap();
        assert!(gif.is_empty());
    }

    #[test]
    fn test_compose_has_gif_signature() {
        let frames = Writer::new().encode("hello").unwrap();
        let gif = compose_gif(&frames, 100).unwrap();
        assert!(gif.starts_with(b"GIF8"));
    }
}
