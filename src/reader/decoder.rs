//! Frame decoder - raw frame to tagged string.
//!
//! Wraps an external QR-detection library. A frame that yields no symbol is
//! decode noise, not an error; the capture loop simply moves on to the next
//! frame. This tolerates partial or blurry camera frames.

use super::source::RawFrame;

/// Decodes a raw visual frame into a tagged frame string.
pub trait FrameDecoder {
    /// Decode one frame. `None` means no symbol was found.
    fn decode(&mut self, frame: &RawFrame) -> Option<String>;
}

/// QR decoder backed by `rqrr`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrDecoder;

impl FrameDecoder for QrDecoder {
    fn decode(&mut self, frame: &RawFrame) -> Option<String> {
        let mut prepared = rqrr::PreparedImage::prepare(frame.clone());
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_meta, content)) if !content.is_empty() => return Some(content),
                Ok(_) => continue,
                Err(e) => {
                    tracing::trace!(error = ?e, "undecodable grid");
                    continue;
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::Writer;
    use image::GrayImage;

    #[test]
    fn test_decode_rendered_frame() {
        let frames = Writer::new().encode("round trip me").unwrap();
        let decoded = QrDecoder.decode(&frames[0].image).unwrap();
        assert_eq!(decoded, ">>>HEAD1 >>>IDX0 round trip me");
    }

    #[test]
    fn test_blank_frame_is_noise() {
        let blank = GrayImage::new(64, 64);
        assert_eq!(QrDecoder.decode(&blank), None);
    }
}
