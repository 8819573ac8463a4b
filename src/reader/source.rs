//! Frame sources - suppliers of raw visual frames.
//!
//! The capture loop does not care whether frames come from a camera, a
//! screen share, a still image, or a decomposed GIF. It only needs the pull
//! contract below: one raw frame on demand, or a signal that the source is
//! exhausted.

use std::collections::VecDeque;
use std::io::Cursor;

use bytes::Bytes;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, GrayImage};
use tokio::sync::mpsc;

use crate::error::Result;

/// A raw visual frame, grayscale raster.
pub type RawFrame = GrayImage;

/// Supplier of raw visual frames for one read operation.
///
/// `next_frame` returns `Ok(None)` when a bounded source has no more frames;
/// an unbounded source suspends until a frame is available. `release` frees
/// the underlying resource (stops a capture track, closes a channel), must be
/// idempotent, and is called exactly once per read operation by the capture
/// loop on every exit path.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Pull one raw frame, or signal exhaustion with `None`.
    async fn next_frame(&mut self) -> Result<Option<RawFrame>>;

    /// Release the underlying resource.
    fn release(&mut self) {}
}

/// Bounded source over a single still image.
#[derive(Debug)]
pub struct StillSource {
    frame: Option<RawFrame>,
}

impl StillSource {
    /// Create a source yielding the given frame once.
    pub fn new(frame: RawFrame) -> Self {
        Self { frame: Some(frame) }
    }

    /// Decode an image file (PNG, etc.) into a one-frame source.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::new(img.into_luma8()))
    }
}

impl FrameSource for StillSource {
    async fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        Ok(self.frame.take())
    }
}

/// Bounded source over a decomposed GIF's frame list.
#[derive(Debug)]
pub struct GifSource {
    frames: VecDeque<RawFrame>,
}

impl GifSource {
    /// Decompose a GIF file into its constituent frames.
    pub fn from_bytes(bytes: Bytes) -> Result<Self> {
        let decoder = GifDecoder::new(Cursor::new(bytes.as_ref()))?;
        let frames = decoder
            .into_frames()
            .collect_frames()?
            .into_iter()
            .map(|f| DynamicImage::ImageRgba8(f.into_buffer()).into_luma8())
            .collect::<VecDeque<_>>();

        tracing::debug!(frames = frames.len(), "decomposed GIF");

        Ok(Self { frames })
    }

    /// Wrap an already-decomposed frame list.
    pub fn from_frames(frames: Vec<RawFrame>) -> Self {
        Self {
            frames: frames.into(),
        }
    }

    /// Number of frames remaining.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check whether the source is already exhausted.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSource for GifSource {
    async fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        Ok(self.frames.pop_front())
    }
}

/// Unbounded source fed by a live capture track.
///
/// Platform capture code (camera, screen share) pushes frames into the
/// sending half; the capture loop pulls them one per tick. The source
/// exhausts when the channel closes with no frames left, and `release`
/// closes the channel so producers stop.
#[derive(Debug)]
pub struct TrackSource {
    rx: mpsc::Receiver<RawFrame>,
}

impl TrackSource {
    /// Wrap an existing frame channel.
    pub fn new(rx: mpsc::Receiver<RawFrame>) -> Self {
        Self { rx }
    }

    /// Create a channel-backed source with the given buffer capacity.
    pub fn channel(capacity: usize) -> (mpsc::Sender<RawFrame>, Self) {
        let (tx, rx) = mpsc::channel(capacity);
        (tx, Self::new(rx))
    }
}

impl FrameSource for TrackSource {
    async fn next_frame(&mut self) -> Result<Option<RawFrame>> {
        Ok(self.rx.recv().await)
    }

    fn release(&mut self) {
        self.rx.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> RawFrame {
        GrayImage::new(w, h)
    }

    #[tokio::test]
    async fn test_still_source_yields_once() {
        let mut source = StillSource::new(blank(8, 8));
        assert!(source.next_frame().await.unwrap().is_some());
        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_gif_source_yields_in_order() {
        let mut source = GifSource::from_frames(vec![blank(1, 1), blank(2, 2), blank(3, 3)]);
        assert_eq!(source.len(), 3);
        assert_eq!(source.next_frame().await.unwrap().unwrap().width(), 1);
        assert_eq!(source.next_frame().await.unwrap().unwrap().width(), 2);
        assert_eq!(source.next_frame().await.unwrap().unwrap().width(), 3);
        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_track_source_exhausts_on_close() {
        let (tx, mut source) = TrackSource::channel(4);
        tx.send(blank(4, 4)).await.unwrap();
        drop(tx);

        assert!(source.next_frame().await.unwrap().is_some());
        assert!(source.next_frame().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_track_source_release_is_idempotent() {
        let (_tx, mut source) = TrackSource::channel(1);
        source.release();
        source.release();
    }
}
