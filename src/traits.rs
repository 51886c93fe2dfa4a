use async_trait::async_trait;

use crate::config::{CaptureConfig, PoseConfig};
use crate::error::BridgeError;
use crate::landmarks::LandmarkFrame;

/// A captured video frame as raw RGB pixels in HWC layout.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    /// RGB24 pixel data, `width * height * 3` bytes.
    pub data: Vec<u8>,
}

/// Async source of captured frames.
///
/// One frame per `recv` call; the caller's pace is the producer's
/// backpressure, so a source never runs ahead of its consumer.
#[async_trait]
pub trait FrameSource: Send {
    /// Receive the next frame from the surface.
    async fn recv(&mut self) -> Result<VideoFrame, BridgeError>;
}

/// A running pose-detection session.
#[async_trait]
pub trait PoseDetector: Send {
    /// Run detection on one frame.
    ///
    /// Returns `Ok(Some(..))` with the ordered landmark batch when a body
    /// was found, `Ok(None)` when the frame contains no detectable body.
    async fn detect(&mut self, frame: &VideoFrame) -> Result<Option<LandmarkFrame>, BridgeError>;

    /// Release the session's underlying resources (loaded models,
    /// inference state). Called exactly once, at teardown.
    async fn close(&mut self);
}

/// Factory for pose-detection sessions.
///
/// Each bridge start opens a fresh session through this seam, so backends
/// decide how model loading and asset fetching work.
pub trait DetectorBackend: Send + Sync {
    fn open(&self, config: &PoseConfig) -> Result<Box<dyn PoseDetector>, BridgeError>;
}

/// Resolves a video surface id to a frame source.
///
/// Returns `None` when no surface with that id exists; the bridge treats
/// that as a logged, non-fatal start abort.
pub trait SurfaceProvider: Send + Sync {
    fn open(&self, surface_id: &str, config: &CaptureConfig) -> Option<Box<dyn FrameSource>>;
}
