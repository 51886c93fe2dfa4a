//! Start/stop adapter around an external real-time body pose detector.
//!
//! This crate provides a `PoseBridge` that binds a pose-detection backend
//! to a video surface supplied by the host, runs a backpressured
//! capture/detect loop, and forwards each frame's landmark batch to a
//! host-registered sink. Frame capture and pose estimation themselves are
//! behind the `FrameSource` and `DetectorBackend` traits, so hosts plug in
//! whatever camera helper and detection library they embed.

pub mod bridge;
pub mod config;
pub mod error;
pub mod landmarks;
pub mod surface;
pub mod traits;

pub use bridge::{LandmarkSink, PoseBridge};
pub use config::{CaptureConfig, ModelComplexity, PoseConfig};
pub use error::BridgeError;
pub use landmarks::{Landmark, LandmarkFrame, LandmarkIndex, POSE_LANDMARK_COUNT};
pub use surface::{ChannelSource, FrameSender, SurfaceRegistry};
pub use traits::{DetectorBackend, FrameSource, PoseDetector, SurfaceProvider, VideoFrame};
