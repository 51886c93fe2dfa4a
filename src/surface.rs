use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::sync::Mutex as AsyncMutex;

use crate::config::CaptureConfig;
use crate::error::BridgeError;
use crate::traits::{FrameSource, SurfaceProvider, VideoFrame};

/// Host-side handle for pushing captured frames into a registered surface.
///
/// The channel is bounded to a single frame: `send` on this handle resolves
/// only once the pipeline has picked up the previous frame, which is what
/// keeps capture and detection non-overlapping.
pub type FrameSender = mpsc::Sender<VideoFrame>;

type SharedReceiver = Arc<AsyncMutex<mpsc::Receiver<VideoFrame>>>;

/// Default `SurfaceProvider`: an id-keyed registry of frame channels.
///
/// The host registers each renderable video surface under a string id
/// before starting the bridge, and feeds frames through the returned
/// `FrameSender`. The receiver side is shared, so a surface survives
/// stop/start cycles without re-registration.
#[derive(Default)]
pub struct SurfaceRegistry {
    surfaces: Mutex<HashMap<String, SharedReceiver>>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface id and get the sender the host feeds frames into.
    ///
    /// Registering an id that already exists replaces the old channel;
    /// the previous sender then reports closure on its next send.
    pub fn register(&self, surface_id: &str) -> FrameSender {
        let (tx, rx) = mpsc::channel(1);
        let mut surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
        surfaces.insert(surface_id.to_string(), Arc::new(AsyncMutex::new(rx)));
        tx
    }

    /// Remove a surface id. Subsequent `open` calls for it resolve to nothing.
    pub fn unregister(&self, surface_id: &str) {
        let mut surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
        surfaces.remove(surface_id);
    }
}

impl SurfaceProvider for SurfaceRegistry {
    fn open(&self, surface_id: &str, _config: &CaptureConfig) -> Option<Box<dyn FrameSource>> {
        let surfaces = self.surfaces.lock().unwrap_or_else(|e| e.into_inner());
        let receiver = surfaces.get(surface_id)?.clone();
        Some(Box::new(ChannelSource { receiver }))
    }
}

/// `FrameSource` reading from a registered surface's frame channel.
pub struct ChannelSource {
    receiver: SharedReceiver,
}

#[async_trait]
impl FrameSource for ChannelSource {
    async fn recv(&mut self) -> Result<VideoFrame, BridgeError> {
        let mut receiver = self.receiver.lock().await;
        receiver
            .recv()
            .await
            .ok_or_else(|| BridgeError::Channel("frame channel closed".to_string()))
    }
}
