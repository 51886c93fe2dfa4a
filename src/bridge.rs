use std::sync::{Arc, RwLock};

use log::{debug, error, info, warn};
use tokio::sync::oneshot;

use crate::config::{CaptureConfig, PoseConfig};
use crate::error::BridgeError;
use crate::landmarks::LandmarkFrame;
use crate::traits::{DetectorBackend, FrameSource, PoseDetector, SurfaceProvider};

/// Host callback invoked with each frame's landmark batch.
pub type LandmarkSink = Box<dyn Fn(LandmarkFrame) + Send + Sync>;

type SharedSink = Arc<RwLock<Option<LandmarkSink>>>;

/// Session state. The detector and frame source live inside the pipeline
/// task, so `Running` holds only the teardown signal.
enum BridgeState {
    Idle,
    Running { stop_tx: oneshot::Sender<()> },
}

/// Start/stop adapter binding a pose-detection backend to a video surface.
///
/// At most one session is active at a time. `start` resolves the surface,
/// opens a detector through the backend, and spawns a pipeline task that
/// alternates frame capture and detection one frame at a time; `stop`
/// signals teardown and returns immediately.
///
/// Landmark batches are forwarded to the registered sink unmodified; frames
/// in which the detector finds no body are dropped silently.
pub struct PoseBridge {
    surfaces: Box<dyn SurfaceProvider>,
    backend: Box<dyn DetectorBackend>,
    pose_config: PoseConfig,
    capture_config: CaptureConfig,
    sink: SharedSink,
    state: BridgeState,
}

impl PoseBridge {
    /// Create a bridge with default pose and capture configuration.
    pub fn new(surfaces: Box<dyn SurfaceProvider>, backend: Box<dyn DetectorBackend>) -> Self {
        Self {
            surfaces,
            backend,
            pose_config: PoseConfig::default(),
            capture_config: CaptureConfig::default(),
            sink: Arc::new(RwLock::new(None)),
            state: BridgeState::Idle,
        }
    }

    /// Set the detector configuration used for subsequent starts.
    pub fn with_pose_config(mut self, config: PoseConfig) -> Self {
        self.pose_config = config;
        self
    }

    /// Set the capture configuration used for subsequent starts.
    pub fn with_capture_config(mut self, config: CaptureConfig) -> Self {
        self.capture_config = config;
        self
    }

    /// Register the host sink that receives landmark batches.
    ///
    /// The sink slot is shared with the running pipeline, so a sink
    /// registered after `start` still receives batches for frames processed
    /// from that point on.
    pub fn set_landmark_sink(&self, sink: impl Fn(LandmarkFrame) + Send + Sync + 'static) {
        let mut slot = self.sink.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(Box::new(sink));
    }

    /// Remove the registered sink. Later batches are dropped.
    pub fn clear_landmark_sink(&self) {
        let mut slot = self.sink.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Whether a session is currently active.
    pub fn is_running(&self) -> bool {
        matches!(self.state, BridgeState::Running { .. })
    }

    /// Start a pose session on the given video surface.
    ///
    /// Returns immediately after spawning the pipeline task; frame
    /// processing happens asynchronously. Must be called from within a
    /// tokio runtime.
    ///
    /// A start while a session is active is a no-op. An unknown surface id
    /// is logged and aborts the start without creating any handles; only
    /// backend failures surface as errors.
    pub fn start(&mut self, surface_id: &str) -> Result<(), BridgeError> {
        if let BridgeState::Running { .. } = self.state {
            debug!("pose session already active, ignoring start");
            return Ok(());
        }

        let Some(source) = self.surfaces.open(surface_id, &self.capture_config) else {
            error!("video surface not found: {surface_id}");
            return Ok(());
        };

        let detector = self.backend.open(&self.pose_config)?;

        let (stop_tx, stop_rx) = oneshot::channel();
        tokio::spawn(run_session(source, detector, Arc::clone(&self.sink), stop_rx));

        self.state = BridgeState::Running { stop_tx };
        info!("pose session started on surface {surface_id}");
        Ok(())
    }

    /// Stop the active session, if any.
    ///
    /// Signals the pipeline task and returns without waiting for it. An
    /// in-flight detection is cancelled at its next await point and its
    /// result discarded; the task releases the detector on its way out.
    pub fn stop(&mut self) {
        match std::mem::replace(&mut self.state, BridgeState::Idle) {
            BridgeState::Running { stop_tx } => {
                drop(stop_tx);
                info!("pose session stopped");
            }
            BridgeState::Idle => {
                debug!("stop with no active pose session, ignoring");
            }
        }
    }
}

/// Pipeline task: alternate frame capture and detection until told to stop.
///
/// Capture and detection are strictly sequential; the next frame is not
/// requested until the current one has finished processing, so the frame
/// channel itself provides backpressure. Dropping the bridge closes
/// `stop_rx` and tears the session down the same way `stop` does.
async fn run_session(
    mut source: Box<dyn FrameSource>,
    mut detector: Box<dyn PoseDetector>,
    sink: SharedSink,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        let frame = tokio::select! {
            biased;
            _ = &mut stop_rx => break,
            frame = source.recv() => frame,
        };

        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                warn!("frame source ended: {e}");
                break;
            }
        };

        let result = tokio::select! {
            biased;
            _ = &mut stop_rx => break,
            result = detector.detect(&frame) => result,
        };

        match result {
            Ok(Some(landmarks)) => {
                let slot = sink.read().unwrap_or_else(|e| e.into_inner());
                if let Some(sink) = slot.as_ref() {
                    sink(landmarks);
                }
            }
            // No body in this frame: drop it without notifying the sink.
            Ok(None) => {}
            Err(e) => warn!("pose detection failed: {e}"),
        }
    }

    detector.close().await;
}
