use pose_bridge::{
    BridgeError, CaptureConfig, FrameSource, SurfaceProvider, SurfaceRegistry, VideoFrame,
};

fn frame(val: u8) -> VideoFrame {
    VideoFrame {
        width: 2,
        height: 2,
        data: vec![val; 12],
    }
}

#[test]
fn test_registry_resolves_registered_id() {
    let registry = SurfaceRegistry::new();
    let _tx = registry.register("video0");

    assert!(registry.open("video0", &CaptureConfig::default()).is_some());
}

#[test]
fn test_registry_unknown_id_resolves_to_none() {
    let registry = SurfaceRegistry::new();

    assert!(registry.open("video0", &CaptureConfig::default()).is_none());
}

#[test]
fn test_registry_unregister_removes_surface() {
    let registry = SurfaceRegistry::new();
    let _tx = registry.register("video0");
    registry.unregister("video0");

    assert!(registry.open("video0", &CaptureConfig::default()).is_none());
}

#[tokio::test]
async fn test_channel_source_delivers_pushed_frames_in_order() {
    let registry = SurfaceRegistry::new();
    let tx = registry.register("video0");
    let mut source = registry.open("video0", &CaptureConfig::default()).unwrap();

    tx.send(frame(1)).await.unwrap();
    let first = source.recv().await.unwrap();
    assert_eq!(first, frame(1));

    tx.send(frame(2)).await.unwrap();
    let second = source.recv().await.unwrap();
    assert_eq!(second, frame(2));
}

#[tokio::test]
async fn test_channel_source_errors_when_sender_dropped() {
    let registry = SurfaceRegistry::new();
    let tx = registry.register("video0");
    let mut source = registry.open("video0", &CaptureConfig::default()).unwrap();

    drop(tx);

    let err = source.recv().await.unwrap_err();
    assert!(matches!(err, BridgeError::Channel(_)));
}

#[tokio::test]
async fn test_frame_channel_holds_at_most_one_frame() {
    let registry = SurfaceRegistry::new();
    let tx = registry.register("video0");

    // Capacity 1: with nothing consuming, the second push must not be
    // accepted. This is the non-overlapping capture/detect contract.
    tx.try_send(frame(1)).unwrap();
    assert!(tx.try_send(frame(2)).is_err());
}

#[tokio::test]
async fn test_reopen_after_drop_reads_same_channel() {
    let registry = SurfaceRegistry::new();
    let tx = registry.register("video0");

    let source = registry.open("video0", &CaptureConfig::default()).unwrap();
    drop(source);

    // A session restart opens the surface again and keeps receiving.
    let mut source = registry.open("video0", &CaptureConfig::default()).unwrap();
    tx.send(frame(7)).await.unwrap();
    assert_eq!(source.recv().await.unwrap(), frame(7));
}
