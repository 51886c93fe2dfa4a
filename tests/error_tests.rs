use pose_bridge::BridgeError;

#[test]
fn test_error_display() {
    let err = BridgeError::Detector("model load failed".to_string());
    assert_eq!(err.to_string(), "detector error: model load failed");

    let err = BridgeError::Capture("surface gone".to_string());
    assert_eq!(err.to_string(), "capture error: surface gone");

    let err = BridgeError::Channel("frame channel closed".to_string());
    assert_eq!(err.to_string(), "channel error: frame channel closed");
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}

    let err = BridgeError::Detector("x".to_string());
    assert_error(&err);
}
