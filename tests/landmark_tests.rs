use pose_bridge::{Landmark, LandmarkIndex, POSE_LANDMARK_COUNT};

#[test]
fn test_landmark_count() {
    assert_eq!(POSE_LANDMARK_COUNT, 33);
}

#[test]
fn test_index_to_usize() {
    assert_eq!(usize::from(LandmarkIndex::Nose), 0);
    assert_eq!(usize::from(LandmarkIndex::LeftShoulder), 11);
    assert_eq!(usize::from(LandmarkIndex::RightWrist), 16);
    assert_eq!(usize::from(LandmarkIndex::RightFootIndex), 32);
}

#[test]
fn test_usize_to_index() {
    assert_eq!(LandmarkIndex::try_from(0).unwrap(), LandmarkIndex::Nose);
    assert_eq!(
        LandmarkIndex::try_from(23).unwrap(),
        LandmarkIndex::LeftHip
    );
    assert_eq!(
        LandmarkIndex::try_from(32).unwrap(),
        LandmarkIndex::RightFootIndex
    );
}

#[test]
fn test_index_roundtrip() {
    for i in 0..POSE_LANDMARK_COUNT {
        let index = LandmarkIndex::try_from(i).unwrap();
        assert_eq!(usize::from(index), i);
    }
}

#[test]
fn test_out_of_range_index_rejected() {
    assert!(LandmarkIndex::try_from(33).is_err());
    assert!(LandmarkIndex::try_from(usize::MAX).is_err());
}

#[test]
fn test_landmark_serde_shape() {
    let landmark = Landmark {
        x: 0.25,
        y: 0.5,
        z: -0.125,
        visibility: 0.875,
    };

    let json = serde_json::to_value(&landmark).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "x": 0.25,
            "y": 0.5,
            "z": -0.125,
            "visibility": 0.875,
        })
    );
}
