use serde::{Deserialize, Serialize};

/// Number of landmarks in the detector's full-body topology.
pub const POSE_LANDMARK_COUNT: usize = 33;

/// A single body keypoint.
///
/// `x` and `y` are normalized image coordinates in [0.0, 1.0], `z` is
/// relative depth with the hip midpoint as origin. `visibility` is the
/// detector's confidence in [0.0, 1.0] that the point is present and not
/// occluded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: f32,
}

/// The ordered landmark batch produced for one processed frame.
///
/// Transient: delivered once to the registered sink and discarded.
pub type LandmarkFrame = Vec<Landmark>;

/// Landmark indices for the 33-point body topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LandmarkIndex::Nose),
            1 => Ok(LandmarkIndex::LeftEyeInner),
            2 => Ok(LandmarkIndex::LeftEye),
            3 => Ok(LandmarkIndex::LeftEyeOuter),
            4 => Ok(LandmarkIndex::RightEyeInner),
            5 => Ok(LandmarkIndex::RightEye),
            6 => Ok(LandmarkIndex::RightEyeOuter),
            7 => Ok(LandmarkIndex::LeftEar),
            8 => Ok(LandmarkIndex::RightEar),
            9 => Ok(LandmarkIndex::MouthLeft),
            10 => Ok(LandmarkIndex::MouthRight),
            11 => Ok(LandmarkIndex::LeftShoulder),
            12 => Ok(LandmarkIndex::RightShoulder),
            13 => Ok(LandmarkIndex::LeftElbow),
            14 => Ok(LandmarkIndex::RightElbow),
            15 => Ok(LandmarkIndex::LeftWrist),
            16 => Ok(LandmarkIndex::RightWrist),
            17 => Ok(LandmarkIndex::LeftPinky),
            18 => Ok(LandmarkIndex::RightPinky),
            19 => Ok(LandmarkIndex::LeftIndex),
            20 => Ok(LandmarkIndex::RightIndex),
            21 => Ok(LandmarkIndex::LeftThumb),
            22 => Ok(LandmarkIndex::RightThumb),
            23 => Ok(LandmarkIndex::LeftHip),
            24 => Ok(LandmarkIndex::RightHip),
            25 => Ok(LandmarkIndex::LeftKnee),
            26 => Ok(LandmarkIndex::RightKnee),
            27 => Ok(LandmarkIndex::LeftAnkle),
            28 => Ok(LandmarkIndex::RightAnkle),
            29 => Ok(LandmarkIndex::LeftHeel),
            30 => Ok(LandmarkIndex::RightHeel),
            31 => Ok(LandmarkIndex::LeftFootIndex),
            32 => Ok(LandmarkIndex::RightFootIndex),
            _ => Err(format!(
                "Invalid landmark index: {}. Must be in range 0-32.",
                value
            )),
        }
    }
}
