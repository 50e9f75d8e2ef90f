/// Pose landmark models shared by the detector and the feature extractor.
use serde::{Deserialize, Serialize};

/// Number of keypoints produced by COCO-format pose models.
pub const LANDMARK_COUNT: usize = 17;

/// COCO keypoint indices, in model output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseLandmark {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl PoseLandmark {
    /// Stable snake_case name for this landmark.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEye => "left_eye",
            Self::RightEye => "right_eye",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// All landmarks in model output order.
    pub fn all() -> [Self; LANDMARK_COUNT] {
        [
            Self::Nose,
            Self::LeftEye,
            Self::RightEye,
            Self::LeftEar,
            Self::RightEar,
            Self::LeftShoulder,
            Self::RightShoulder,
            Self::LeftElbow,
            Self::RightElbow,
            Self::LeftWrist,
            Self::RightWrist,
            Self::LeftHip,
            Self::RightHip,
            Self::LeftKnee,
            Self::RightKnee,
            Self::LeftAnkle,
            Self::RightAnkle,
        ]
    }
}

/// A single anatomical point in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// X coordinate, normalized to [0, 1]
    pub x: f32,
    /// Y coordinate, normalized to [0, 1]
    pub y: f32,
    /// Detection confidence (0-1)
    pub confidence: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, confidence: f32) -> Self {
        Self { x, y, confidence }
    }
}

/// All 17 landmarks for one detected frame.
///
/// The fixed layout guarantees every named landmark the feature extractor
/// reads is present. A frame where no subject was detected has no
/// `LandmarkSet` at all; absence is modeled upstream, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkSet {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Look up one landmark by name.
    pub fn get(&self, landmark: PoseLandmark) -> Landmark {
        self.points[landmark as usize]
    }

    pub fn points(&self) -> &[Landmark] {
        &self.points
    }

    /// Minimum detection confidence across all landmarks.
    pub fn min_confidence(&self) -> f32 {
        self.points
            .iter()
            .map(|p| p.confidence)
            .fold(f32::INFINITY, f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform_set(x: f32, y: f32) -> LandmarkSet {
        LandmarkSet::new([Landmark::new(x, y, 0.9); LANDMARK_COUNT])
    }

    #[test]
    fn test_landmark_names() {
        assert_eq!(PoseLandmark::Nose.name(), "nose");
        assert_eq!(PoseLandmark::LeftShoulder.name(), "left_shoulder");
        assert_eq!(PoseLandmark::RightAnkle.name(), "right_ankle");
    }

    #[test]
    fn test_all_landmarks_ordered() {
        let all = PoseLandmark::all();
        assert_eq!(all.len(), LANDMARK_COUNT);
        for (idx, lm) in all.iter().enumerate() {
            assert_eq!(*lm as usize, idx);
        }
    }

    #[test]
    fn test_get_by_name() {
        let mut points = [Landmark::new(0.5, 0.5, 0.9); LANDMARK_COUNT];
        points[PoseLandmark::Nose as usize] = Landmark::new(0.4, 0.2, 0.95);
        let set = LandmarkSet::new(points);
        let nose = set.get(PoseLandmark::Nose);
        assert_eq!(nose.x, 0.4);
        assert_eq!(nose.y, 0.2);
    }

    #[test]
    fn test_min_confidence() {
        let mut points = [Landmark::new(0.5, 0.5, 0.9); LANDMARK_COUNT];
        points[3] = Landmark::new(0.5, 0.5, 0.21);
        let set = LandmarkSet::new(points);
        assert!((set.min_confidence() - 0.21).abs() < 1e-6);
        assert!(uniform_set(0.5, 0.5).min_confidence() > 0.8);
    }
}
