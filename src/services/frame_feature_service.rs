/// Per-frame feature extraction from pose landmarks.
///
/// Converts raw landmark geometry into boxing-specific signals: guard height
/// per arm, hip rotation, stance width and head position. Pure arithmetic
/// with no side effects. Coordinates are taken as-is; degenerate values
/// (NaN) flow through into the aggregates rather than being rejected here.
use crate::models::keypoint::{LandmarkSet, PoseLandmark};
use crate::models::round_metrics::FrameSignal;

/// Derive the per-frame signals from one detected landmark set.
///
/// Only called for frames with a successful detection; a frame with no
/// subject produces no signal at all.
pub fn extract_frame_signal(landmarks: &LandmarkSet) -> FrameSignal {
    let left_shoulder = landmarks.get(PoseLandmark::LeftShoulder);
    let right_shoulder = landmarks.get(PoseLandmark::RightShoulder);
    let left_wrist = landmarks.get(PoseLandmark::LeftWrist);
    let right_wrist = landmarks.get(PoseLandmark::RightWrist);
    let left_hip = landmarks.get(PoseLandmark::LeftHip);
    let right_hip = landmarks.get(PoseLandmark::RightHip);
    let left_ankle = landmarks.get(PoseLandmark::LeftAnkle);
    let right_ankle = landmarks.get(PoseLandmark::RightAnkle);
    let nose = landmarks.get(PoseLandmark::Nose);

    // Wrist y relative to shoulder y: image y grows downward, so a lower
    // (more negative) value means the hands sit higher than the shoulders.
    let left_guard_height = left_wrist.y - left_shoulder.y;
    let right_guard_height = right_wrist.y - right_shoulder.y;

    FrameSignal {
        left_guard_height,
        right_guard_height,
        hip_rotation: (left_hip.x - right_hip.x).abs(),
        stance_width: (left_ankle.x - right_ankle.x).abs(),
        head_y: nose.y,
    }
}
