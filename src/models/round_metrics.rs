/// Round metrics models for the video analysis path.
///
/// A `FrameSignal` exists only for frames with a successful detection; the
/// aggregated `RoundMetrics` record covers the whole round and is immutable
/// once produced.
use serde::{Deserialize, Serialize};

/// Per-frame boxing signals derived from one landmark set.
///
/// All values are dimensionless ratios in normalized image coordinates, not
/// physical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSignal {
    /// Left wrist y minus left shoulder y. Negative or small = guard up.
    pub left_guard_height: f32,
    /// Right wrist y minus right shoulder y.
    pub right_guard_height: f32,
    /// Absolute horizontal hip separation.
    pub hip_rotation: f32,
    /// Absolute horizontal ankle separation.
    pub stance_width: f32,
    /// Nose y position.
    pub head_y: f32,
}

/// Round-level aggregate of the per-frame signals.
///
/// Averages are computed only over frames with a successful detection; with
/// zero detected frames every average, the movement score and
/// `guard_down_ratio` are 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundMetrics {
    /// Total frames in the source video.
    pub total_frames: u64,
    /// Frames where a pose was detected.
    pub pose_frames: u64,
    /// pose_frames / total_frames, 0.0 for an empty video.
    pub pose_coverage: f64,
    /// Fraction of detected frames where either guard height exceeded the
    /// guard-down threshold.
    pub guard_down_ratio: f64,
    pub avg_left_guard_height: f64,
    pub avg_right_guard_height: f64,
    /// Average hip rotation scaled from normalized distance to an
    /// approximate angle. Rough heuristic, not a calibrated camera
    /// transform; do not read physical precision into it.
    pub avg_hip_rotation_degrees: f64,
    pub avg_stance_width: f64,
    /// Population standard deviation of head y across detected frames.
    /// Higher = more head movement. 0.0 with one or fewer detected frames.
    pub head_movement_score: f64,
}
