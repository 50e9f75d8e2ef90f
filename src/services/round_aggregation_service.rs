/// Streaming aggregation of per-frame signals into round metrics.
///
/// The aggregator consumes one entry per source frame, in source order, and
/// keeps only running sums plus a Welford accumulator for head movement, so
/// a long round never has to be held in memory. Absent detections are part
/// of the normal stream, not failures.
use tracing::debug;

use crate::models::round_metrics::{FrameSignal, RoundMetrics};

/// A guard counts as down once the wrist sits this far below the shoulder.
/// Chosen so a jab extension does not trip it, only a genuinely dropped
/// hand.
pub const GUARD_DOWN_THRESHOLD: f32 = 0.15;

// Converts normalized horizontal hip separation to an approximate angle.
// Uncalibrated heuristic, kept for behavioral parity with earlier analyses.
const HIP_ROTATION_DEGREES_FACTOR: f64 = 180.0;

#[derive(Debug, Default)]
pub struct RoundAggregator {
    total_frames: u64,
    pose_frames: u64,
    guard_down_frames: u64,
    left_guard_sum: f64,
    right_guard_sum: f64,
    hip_rotation_sum: f64,
    stance_width_sum: f64,
    // Welford running mean/M2 over head_y.
    head_y_mean: f64,
    head_y_m2: f64,
}

impl RoundAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame of the round, in source order. `None` means the
    /// frame had no usable detection.
    pub fn observe(&mut self, signal: Option<&FrameSignal>) {
        self.total_frames += 1;
        if let Some(signal) = signal {
            self.observe_signal(signal);
        }
    }

    fn observe_signal(&mut self, signal: &FrameSignal) {
        self.pose_frames += 1;

        self.left_guard_sum += f64::from(signal.left_guard_height);
        self.right_guard_sum += f64::from(signal.right_guard_height);
        self.hip_rotation_sum += f64::from(signal.hip_rotation);
        self.stance_width_sum += f64::from(signal.stance_width);

        if signal.left_guard_height > GUARD_DOWN_THRESHOLD
            || signal.right_guard_height > GUARD_DOWN_THRESHOLD
        {
            self.guard_down_frames += 1;
        }

        let head_y = f64::from(signal.head_y);
        let delta = head_y - self.head_y_mean;
        self.head_y_mean += delta / self.pose_frames as f64;
        self.head_y_m2 += delta * (head_y - self.head_y_mean);
    }

    /// Finalize the round. Every ratio and average degrades to 0.0 rather
    /// than dividing by zero when the round had no frames or no detections.
    pub fn finish(self) -> RoundMetrics {
        let pose_coverage = if self.total_frames > 0 {
            self.pose_frames as f64 / self.total_frames as f64
        } else {
            0.0
        };

        let (guard_down_ratio, avg_left, avg_right, avg_hip, avg_stance) = if self.pose_frames > 0
        {
            let n = self.pose_frames as f64;
            (
                self.guard_down_frames as f64 / n,
                self.left_guard_sum / n,
                self.right_guard_sum / n,
                self.hip_rotation_sum / n,
                self.stance_width_sum / n,
            )
        } else {
            (0.0, 0.0, 0.0, 0.0, 0.0)
        };

        let head_movement_score = if self.pose_frames > 1 {
            (self.head_y_m2 / self.pose_frames as f64).sqrt()
        } else {
            0.0
        };

        debug!(
            total_frames = self.total_frames,
            pose_frames = self.pose_frames,
            pose_coverage,
            guard_down_ratio,
            "round aggregation complete"
        );

        RoundMetrics {
            total_frames: self.total_frames,
            pose_frames: self.pose_frames,
            pose_coverage,
            guard_down_ratio,
            avg_left_guard_height: avg_left,
            avg_right_guard_height: avg_right,
            avg_hip_rotation_degrees: avg_hip * HIP_ROTATION_DEGREES_FACTOR,
            avg_stance_width: avg_stance,
            head_movement_score,
        }
    }

    /// Aggregate a complete frame sequence in one call.
    pub fn aggregate<I>(frames: I) -> RoundMetrics
    where
        I: IntoIterator<Item = Option<FrameSignal>>,
    {
        let mut aggregator = Self::new();
        for signal in frames {
            aggregator.observe(signal.as_ref());
        }
        aggregator.finish()
    }
}
