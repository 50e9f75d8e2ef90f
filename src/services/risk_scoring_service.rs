/// Risk and form scoring for sparring rounds.
///
/// Two modes feed the same strategy table: manually entered ratings and
/// video-derived round metrics. Both are pure functions of their record;
/// identical input always yields identical scores.
use serde::{Deserialize, Serialize};

use crate::models::assessment::{ManualAssessment, StrategyTier, TrainingFocus, VideoAssessment};
use crate::models::manual_round::ManualRound;
use crate::models::round_metrics::RoundMetrics;

/// Scores produced by the video mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoScore {
    pub danger_score: f64,
    pub form_score: f64,
    pub focus_next_round: TrainingFocus,
}

/// Danger score for a manually logged round.
///
/// Weighted blend of clean shots taken (over a 5-shot reference), inverted
/// defense and inverted ring control, clamped to [0, 1]. Counts above 5
/// clean shots push the blend past 1.0 before the clamp, so extreme rounds
/// saturate at maximum danger instead of scaling further.
pub fn score_manual(round: &ManualRound) -> f64 {
    let clean = f64::from(round.clean_shots_taken) / 5.0;
    let defense = (10.0 - round.defense_score) / 10.0;
    let control = (10.0 - round.ring_control_score) / 10.0;
    (0.5 * clean + 0.3 * defense + 0.2 * control).clamp(0.0, 1.0)
}

/// Danger, form and training focus for a video-analyzed round.
///
/// Low pose coverage alone can push danger toward 0.4 even with a perfect
/// guard; tracking quality and guard discipline are deliberately conflated
/// into the one risk signal.
pub fn score_video(metrics: &RoundMetrics) -> VideoScore {
    let danger_score =
        (0.6 * metrics.guard_down_ratio + 0.4 * (1.0 - metrics.pose_coverage)).clamp(0.0, 1.0);

    let form_score = (10.0
        - metrics.guard_down_ratio * 5.0
        - (1.0 - metrics.pose_coverage) * 2.0)
        .clamp(0.0, 10.0);

    VideoScore {
        danger_score,
        form_score,
        focus_next_round: TrainingFocus::from_danger_score(danger_score),
    }
}

/// Score a manual round and attach its strategy tier.
pub fn assess_manual(round: &ManualRound) -> ManualAssessment {
    let danger_score = score_manual(round);
    ManualAssessment {
        danger_score,
        strategy: StrategyTier::from_danger_score(danger_score),
    }
}

/// Score a video round and attach its strategy tier.
pub fn assess_video(metrics: &RoundMetrics) -> VideoAssessment {
    let score = score_video(metrics);
    VideoAssessment {
        danger_score: score.danger_score,
        form_score: score.form_score,
        focus_next_round: score.focus_next_round,
        strategy: StrategyTier::from_danger_score(score.danger_score),
    }
}
