/// Scored round assessments and the strategy tier table.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::round_metrics::RoundMetrics;

/// Training priority for the next round, video path only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingFocus {
    DefenseFirst,
    RingCutting,
    PressureAndBody,
}

impl TrainingFocus {
    /// Select the focus label for a danger score. Thresholds are inclusive:
    /// a score exactly at a boundary belongs to the higher-risk tier.
    pub fn from_danger_score(danger_score: f64) -> Self {
        if danger_score >= 0.7 {
            Self::DefenseFirst
        } else if danger_score >= 0.4 {
            Self::RingCutting
        } else {
            Self::PressureAndBody
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DefenseFirst => "defense_first",
            Self::RingCutting => "ring_cutting",
            Self::PressureAndBody => "pressure_and_body",
        }
    }
}

/// One of three fixed coaching directives selected by danger score.
///
/// This table is the single source of truth for strategy selection; both the
/// manual and the video scoring paths classify through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyTier {
    DefenseFirst,
    RingCutting,
    PressureBody,
}

impl StrategyTier {
    /// Classify a danger score into its strategy tier.
    ///
    /// Tier boundaries are inclusive on the lower bound: 0.7 is
    /// DEFENSE_FIRST, 0.4 is RING_CUTTING. The table is total over [0, 1];
    /// an out-of-range score reaching this point means an upstream clamp
    /// bug.
    pub fn from_danger_score(danger_score: f64) -> Self {
        debug_assert!(
            (0.0..=1.0).contains(&danger_score),
            "danger score {danger_score} escaped its clamp"
        );
        if danger_score >= 0.7 {
            Self::DefenseFirst
        } else if danger_score >= 0.4 {
            Self::RingCutting
        } else {
            Self::PressureBody
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::DefenseFirst => "DEFENSE_FIRST",
            Self::RingCutting => "RING_CUTTING",
            Self::PressureBody => "PRESSURE_BODY",
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::DefenseFirst => {
                "High guard, active feet. Max 2-punch combos. Pump the jab, angle off. Do not trade."
            }
            Self::RingCutting => {
                "Smart pressure. Cut exits, feint to draw counters. No ego wars. Control space."
            }
            Self::PressureBody => {
                "Walk him down. Invest in the body and arms. Bully, clinch, drown him."
            }
        }
    }
}

/// Scored result for a manually logged round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManualAssessment {
    pub danger_score: f64,
    pub strategy: StrategyTier,
}

/// Scored result for a video-analyzed round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VideoAssessment {
    pub danger_score: f64,
    /// Form quality in [0, 10], inverse-related to guard drops and
    /// tracking loss.
    pub form_score: f64,
    pub focus_next_round: TrainingFocus,
    pub strategy: StrategyTier,
}

/// Complete report for one analyzed video round.
///
/// Produced once per analysis and never mutated; re-analyzing a round makes
/// a new report with a new id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundAnalysis {
    pub id: Uuid,
    pub video_path: String,
    pub metrics: RoundMetrics,
    pub assessment: VideoAssessment,
    pub narrative: String,
    pub analyzed_at: DateTime<Utc>,
}
