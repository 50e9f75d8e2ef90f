/// Manually logged sparring round.
use serde::{Deserialize, Serialize};

/// User-supplied per-round ratings.
///
/// Rating fields are expected in [0, 10]; the scoring formula does not cap
/// `clean_shots_taken`, so extreme counts saturate the danger score at its
/// final clamp rather than scaling further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualRound {
    pub pressure_score: f64,
    pub ring_control_score: f64,
    pub defense_score: f64,
    pub clean_shots_taken: u32,
    /// Free-text notes from the fighter or coach.
    #[serde(default)]
    pub notes: String,
}
