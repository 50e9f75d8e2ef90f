pub mod assessment;
pub mod keypoint;
pub mod manual_round;
pub mod round_metrics;

pub use assessment::{
    ManualAssessment, RoundAnalysis, StrategyTier, TrainingFocus, VideoAssessment,
};
pub use keypoint::{Landmark, LandmarkSet, PoseLandmark, LANDMARK_COUNT};
pub use manual_round::ManualRound;
pub use round_metrics::{FrameSignal, RoundMetrics};
