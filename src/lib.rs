//! Sparring round analysis core.
//!
//! Logs sparring-round performance, derives a normalized danger score and
//! recommends a coaching strategy. Two inputs feed the same scoring engine:
//! manually entered per-round ratings, and metrics extracted from a video of
//! the round via per-frame body-pose estimation.
//!
//! The video path is a batch pipeline over a finished round: frame
//! ingestion, per-frame feature extraction from pose landmarks, streaming
//! round-level aggregation that tolerates partial tracking failure, then
//! scoring, strategy classification and a deterministic coaching narrative.
//! HTTP, authentication and persistence live outside this crate.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AppConfig;
pub use error::AnalysisError;
pub use models::{
    FrameSignal, Landmark, LandmarkSet, ManualAssessment, ManualRound, PoseLandmark,
    RoundAnalysis, RoundMetrics, StrategyTier, TrainingFocus, VideoAssessment,
};
pub use services::{
    assess_manual, assess_video, compose_narrative, extract_frame_signal, score_manual,
    score_video, OnnxPoseDetector, PoseDetector, RoundAggregator, VideoAnalysisService,
    VideoProcessingService, VideoScore,
};
