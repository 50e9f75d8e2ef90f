/// Whole-round video analysis.
///
/// Drives the pipeline end to end: frame stream -> pose detector -> feature
/// extraction -> round aggregation, strictly in source order, one frame at a
/// time. Batch analysis of a finished round, not a live feed.
use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::AnalysisError;
use crate::models::assessment::RoundAnalysis;
use crate::models::round_metrics::RoundMetrics;
use crate::services::frame_feature_service::extract_frame_signal;
use crate::services::narrative_service::compose_narrative;
use crate::services::pose_estimation_service::PoseDetector;
use crate::services::risk_scoring_service::assess_video;
use crate::services::round_aggregation_service::RoundAggregator;
use crate::services::video_processing_service::VideoProcessingService;

/// Service for analyzing one round video at a time.
///
/// Owns its detector; run several instances for parallel rounds. Processing
/// within a round is synchronous and ordered because the aggregate
/// statistics depend on seeing every frame exactly once.
pub struct VideoAnalysisService<D: PoseDetector> {
    video: VideoProcessingService,
    detector: D,
}

impl<D: PoseDetector> VideoAnalysisService<D> {
    pub fn new(detector: D) -> Self {
        Self {
            video: VideoProcessingService::new(),
            detector,
        }
    }

    /// Use a video service with non-default FFmpeg paths.
    pub fn with_video_service(mut self, video: VideoProcessingService) -> Self {
        self.video = video;
        self
    }

    /// Analyze a round video into its metrics record.
    ///
    /// Failing to open the video is fatal and returns before any frame is
    /// processed. Frames without a detection, frames that fail to decode
    /// and per-frame inference errors all contribute an absent signal and
    /// never abort the round.
    pub fn analyze(&mut self, video_path: &Path) -> Result<RoundMetrics, AnalysisError> {
        let frames = self.video.open_frames(video_path)?;

        let mut aggregator = RoundAggregator::new();
        for (frame_index, image) in frames.enumerate() {
            let signal = match image {
                Some(image) => match self.detector.detect(&image) {
                    Ok(Some(landmarks)) => Some(extract_frame_signal(&landmarks)),
                    Ok(None) => None,
                    Err(e) => {
                        warn!(frame = frame_index, error = %e, "pose inference failed for frame");
                        None
                    }
                },
                None => None,
            };
            aggregator.observe(signal.as_ref());
        }

        let metrics = aggregator.finish();
        info!(
            path = %video_path.display(),
            total_frames = metrics.total_frames,
            pose_frames = metrics.pose_frames,
            pose_coverage = metrics.pose_coverage,
            guard_down_ratio = metrics.guard_down_ratio,
            "round video analyzed"
        );

        Ok(metrics)
    }

    /// Analyze, score and narrate a round into a complete report.
    pub fn assess(&mut self, video_path: &Path) -> Result<RoundAnalysis, AnalysisError> {
        let metrics = self.analyze(video_path)?;
        let assessment = assess_video(&metrics);
        let narrative =
            compose_narrative(&metrics, assessment.danger_score, assessment.strategy.text());

        Ok(RoundAnalysis {
            id: Uuid::new_v4(),
            video_path: video_path.display().to_string(),
            metrics,
            assessment,
            narrative,
            analyzed_at: Utc::now(),
        })
    }
}
