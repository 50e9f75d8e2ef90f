pub mod frame_feature_service;
pub mod narrative_service;
pub mod pose_estimation_service;
pub mod risk_scoring_service;
pub mod round_aggregation_service;
pub mod video_analysis_service;
pub mod video_processing_service;

pub use frame_feature_service::extract_frame_signal;
pub use narrative_service::compose_narrative;
pub use pose_estimation_service::{OnnxPoseDetector, PoseDetector};
pub use risk_scoring_service::{assess_manual, assess_video, score_manual, score_video, VideoScore};
pub use round_aggregation_service::{RoundAggregator, GUARD_DOWN_THRESHOLD};
pub use video_analysis_service::VideoAnalysisService;
pub use video_processing_service::{FrameStream, VideoInfo, VideoProcessingService};
