use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sparring_coach::config::AppConfig;
use sparring_coach::services::{
    OnnxPoseDetector, VideoAnalysisService, VideoProcessingService,
};

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let video_path = std::env::args()
        .nth(1)
        .context("usage: sparring-coach <video-path>")?;

    let detector = OnnxPoseDetector::new(&config.pose_model_path)?;
    let mut service = VideoAnalysisService::new(detector).with_video_service(
        VideoProcessingService::with_paths(config.ffmpeg_path, config.ffprobe_path),
    );

    let analysis = service.assess(Path::new(&video_path))?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);

    Ok(())
}
