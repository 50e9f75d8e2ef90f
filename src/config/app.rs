use anyhow::Result;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub pose_model_path: String,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub log_level: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let pose_model_path = env::var("POSE_MODEL_PATH")
            .unwrap_or_else(|_| "models/yolov8n-pose.onnx".to_string());
        let ffmpeg_path = env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string());
        let ffprobe_path = env::var("FFPROBE_PATH").unwrap_or_else(|_| "ffprobe".to_string());
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(AppConfig {
            pose_model_path,
            ffmpeg_path,
            ffprobe_path,
            log_level,
        })
    }
}
