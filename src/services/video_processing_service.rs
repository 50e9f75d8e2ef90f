/// Video ingestion via FFmpeg.
///
/// `ffprobe` describes and validates the input; `ffmpeg` decodes the round
/// into per-frame JPEGs inside a scratch directory owned by the returned
/// stream. A source that cannot be opened is fatal before any frame is
/// processed. A single frame that later fails to decode is a soft failure:
/// the stream yields an absent image for that index and keeps going.
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use image::DynamicImage;
use tempfile::TempDir;
use tracing::{info, warn};

use crate::error::AnalysisError;

/// Service for probing and decoding round videos.
pub struct VideoProcessingService {
    ffmpeg_path: String,
    ffprobe_path: String,
}

impl VideoProcessingService {
    pub fn new() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
        }
    }

    /// Create service with custom FFmpeg binary paths.
    pub fn with_paths(ffmpeg_path: String, ffprobe_path: String) -> Self {
        Self {
            ffmpeg_path,
            ffprobe_path,
        }
    }

    /// Extract video metadata (resolution, duration, codec, frame rate).
    pub fn probe(&self, video_path: &Path) -> Result<VideoInfo> {
        let video_arg = video_path
            .to_str()
            .context("video path is not valid UTF-8")?;

        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height,duration,codec_name,r_frame_rate",
                "-show_entries",
                "format=duration,format_name",
                "-of",
                "json",
                video_arg,
            ])
            .output()
            .context("failed to execute ffprobe")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow::anyhow!("ffprobe failed: {}", stderr.trim()));
        }

        let json_output = String::from_utf8(output.stdout)?;
        let metadata: FfprobeOutput =
            serde_json::from_str(&json_output).context("failed to parse ffprobe output")?;

        let stream = metadata
            .streams
            .first()
            .context("no video stream found")?;

        Ok(VideoInfo {
            width: stream.width,
            height: stream.height,
            duration_seconds: stream
                .duration
                .clone()
                .or(metadata.format.duration.clone())
                .and_then(|d| d.parse::<f64>().ok())
                .unwrap_or(0.0),
            video_codec: stream.codec_name.clone(),
            fps: Self::parse_frame_rate(&stream.r_frame_rate),
            format_name: metadata.format.format_name.clone(),
        })
    }

    /// Open a round video as an ordered, non-restartable frame stream.
    ///
    /// Probes the input first and decodes every frame to the stream's
    /// scratch directory. Any failure up to that point is the fatal
    /// "cannot process input" condition; no partial stream is returned.
    pub fn open_frames(&self, video_path: &Path) -> Result<FrameStream, AnalysisError> {
        let info = self.probe(video_path).map_err(|e| AnalysisError::VideoOpen {
            path: video_path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!(
            path = %video_path.display(),
            width = info.width,
            height = info.height,
            duration_seconds = info.duration_seconds,
            fps = info.fps,
            codec = %info.video_codec,
            "opening round video"
        );

        let scratch = TempDir::new()
            .context("failed to create frame scratch directory")
            .map_err(AnalysisError::Internal)?;
        let frame_pattern = scratch.path().join("frame_%06d.jpg");

        let status = Command::new(&self.ffmpeg_path)
            .args([
                "-v",
                "error",
                "-i",
                video_path.to_str().unwrap_or_default(),
                "-q:v",
                "2",
                "-y",
                frame_pattern.to_str().unwrap_or_default(),
            ])
            .status()
            .context("failed to execute ffmpeg")
            .map_err(AnalysisError::Internal)?;

        if !status.success() {
            return Err(AnalysisError::VideoOpen {
                path: video_path.to_path_buf(),
                reason: "ffmpeg could not decode the video".to_string(),
            });
        }

        let mut frame_paths = Vec::new();
        let entries = std::fs::read_dir(scratch.path())
            .context("failed to list extracted frames")
            .map_err(AnalysisError::Internal)?;
        for entry in entries {
            let entry = entry
                .context("failed to read frame entry")
                .map_err(AnalysisError::Internal)?;
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) == Some("jpg") {
                frame_paths.push(path);
            }
        }
        frame_paths.sort();

        info!(frames = frame_paths.len(), "video decoded");

        Ok(FrameStream {
            _scratch: scratch,
            frames: frame_paths.into_iter(),
            next_index: 0,
        })
    }

    /// Parse an ffprobe frame rate fraction (e.g., "30/1" -> 30.0).
    fn parse_frame_rate(rate_str: &str) -> f64 {
        if let Some((num, den)) = rate_str.split_once('/') {
            if let (Ok(n), Ok(d)) = (num.parse::<f64>(), den.parse::<f64>()) {
                if d != 0.0 {
                    return n / d;
                }
            }
        }
        0.0
    }
}

impl Default for VideoProcessingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Video metadata from ffprobe.
#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub width: i32,
    pub height: i32,
    pub duration_seconds: f64,
    pub video_codec: String,
    pub fps: f64,
    pub format_name: String,
}

/// Lazy, finite, in-order frame stream over a decoded round.
///
/// Yields one entry per source frame. `Some(image)` is a decodable frame;
/// `None` marks a frame whose JPEG could not be read back, which downstream
/// treats exactly like a frame with no detection. Owns its scratch
/// directory, so frames are cleaned up on drop even when the caller stops
/// pulling early.
pub struct FrameStream {
    _scratch: TempDir,
    frames: std::vec::IntoIter<PathBuf>,
    next_index: u64,
}

impl FrameStream {
    /// Frames not yet consumed.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl Iterator for FrameStream {
    type Item = Option<DynamicImage>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.frames.next()?;
        let index = self.next_index;
        self.next_index += 1;

        match image::open(&path) {
            Ok(img) => Some(Some(img)),
            Err(e) => {
                warn!(frame = index, error = %e, "frame failed to decode, skipping signal");
                Some(None)
            }
        }
    }
}

// ffprobe JSON output structures
#[derive(Debug, serde::Deserialize)]
struct FfprobeOutput {
    streams: Vec<FfprobeStream>,
    format: FfprobeFormat,
}

#[derive(Debug, serde::Deserialize)]
struct FfprobeStream {
    width: i32,
    height: i32,
    duration: Option<String>,
    codec_name: String,
    r_frame_rate: String,
}

#[derive(Debug, serde::Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
    format_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_frame_rate() {
        assert_eq!(VideoProcessingService::parse_frame_rate("30/1"), 30.0);
        assert_eq!(VideoProcessingService::parse_frame_rate("60/1"), 60.0);
        assert_eq!(
            VideoProcessingService::parse_frame_rate("24000/1001"),
            23.976023976023978
        );
        assert_eq!(VideoProcessingService::parse_frame_rate("30/0"), 0.0);
        assert_eq!(VideoProcessingService::parse_frame_rate("invalid"), 0.0);
    }

    #[test]
    fn test_missing_video_is_a_fatal_open_error() {
        let service = VideoProcessingService::new();
        let result = service.open_frames(Path::new("/nonexistent/round.mp4"));
        match result {
            Err(AnalysisError::VideoOpen { path, .. }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/round.mp4"));
            }
            Err(other) => panic!("expected VideoOpen error, got {other}"),
            Ok(_) => panic!("expected VideoOpen error, got a frame stream"),
        }
    }
}
