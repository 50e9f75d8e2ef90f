/// Single-subject pose detection backed by ONNX Runtime.
///
/// Runs a YOLOv8n-pose model over one frame at a time:
/// - letterbox resize to the model input square, RGB, normalized [0, 1], NCHW
/// - one inference pass over [1, 3, 640, 640]
/// - candidate selection over the [1, 56, 8400] output
///   (56 = 4 bbox + 1 confidence + 17 keypoints x 3)
///
/// Sparring analysis follows one fighter, so postprocessing keeps the single
/// highest-confidence candidate above threshold instead of running NMS over
/// every anchor. Keypoints come back as a `LandmarkSet` in coordinates
/// normalized to the original frame.
use std::path::Path;

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageBuffer, Rgb};
use ndarray::{s, Array4, Ix3};
use ort::session::{builder::GraphOptimizationLevel, Session};
use tracing::info;

use crate::models::keypoint::{Landmark, LandmarkSet, LANDMARK_COUNT};

/// External body-pose estimation capability, one frame at a time.
///
/// Implementations hold whatever model state they need; the analysis
/// service takes the detector by value, so distinct rounds can run in
/// parallel on independent instances without shared-state contention.
pub trait PoseDetector {
    /// Detect the subject in one frame.
    ///
    /// Returns a complete landmark set with coordinates normalized to
    /// [0, 1], or `None` when no person is found. An `Err` is a per-call
    /// inference failure; callers decide whether it aborts anything.
    fn detect(&mut self, frame: &DynamicImage) -> Result<Option<LandmarkSet>>;
}

/// YOLOv8n-pose detector over ONNX Runtime.
pub struct OnnxPoseDetector {
    session: Session,
    input_size: u32,
    confidence_threshold: f32,
}

impl OnnxPoseDetector {
    /// Load the pose model from an ONNX file.
    pub fn new<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        ort::init()
            .with_name("sparring-coach-pose")
            .commit()
            .context("failed to initialize ONNX Runtime")?;

        let session = Session::builder()
            .context("failed to create session builder")?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .commit_from_file(model_path.as_ref())
            .context("failed to load pose model")?;

        info!(
            model = %model_path.as_ref().display(),
            "loaded pose estimation model"
        );

        Ok(Self {
            session,
            input_size: 640,
            confidence_threshold: 0.5,
        })
    }

    /// Set the minimum subject confidence. Default 0.5.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Letterbox the frame into the model input square.
    ///
    /// Returns the NCHW tensor plus the (scale, pad_x, pad_y) needed to map
    /// keypoints back into the original frame.
    fn preprocess(&self, image: &DynamicImage) -> (Array4<f32>, f32, u32, u32) {
        let (width, height) = image.dimensions();
        let target = self.input_size;

        let scale = (target as f32 / width as f32).min(target as f32 / height as f32);
        let new_width = (width as f32 * scale) as u32;
        let new_height = (height as f32 * scale) as u32;
        let pad_x = (target - new_width) / 2;
        let pad_y = (target - new_height) / 2;

        let resized =
            image.resize_exact(new_width, new_height, image::imageops::FilterType::Triangle);

        let mut padded: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(target, target, Rgb([114, 114, 114]));
        for y in 0..new_height {
            for x in 0..new_width {
                let pixel = resized.get_pixel(x, y);
                padded.put_pixel(x + pad_x, y + pad_y, Rgb([pixel[0], pixel[1], pixel[2]]));
            }
        }

        let mut tensor = Array4::<f32>::zeros((1, 3, target as usize, target as usize));
        for y in 0..target {
            for x in 0..target {
                let pixel = padded.get_pixel(x, y);
                tensor[[0, 0, y as usize, x as usize]] = pixel[0] as f32 / 255.0;
                tensor[[0, 1, y as usize, x as usize]] = pixel[1] as f32 / 255.0;
                tensor[[0, 2, y as usize, x as usize]] = pixel[2] as f32 / 255.0;
            }
        }

        (tensor, scale, pad_x, pad_y)
    }

    /// Pick the strongest candidate row and turn it into a landmark set in
    /// original-frame normalized coordinates.
    fn best_candidate(
        &self,
        output: &ndarray::ArrayView3<f32>,
        img_width: u32,
        img_height: u32,
        scale: f32,
        pad_x: u32,
        pad_y: u32,
    ) -> Option<LandmarkSet> {
        // [1, 56, 8400] -> [8400, 56]
        let rows = output.slice(s![0, .., ..]).t().to_owned();

        let mut best_row = None;
        let mut best_confidence = self.confidence_threshold;
        for i in 0..rows.shape()[0] {
            let confidence = rows[[i, 4]];
            if confidence >= best_confidence {
                best_confidence = confidence;
                best_row = Some(i);
            }
        }
        let row = rows.slice(s![best_row?, ..]);

        let mut points = [Landmark::new(0.0, 0.0, 0.0); LANDMARK_COUNT];
        for (kp_idx, point) in points.iter_mut().enumerate() {
            let base = 5 + kp_idx * 3;
            // Undo the letterbox transform, then normalize to the frame.
            let x = (row[base] - pad_x as f32) / scale / img_width as f32;
            let y = (row[base + 1] - pad_y as f32) / scale / img_height as f32;
            *point = Landmark::new(x, y, row[base + 2]);
        }

        Some(LandmarkSet::new(points))
    }
}

impl PoseDetector for OnnxPoseDetector {
    fn detect(&mut self, frame: &DynamicImage) -> Result<Option<LandmarkSet>> {
        let (img_width, img_height) = frame.dimensions();
        let (input_tensor, scale, pad_x, pad_y) = self.preprocess(frame);

        use ort::inputs;
        use ort::value::TensorRef;
        let outputs = self
            .session
            .run(inputs!["images" => TensorRef::from_array_view(input_tensor.view())?])
            .context("pose inference failed")?;

        let output = outputs["output0"]
            .try_extract_array::<f32>()
            .context("failed to extract pose model output")?;
        let output = output
            .into_dimensionality::<Ix3>()
            .context("unexpected pose model output shape")?
            .to_owned();
        // Release the session borrow (run takes &mut self) before the
        // immutable self borrow in best_candidate.
        drop(outputs);

        Ok(self.best_candidate(&output.view(), img_width, img_height, scale, pad_x, pad_y))
    }
}
