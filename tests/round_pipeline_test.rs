/// Integration tests for the video-path pipeline from landmarks to
/// narrative: extraction -> aggregation -> scoring -> classification ->
/// composed feedback.
use pretty_assertions::assert_eq;

use sparring_coach::{
    assess_video, compose_narrative, extract_frame_signal, FrameSignal, Landmark, LandmarkSet,
    PoseLandmark, RoundAggregator, StrategyTier, TrainingFocus,
};
use sparring_coach::models::LANDMARK_COUNT;

/// Build a landmark set for a fighter standing mid-frame, with each hand
/// offset vertically from its shoulder by the given amount.
fn fighter_pose(left_guard_offset: f32, right_guard_offset: f32, head_y: f32) -> LandmarkSet {
    let mut points = [Landmark::new(0.5, 0.5, 0.9); LANDMARK_COUNT];
    points[PoseLandmark::Nose as usize] = Landmark::new(0.5, head_y, 0.95);
    points[PoseLandmark::LeftShoulder as usize] = Landmark::new(0.42, 0.35, 0.9);
    points[PoseLandmark::RightShoulder as usize] = Landmark::new(0.58, 0.35, 0.9);
    points[PoseLandmark::LeftWrist as usize] =
        Landmark::new(0.40, 0.35 + left_guard_offset, 0.85);
    points[PoseLandmark::RightWrist as usize] =
        Landmark::new(0.60, 0.35 + right_guard_offset, 0.85);
    points[PoseLandmark::LeftHip as usize] = Landmark::new(0.44, 0.58, 0.9);
    points[PoseLandmark::RightHip as usize] = Landmark::new(0.60, 0.58, 0.9);
    points[PoseLandmark::LeftAnkle as usize] = Landmark::new(0.38, 0.95, 0.85);
    points[PoseLandmark::RightAnkle as usize] = Landmark::new(0.66, 0.95, 0.85);
    LandmarkSet::new(points)
}

#[test]
fn extracted_signals_feed_the_aggregator() {
    // 8 tracked frames with a tight guard, 2 lost frames.
    let mut aggregator = RoundAggregator::new();
    for i in 0..10 {
        if i % 5 == 4 {
            aggregator.observe(None);
        } else {
            let pose = fighter_pose(-0.05, -0.02, 0.2 + (i as f32) * 0.001);
            let signal = extract_frame_signal(&pose);
            aggregator.observe(Some(&signal));
        }
    }
    let metrics = aggregator.finish();

    assert_eq!(metrics.total_frames, 10);
    assert_eq!(metrics.pose_frames, 8);
    assert!((metrics.pose_coverage - 0.8).abs() < 1e-9);
    assert_eq!(metrics.guard_down_ratio, 0.0);
    // Hips 0.16 apart -> 28.8 "degrees" under the fixed scaling.
    assert!((metrics.avg_hip_rotation_degrees - 28.8).abs() < 1e-4);
    assert!((metrics.avg_stance_width - 0.28).abs() < 1e-6);
    assert!(metrics.head_movement_score > 0.0);
}

#[test]
fn dropped_right_hand_shows_up_in_guard_ratio_and_danger() {
    let frames: Vec<Option<FrameSignal>> = (0..20)
        .map(|i| {
            // Right hand parked at the waist on half the tracked frames.
            let right = if i % 2 == 0 { 0.25 } else { -0.05 };
            Some(extract_frame_signal(&fighter_pose(-0.05, right, 0.2)))
        })
        .collect();
    let metrics = RoundAggregator::aggregate(frames);

    assert_eq!(metrics.pose_coverage, 1.0);
    assert!((metrics.guard_down_ratio - 0.5).abs() < 1e-9);

    let assessment = assess_video(&metrics);
    // danger = 0.6*0.5 + 0.4*0 = 0.3
    assert!((assessment.danger_score - 0.3).abs() < 1e-9);
    assert_eq!(assessment.focus_next_round, TrainingFocus::PressureAndBody);
    assert_eq!(assessment.strategy, StrategyTier::PressureBody);
}

#[test]
fn fully_lost_round_hits_the_coverage_penalty() {
    let metrics = RoundAggregator::aggregate((0..100).map(|_| None));
    let assessment = assess_video(&metrics);

    assert_eq!(assessment.danger_score, 0.4);
    assert_eq!(assessment.strategy, StrategyTier::RingCutting);
    // form = 10 - 0 - 2 = 8
    assert!((assessment.form_score - 8.0).abs() < 1e-9);
}

#[test]
fn narrative_snapshot_for_a_scrappy_round() {
    let frames: Vec<Option<FrameSignal>> = (0..10)
        .map(|i| {
            if i < 4 {
                // Tracking lost for the first part of the round.
                None
            } else {
                let left = if i % 2 == 0 { 0.2 } else { -0.05 };
                Some(extract_frame_signal(&fighter_pose(left, -0.05, 0.2)))
            }
        })
        .collect();
    let metrics = RoundAggregator::aggregate(frames);
    let assessment = assess_video(&metrics);
    let narrative = compose_narrative(
        &metrics,
        assessment.danger_score,
        assessment.strategy.text(),
    );

    // coverage 0.6, guard down 3/6: danger = 0.3 + 0.16 = 0.46.
    // Hip separation 0.16 maps to 28.8 degrees, inside the silent band.
    assert!((assessment.danger_score - 0.46).abs() < 1e-9);
    assert_eq!(
        narrative,
        "Mixed round: a few danger signs worth cleaning up.\n\
         Guard was down on 50% of tracked frames - major concern.\n\
         Smart pressure. Cut exits, feint to draw counters. No ego wars. Control space."
    );
}

#[test]
fn pipeline_is_deterministic_end_to_end() {
    let run = || {
        let frames: Vec<Option<FrameSignal>> = (0..30)
            .map(|i| {
                if i % 7 == 0 {
                    None
                } else {
                    Some(extract_frame_signal(&fighter_pose(
                        -0.04,
                        0.18,
                        0.2 + (i % 5) as f32 * 0.002,
                    )))
                }
            })
            .collect();
        let metrics = RoundAggregator::aggregate(frames);
        let assessment = assess_video(&metrics);
        let narrative = compose_narrative(
            &metrics,
            assessment.danger_score,
            assessment.strategy.text(),
        );
        (metrics, assessment, narrative)
    };

    assert_eq!(run(), run());
}
