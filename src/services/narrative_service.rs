/// Deterministic coaching narrative for video-analyzed rounds.
///
/// Template logic only: the same metrics always produce the same text, so
/// reports can be snapshot-tested. Sections appear in a fixed order — risk
/// headline, guard discipline, tracking caveat, hip rotation, then the
/// strategy text verbatim.
use crate::models::round_metrics::RoundMetrics;

const GUARD_MAJOR_CONCERN_RATIO: f64 = 0.3;
const GUARD_NEEDS_WORK_RATIO: f64 = 0.15;
const LOW_COVERAGE_RATIO: f64 = 0.5;
const HIP_ROTATION_WEAK_DEGREES: f64 = 25.0;
const HIP_ROTATION_GOOD_DEGREES: f64 = 40.0;

/// Compose the round feedback from scored video metrics and the selected
/// strategy text.
pub fn compose_narrative(
    metrics: &RoundMetrics,
    danger_score: f64,
    strategy_text: &str,
) -> String {
    let mut lines = Vec::with_capacity(5);

    lines.push(
        if danger_score >= 0.7 {
            "High-risk round: you were taking damage and losing position."
        } else if danger_score >= 0.4 {
            "Mixed round: a few danger signs worth cleaning up."
        } else {
            "Controlled round: risk stayed low."
        }
        .to_string(),
    );

    let guard_pct = metrics.guard_down_ratio * 100.0;
    lines.push(if metrics.guard_down_ratio > GUARD_MAJOR_CONCERN_RATIO {
        format!("Guard was down on {guard_pct:.0}% of tracked frames - major concern.")
    } else if metrics.guard_down_ratio > GUARD_NEEDS_WORK_RATIO {
        format!("Guard dropped on {guard_pct:.0}% of tracked frames - needs work.")
    } else {
        "Guard stayed solid throughout.".to_string()
    });

    if metrics.pose_coverage < LOW_COVERAGE_RATIO {
        lines.push(format!(
            "Tracking only held for {:.0}% of the round, so treat these numbers with caution.",
            metrics.pose_coverage * 100.0
        ));
    }

    if metrics.avg_hip_rotation_degrees < HIP_ROTATION_WEAK_DEGREES {
        lines.push(
            "Hip rotation is weak - you are arm-punching without your base.".to_string(),
        );
    } else if metrics.avg_hip_rotation_degrees > HIP_ROTATION_GOOD_DEGREES {
        lines.push("Good hip rotation behind your shots.".to_string());
    }

    lines.push(strategy_text.to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::StrategyTier;

    fn metrics(coverage: f64, guard_down: f64, hip_degrees: f64) -> RoundMetrics {
        RoundMetrics {
            total_frames: 200,
            pose_frames: (coverage * 200.0) as u64,
            pose_coverage: coverage,
            guard_down_ratio: guard_down,
            avg_left_guard_height: 0.0,
            avg_right_guard_height: 0.0,
            avg_hip_rotation_degrees: hip_degrees,
            avg_stance_width: 0.4,
            head_movement_score: 0.02,
        }
    }

    #[test]
    fn test_sections_appear_in_order() {
        let m = metrics(0.4, 0.45, 20.0);
        let text = compose_narrative(&m, 0.75, StrategyTier::DefenseFirst.text());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("High-risk round"));
        assert!(lines[1].contains("major concern"));
        assert!(lines[2].starts_with("Tracking only held for 40%"));
        assert!(lines[3].contains("Hip rotation is weak"));
        assert_eq!(lines[4], StrategyTier::DefenseFirst.text());
    }

    #[test]
    fn test_quiet_sections_are_omitted() {
        // Good coverage, clean guard, hip rotation in the silent band.
        let m = metrics(0.95, 0.05, 32.0);
        let text = compose_narrative(&m, 0.1, StrategyTier::PressureBody.text());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Controlled round"));
        assert_eq!(lines[1], "Guard stayed solid throughout.");
        assert_eq!(lines[2], StrategyTier::PressureBody.text());
    }

    #[test]
    fn test_guard_comment_tiers() {
        let major = compose_narrative(&metrics(1.0, 0.31, 30.0), 0.2, "s");
        assert!(major.contains("major concern"));
        let work = compose_narrative(&metrics(1.0, 0.16, 30.0), 0.2, "s");
        assert!(work.contains("needs work"));
        let solid = compose_narrative(&metrics(1.0, 0.15, 30.0), 0.2, "s");
        assert!(solid.contains("Guard stayed solid"));
    }

    #[test]
    fn test_good_hip_rotation_comment() {
        let text = compose_narrative(&metrics(1.0, 0.0, 45.0), 0.0, "s");
        assert!(text.contains("Good hip rotation"));
    }

    #[test]
    fn test_same_input_same_narrative() {
        let m = metrics(0.3, 0.5, 18.0);
        let a = compose_narrative(&m, 0.58, StrategyTier::RingCutting.text());
        let b = compose_narrative(&m, 0.58, StrategyTier::RingCutting.text());
        assert_eq!(a, b);
    }
}
