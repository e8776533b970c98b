//! Run planning: output-kind dependent time bounds and step schedules.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Bounds table
// ---------------------------------------------------------------------------

/// Per-kind time bounds and step resolution.
///
/// Animation frames are far more expensive to encode than static-image
/// points, so animation runs are capped at far fewer steps even though
/// both kinds run the same integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPolicy {
    pub min_seconds: u32,
    pub max_seconds: u32,
    pub step_size: f64,
    pub steps_per_second: u32,
    pub max_steps: usize,
}

const ANIMATION: StepPolicy = StepPolicy {
    min_seconds: 1,
    max_seconds: 60,
    step_size: 0.02,
    steps_per_second: 50,
    max_steps: 3000,
};

const IMAGE: StepPolicy = StepPolicy {
    min_seconds: 1,
    max_seconds: 600,
    step_size: 0.01,
    steps_per_second: 100,
    max_steps: 60_000,
};

// ---------------------------------------------------------------------------
// Output kind & plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Image,
    Animation,
}

impl OutputKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Animation => "animation",
        }
    }

    pub fn policy(self) -> &'static StepPolicy {
        match self {
            Self::Image => &IMAGE,
            Self::Animation => &ANIMATION,
        }
    }
}

/// Validated step schedule for one run. Computed once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationPlan {
    pub step_size: f64,
    pub step_count: usize,
    pub output_kind: OutputKind,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("simulation time {requested} s out of range for {kind} output (allowed {min}-{max} s)")]
    InvalidTimeRange {
        kind: &'static str,
        requested: u32,
        min: u32,
        max: u32,
    },
}

/// Map a requested output kind and whole-second simulation time to a step
/// schedule, rejecting out-of-range requests before any integration work.
///
/// Step counts use exact integer arithmetic (`seconds * steps_per_second`)
/// rather than dividing by the float step size, so the counts in the bounds
/// table hold exactly at every valid time.
pub fn plan(kind: OutputKind, seconds: u32) -> Result<SimulationPlan, PlanError> {
    let policy = kind.policy();

    if seconds < policy.min_seconds || seconds > policy.max_seconds {
        return Err(PlanError::InvalidTimeRange {
            kind: kind.label(),
            requested: seconds,
            min: policy.min_seconds,
            max: policy.max_seconds,
        });
    }

    Ok(SimulationPlan {
        step_size: policy.step_size,
        step_count: seconds as usize * policy.steps_per_second as usize,
        output_kind: kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_table_values() {
        let p = plan(OutputKind::Animation, 60).unwrap();
        assert_eq!(p.step_size, 0.02);
        assert_eq!(p.step_count, 3000);
        assert_eq!(p.output_kind, OutputKind::Animation);

        let p = plan(OutputKind::Image, 600).unwrap();
        assert_eq!(p.step_size, 0.01);
        assert_eq!(p.step_count, 60_000);

        assert_eq!(plan(OutputKind::Animation, 1).unwrap().step_count, 50);
        assert_eq!(plan(OutputKind::Image, 1).unwrap().step_count, 100);
        assert_eq!(plan(OutputKind::Animation, 20).unwrap().step_count, 1000);
        assert_eq!(plan(OutputKind::Animation, 40).unwrap().step_count, 2000);
        assert_eq!(plan(OutputKind::Image, 60).unwrap().step_count, 6000);
        assert_eq!(plan(OutputKind::Image, 120).unwrap().step_count, 12_000);
    }

    #[test]
    fn test_plan_accepts_boundaries() {
        for t in [1, 20, 40, 60] {
            assert!(plan(OutputKind::Animation, t).is_ok());
        }
        for t in [1, 200, 400, 600] {
            assert!(plan(OutputKind::Image, t).is_ok());
        }
    }

    #[test]
    fn test_plan_rejects_out_of_range() {
        for t in [0, 61, 80] {
            assert!(matches!(
                plan(OutputKind::Animation, t),
                Err(PlanError::InvalidTimeRange { .. })
            ));
        }
        for t in [0, 601, 800] {
            assert!(matches!(
                plan(OutputKind::Image, t),
                Err(PlanError::InvalidTimeRange { .. })
            ));
        }
    }

    #[test]
    fn test_error_message_names_kind_and_range() {
        let err = plan(OutputKind::Animation, 61).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("animation"));
        assert!(msg.contains("61"));
        assert!(msg.contains("1-60"));
    }

    #[test]
    fn test_plans_never_exceed_step_caps() {
        for kind in [OutputKind::Animation, OutputKind::Image] {
            let policy = kind.policy();
            let p = plan(kind, policy.max_seconds).unwrap();
            assert_eq!(p.step_count, policy.max_steps);
            // Total simulated time matches the request within float error.
            let total = p.step_size * p.step_count as f64;
            assert!((total - policy.max_seconds as f64).abs() < 1e-6);
        }
    }
}
