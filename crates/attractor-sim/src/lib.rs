//! Attractor Simulation Library
//!
//! Provides chaotic ODE systems ("strange attractors"), a fixed-step
//! 4th-order Runge-Kutta integrator, and the planning logic that maps a
//! requested output kind and simulation time to a validated step schedule.

pub mod model;
pub mod plan;
pub mod rk4;

// Re-export main types
pub use model::Attractor;
pub use plan::{plan, OutputKind, PlanError, SimulationPlan, StepPolicy};
pub use rk4::{integrate, Trajectory};
