//! Fixed-step 4th-order Runge-Kutta integration.

use nalgebra::Vector3;

use crate::model::Attractor;

// ---------------------------------------------------------------------------
// Trajectory
// ---------------------------------------------------------------------------

/// Phase-space path produced by one integration run.
///
/// `pos[0]` is the model's initial state; one point is appended per step,
/// in simulation-time order, so the final length is `step_count + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub time: Vec<f64>,
    pub pos: Vec<Vector3<f64>>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Per-axis (min, max) over the whole path.
    ///
    /// Rendering uses this to fix the camera box before drawing so that
    /// animation frames share one coordinate system.
    pub fn axis_bounds(&self) -> [(f64, f64); 3] {
        let mut lo = [f64::INFINITY; 3];
        let mut hi = [f64::NEG_INFINITY; 3];
        for p in &self.pos {
            for axis in 0..3 {
                lo[axis] = lo[axis].min(p[axis]);
                hi[axis] = hi[axis].max(p[axis]);
            }
        }
        [(lo[0], hi[0]), (lo[1], hi[1]), (lo[2], hi[2])]
    }
}

// ---------------------------------------------------------------------------
// Integrator
// ---------------------------------------------------------------------------

/// Advance `model` from `initial` by `step_count` RK4 steps of `step_size`.
///
/// Purely functional over the state sequence: same inputs give bit-identical
/// trajectories. Step parameters are validated upstream by the planner; a
/// numerically diverging model simply yields diverged values.
pub fn integrate(
    model: Attractor,
    initial: Vector3<f64>,
    step_size: f64,
    step_count: usize,
) -> Trajectory {
    let h = step_size;
    let mut s = initial;
    let mut t = 0.0;

    let mut traj = Trajectory {
        time: Vec::with_capacity(step_count + 1),
        pos: Vec::with_capacity(step_count + 1),
    };
    traj.time.push(t);
    traj.pos.push(s);

    for _ in 0..step_count {
        let k1 = model.derivative(&s);
        let k2 = model.derivative(&(s + k1 * (h * 0.5)));
        let k3 = model.derivative(&(s + k2 * (h * 0.5)));
        let k4 = model.derivative(&(s + k3 * h));

        s += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (h / 6.0);
        t += h;

        traj.time.push(t);
        traj.pos.push(s);
    }

    traj
}
