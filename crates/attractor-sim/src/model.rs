//! Attractor definitions.
//!
//! Each variant carries a fixed published parameter set and a fixed default
//! starting point in phase space. None of the parameters are tunable at
//! runtime; the tables below are the single source of truth for them.

use nalgebra::Vector3;

// ---------------------------------------------------------------------------
// Constant tables
// ---------------------------------------------------------------------------

/// Langford system parameters.
mod langford {
    pub const A: f64 = 0.95;
    pub const B: f64 = 0.7;
    pub const C: f64 = 0.6;
    pub const D: f64 = 3.5;
    pub const E: f64 = 0.25;
    pub const F: f64 = 0.1;
}

/// Lorenz system parameters.
mod lorenz {
    pub const SIGMA: f64 = 10.0;
    pub const RHO: f64 = 28.0;
    pub const BETA: f64 = 8.0 / 3.0;
}

/// Rossler system parameters.
mod rossler {
    pub const A: f64 = 0.2;
    pub const B: f64 = 0.2;
    pub const C: f64 = 5.7;
}

/// Sprott (case B cubic flow) parameters.
mod sprott {
    pub const A: f64 = 2.07;
    pub const B: f64 = 1.79;
}

// ---------------------------------------------------------------------------
// Attractor
// ---------------------------------------------------------------------------

/// Closed set of supported chaotic systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attractor {
    Langford,
    Lorenz,
    Rossler,
    Sprott,
}

impl Attractor {
    /// Every supported system, in CLI order.
    pub const ALL: [Attractor; 4] = [
        Attractor::Langford,
        Attractor::Lorenz,
        Attractor::Rossler,
        Attractor::Sprott,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Langford => "langford",
            Self::Lorenz => "lorenz",
            Self::Rossler => "rossler",
            Self::Sprott => "sprott",
        }
    }

    /// Default starting point in phase space for this system.
    pub fn initial_state(self) -> Vector3<f64> {
        match self {
            Self::Langford => Vector3::new(0.1, 0.0, 0.0),
            Self::Lorenz => Vector3::new(0.1, 0.1, 0.1),
            Self::Rossler => Vector3::new(0.1, 0.0, -0.1),
            Self::Sprott => Vector3::new(0.1, 0.0, 0.0),
        }
    }

    /// Time derivative (dx/dt, dy/dt, dz/dt) at state `s`.
    ///
    /// Pure function of the state: no time dependence, no interior state.
    pub fn derivative(self, s: &Vector3<f64>) -> Vector3<f64> {
        let (x, y, z) = (s.x, s.y, s.z);

        match self {
            Self::Langford => Vector3::new(
                (z - langford::B) * x - langford::D * y,
                langford::D * x + (z - langford::B) * y,
                langford::C + langford::A * z - z.powi(3) / 3.0
                    - (x * x + y * y) * (1.0 + langford::E * z)
                    + langford::F * z * x.powi(3),
            ),
            Self::Lorenz => Vector3::new(
                lorenz::SIGMA * (y - x),
                x * (lorenz::RHO - z) - y,
                x * y - lorenz::BETA * z,
            ),
            Self::Rossler => Vector3::new(
                -y - z,
                x + rossler::A * y,
                rossler::B + z * (x - rossler::C),
            ),
            Self::Sprott => Vector3::new(
                y + sprott::A * x * y + x * z,
                1.0 - sprott::B * x * x + y * z,
                x - x * x - y * y,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_deterministic() {
        for model in Attractor::ALL {
            let s = model.initial_state();
            assert_eq!(model.derivative(&s), model.derivative(&s));

            // A second probe point away from the default start.
            let s = Vector3::new(1.5, -2.0, 0.75);
            assert_eq!(model.derivative(&s), model.derivative(&s));
        }
    }

    #[test]
    fn test_lorenz_derivative_values() {
        let d = Attractor::Lorenz.derivative(&Vector3::new(0.1, 0.1, 0.1));
        assert!((d.x - 0.0).abs() < 1e-12);
        assert!((d.y - (0.1 * (28.0 - 0.1) - 0.1)).abs() < 1e-12);
        assert!((d.z - (0.1 * 0.1 - (8.0 / 3.0) * 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_rossler_derivative_values() {
        let d = Attractor::Rossler.derivative(&Vector3::new(0.1, 0.0, -0.1));
        assert!((d.x - 0.1).abs() < 1e-12);
        assert!((d.y - 0.1).abs() < 1e-12);
        assert!((d.z - (0.2 + (-0.1) * (0.1 - 5.7))).abs() < 1e-12);
    }

    #[test]
    fn test_labels_unique() {
        for (i, a) in Attractor::ALL.iter().enumerate() {
            for b in &Attractor::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
