//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the scalar and system solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration counter
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use nlsolve_core::Observer;
//! use nlsolve_observers::traits::{CanStopEarly, HasIteration, HasResidual};
//!
//! /// Stops once the residual stalls above a floor for too long.
//! struct Stalled {
//!     floor: f64,
//!     patience: usize,
//! }
//!
//! impl<E: HasIteration + HasResidual, A: CanStopEarly> Observer<E, A> for Stalled {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() > self.patience && event.residual().abs() > self.floor)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use nlsolve_solvers::{scalar, system};

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the 1-based iteration that produced this event.
    fn iter(&self) -> usize;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Events with several residuals report the one largest in magnitude.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- scalar solvers ---

impl HasIteration for scalar::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for scalar::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl CanStopEarly for scalar::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- system solver ---

impl HasIteration for system::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl HasResidual for system::Event {
    fn residual(&self) -> f64 {
        let [r1, r2] = self.residuals;
        if r1.abs() >= r2.abs() { r1 } else { r2 }
    }
}

impl CanStopEarly for system::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn system_residual_is_the_larger_magnitude() {
        let event = system::Event {
            iter: 4,
            point: [1.0, 2.0],
            residuals: [0.25, -0.5],
        };
        assert_eq!(event.iter(), 4);
        assert_relative_eq!(event.residual(), -0.5);
    }

    #[test]
    fn scalar_event_accessors() {
        let event = scalar::Event {
            kind: scalar::Kind::Newton,
            iter: 2,
            x: 1.5,
            residual: 1e-3,
            bracket: None,
        };
        assert_eq!(HasIteration::iter(&event), 2);
        assert_relative_eq!(HasResidual::residual(&event), 1e-3);
    }

    #[test]
    fn actions_stop_early() {
        assert_eq!(scalar::Action::stop_early(), scalar::Action::StopEarly);
        assert_eq!(system::Action::stop_early(), system::Action::StopEarly);
    }
}
