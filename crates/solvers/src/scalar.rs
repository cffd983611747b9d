//! Root finders for a scalar [`Equation`] `f(x) = 0`.
//!
//! # Methods
//!
//! - [`bisection`]: halves a sign-changing bracket; always terminates
//! - [`chord`]: secant through a fixed bracket endpoint
//! - [`newton`]: tangent-line iteration from a single seed
//! - [`simple_iteration`]: relaxed fixed-point iteration with a contraction test
//!
//! Each method module offers `check`, `solve`, and `solve_unobserved`
//! functions. [`Method`] bundles an equation, its bounds, and a [`Config`]
//! behind one of the closed set of [`Kind`]s, for callers that pick the
//! algorithm at runtime.
//!
//! # Observer events
//!
//! Every method emits one [`Event`] per iteration, after the new iterate and
//! its residual are computed and before the stopping test. Observers can
//! return [`Action::StopEarly`] to abort, which surfaces as
//! [`Error::StoppedByObserver`].
//!
//! [`Equation`]: nlsolve_core::Equation

mod config;
mod error;
mod event;
mod kind;
mod method;
mod solution;


pub mod bisection;
pub mod chord;
pub mod newton;
pub mod simple_iteration;

pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event};
pub use kind::Kind;
pub use method::Method;
pub use newton::ResidualTest;
pub use solution::Solution;
