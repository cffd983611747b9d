//! Iterative root finders for scalar equations and 2x2 systems.
//!
//! # Modules
//!
//! - [`scalar`]: bisection, chord, Newton-Raphson, and simple iteration for
//!   an [`Equation`], plus the [`Method`](scalar::Method) dispatcher
//! - [`system`]: fixed-point iteration for a 2x2 [`System`]
//!
//! Every solver follows the same two-step protocol: a cheap `check` of the
//! method's preconditions, then `solve`, which runs the iteration and returns
//! a solution or a typed error. Solvers emit one event per iteration to an
//! [`Observer`](nlsolve_core::Observer), and log those events through
//! `tracing` when the config's log flag is set.
//!
//! [`Equation`]: nlsolve_core::Equation
//! [`System`]: nlsolve_core::System

mod trace;

pub mod scalar;
pub mod system;
