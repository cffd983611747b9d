//! Reusable observers for the nlsolve root finders.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with both the scalar and the system solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`IterationBudget`]: stops a solve after a fixed number of iterations
//! - [`Deadline`]: stops a solve once a wall-clock deadline passes
//! - [`History`]: records every event for later inspection
//!
//! The solvers have no built-in cancellation. Budget observers are how a
//! caller bounds a run that might not converge.
//!
//! [`Observer`]: nlsolve_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod budget;
mod deadline;
mod history;

pub use budget::IterationBudget;
pub use deadline::Deadline;
pub use history::History;
