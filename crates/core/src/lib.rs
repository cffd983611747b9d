//! Core types for the nlsolve root finders.
//!
//! This crate defines the shared definitions that solvers and observers build
//! on:
//!
//! - [`Equation`]: a scalar function `f`, its derivative `f′`, and a label
//! - [`System`]: a 2x2 nonlinear system written in fixed-point form
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Catalog`]: an explicit, caller-owned table of predefined equations and systems
//! - [`decimal_places_for`]: rendering precision derived from a tolerance

mod catalog;
mod equation;
mod observer;
mod precision;
mod system;

pub use catalog::Catalog;
pub use equation::Equation;
pub use observer::Observer;
pub use precision::decimal_places_for;
pub use system::System;
