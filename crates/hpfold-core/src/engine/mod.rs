//! # Engine Module
//!
//! The stateful layer that turns raw conformations into fitness components.
//!
//! ## Overview
//!
//! The engine validates caller input, builds the seven bead subsets of a conformation,
//! runs the independent counting tasks in parallel, and folds their results into a
//! corrected, square-root compressed [`MeasurementRecord`](crate::core::models::measures::MeasurementRecord).
//! Run-wide constants such as the extended-chain gyration maximum are computed once and
//! held by an immutable [`FitnessContext`](context::FitnessContext).
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Measurement policy and TOML loading
//! - **Run Context** ([`context`]) - Immutable per-run constants passed by reference
//! - **Error Handling** ([`error`]) - Engine-specific error types
//! - **Tasks** ([`tasks`]) - Subset partitioning and the parallel contact measurer

pub mod config;
pub mod context;
pub mod error;
pub mod tasks;
