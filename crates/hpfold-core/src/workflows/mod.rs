//! # Workflows Module
//!
//! High-level entry points for the search loop that drives conformation scoring.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Contact measures and gyration statistics of
//!   one candidate against a [`FitnessContext`](crate::engine::context::FitnessContext).
//!
//! Combining these components into a single scalar fitness is left to the caller.

pub mod evaluate;
