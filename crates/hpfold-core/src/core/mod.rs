//! # Core Module
//!
//! Stateless building blocks for scoring HP-model lattice conformations.
//!
//! ## Architecture
//!
//! - **Lattice Representation** ([`models`]) - Lattice points, residue labels, measurement records
//! - **Geometric Metrics** ([`metrics`]) - Radius of gyration and brute-force pair counting
//!
//! Everything here is a pure function of its inputs. Subset construction, parallel
//! dispatch and input validation live in [`crate::engine`].

pub mod metrics;
pub mod models;
