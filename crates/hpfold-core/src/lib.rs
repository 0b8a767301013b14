//! # HPfold Core Library
//!
//! Structural quality metrics for conformations of HP-model lattice proteins, meant to be
//! consumed by an external search loop (for example a genetic algorithm) as components of
//! a fitness score.
//!
//! Each residue is represented by a backbone bead and a side-chain bead on the cubic
//! lattice, and each side chain is labelled hydrophobic (`H`) or polar (`P`).
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless value types (`LatticePoint`, `HpChain`,
//!   `MeasurementRecord`) and pure geometric metrics (radius of gyration, pair counting).
//!
//! - **[`engine`]: The Logic Core.** Input validation, the seven-subset contact measurer with
//!   its parallel task fan-out, the measurement policy, and the immutable `FitnessContext`.
//!
//! - **[`workflows`]: The Public API.** One-call evaluation of a candidate conformation
//!   against a `FitnessContext`.
//!
//! ## Example
//!
//! ```
//! use hpfold::core::models::{chain::HpChain, lattice::LatticePoint};
//! use hpfold::engine::{config::MeasureConfig, context::FitnessContext};
//!
//! let chain: HpChain = "HPH".parse().unwrap();
//! let context =
//!     FitnessContext::initialize(chain.labels(), chain.len(), MeasureConfig::default()).unwrap();
//!
//! let backbone = [[0, 0, 0], [1, 0, 0], [2, 0, 0]].map(LatticePoint::from);
//! let sidechain = [[0, 1, 0], [1, 1, 0], [2, 1, 0]].map(LatticePoint::from);
//! let record = context.measure(&backbone, &sidechain).unwrap();
//!
//! assert_eq!(record.bb, 0.0);
//! assert!((record.hp - 2f64.sqrt()).abs() < 1e-9);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
