//! # Core Models Module
//!
//! Plain value types describing a lattice conformation and the numbers measured on it.
//!
//! ## Key Components
//!
//! - [`lattice`] - Integer lattice points and floating-point centroids
//! - [`chain`] - H/P residue labels and the sequence that carries them
//! - [`measures`] - Contact counts, the compressed measurement record, and gyration pairs
//!
//! ## Usage
//!
//! ```ignore
//! use hpfold::core::models::{chain::HpChain, lattice::LatticePoint};
//!
//! let chain: HpChain = "HPH".parse()?;
//! let backbone = [
//!     LatticePoint::new(0, 0, 0),
//!     LatticePoint::new(1, 0, 0),
//!     LatticePoint::new(2, 0, 0),
//! ];
//! ```

pub mod chain;
pub mod lattice;
pub mod measures;
