//! Computational units of a conformation measurement.
//!
//! [`subsets`] splits a conformation into its seven overlapping bead sets and describes the
//! independent counting tasks run over them. [`contacts`] dispatches those tasks in parallel,
//! joins the raw counts, and turns them into the corrected, compressed measurement record.

pub mod contacts;
pub mod subsets;
