use super::config::MeasureConfig;
use super::error::EngineError;
use super::tasks::contacts;
use crate::core::metrics::gyration::{joint_gyration, max_gyration};
use crate::core::models::chain::ResidueLabel;
use crate::core::models::lattice::{Centroid, LatticePoint};
use crate::core::models::measures::{ContactCounts, GyrationPair, MeasurementRecord};
use tracing::info;

/// Per-run constants shared by every candidate evaluation.
///
/// Built once before the search starts and passed by reference afterwards. The
/// residue labels are borrowed, so the context is `Copy` and never owns the chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessContext<'a> {
    labels: &'a [ResidueLabel],
    length: usize,
    max_gyration: f64,
    config: MeasureConfig,
}

impl<'a> FitnessContext<'a> {
    pub fn initialize(
        labels: &'a [ResidueLabel],
        length: usize,
        config: MeasureConfig,
    ) -> Result<Self, EngineError> {
        let max_gyration = max_gyration(labels, length)?;
        info!(
            length,
            max_gyration,
            policy = ?config.negative_counts,
            "Fitness context initialized."
        );
        Ok(Self {
            labels,
            length,
            max_gyration,
            config,
        })
    }

    /// A snapshot of the cached configuration.
    pub fn get(&self) -> FitnessContext<'a> {
        *self
    }

    /// Ends the context's lifetime. Nothing is owned, so nothing is released.
    pub fn cleanup(self) {}

    pub fn labels(&self) -> &'a [ResidueLabel] {
        self.labels
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn max_gyration(&self) -> f64 {
        self.max_gyration
    }

    pub fn config(&self) -> &MeasureConfig {
        &self.config
    }

    pub fn measure(
        &self,
        backbone: &[LatticePoint],
        sidechain: &[LatticePoint],
    ) -> Result<MeasurementRecord, EngineError> {
        contacts::measure(backbone, sidechain, self.labels, &self.config)
    }

    pub fn count(
        &self,
        backbone: &[LatticePoint],
        sidechain: &[LatticePoint],
    ) -> Result<ContactCounts, EngineError> {
        contacts::count(backbone, sidechain, self.labels, &self.config)
    }

    pub fn joint_gyration(
        &self,
        sidechain: &[LatticePoint],
        centroid_h: &Centroid,
        centroid_p: &Centroid,
    ) -> Result<GyrationPair, EngineError> {
        Ok(joint_gyration(
            sidechain,
            self.labels,
            centroid_h,
            centroid_p,
        )?)
    }
}
