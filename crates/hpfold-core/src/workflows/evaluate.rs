use crate::core::metrics::{InputError, ensure_length};
use crate::core::models::chain::ResidueLabel;
use crate::core::models::lattice::{Centroid, LatticePoint};
use crate::core::models::measures::{GyrationPair, MeasurementRecord};
use crate::engine::context::FitnessContext;
use crate::engine::error::EngineError;
use serde::Serialize;
use tracing::{debug, instrument};

/// One conformation proposed by the search loop.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'c> {
    pub backbone: &'c [LatticePoint],
    pub sidechain: &'c [LatticePoint],
    pub centroid_h: Centroid,
    pub centroid_p: Centroid,
}

impl<'c> Candidate<'c> {
    /// Builds a candidate whose class centroids are the means of its H and P side chains.
    ///
    /// A class without beads gets the origin as centroid; its gyration is zero regardless.
    pub fn with_sidechain_centroids(
        backbone: &'c [LatticePoint],
        sidechain: &'c [LatticePoint],
        labels: &[ResidueLabel],
    ) -> Result<Self, InputError> {
        ensure_length("side-chain beads", labels.len(), sidechain.len())?;

        let class_centroid = |class: ResidueLabel| {
            let beads: Vec<LatticePoint> = sidechain
                .iter()
                .zip(labels)
                .filter(|&(_, &label)| label == class)
                .map(|(&p, _)| p)
                .collect();
            Centroid::of(&beads).unwrap_or(Centroid::new(0.0, 0.0, 0.0))
        };

        Ok(Self {
            backbone,
            sidechain,
            centroid_h: class_centroid(ResidueLabel::H),
            centroid_p: class_centroid(ResidueLabel::P),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub measures: MeasurementRecord,
    pub gyration: GyrationPair,
    /// H gyration divided by the extended-chain maximum; `0.0` when the maximum is zero.
    pub normalized_h_gyration: f64,
}

#[instrument(skip_all, name = "evaluation_workflow")]
pub fn evaluate(
    context: &FitnessContext,
    candidate: &Candidate,
) -> Result<Evaluation, EngineError> {
    let measures = context.measure(candidate.backbone, candidate.sidechain)?;
    let gyration = context.joint_gyration(
        candidate.sidechain,
        &candidate.centroid_h,
        &candidate.centroid_p,
    )?;

    let max_gyration = context.max_gyration();
    let normalized_h_gyration = if max_gyration > 0.0 {
        gyration.h / max_gyration
    } else {
        0.0
    };

    debug!(
        rg_h = gyration.h,
        rg_p = gyration.p,
        normalized_h_gyration,
        collisions = measures.collisions,
        "Candidate evaluated."
    );

    Ok(Evaluation {
        measures,
        gyration,
        normalized_h_gyration,
    })
}
