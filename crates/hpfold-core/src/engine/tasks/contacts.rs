use super::subsets::{BeadSubset, MEASUREMENT_TASKS, SubsetBuffers};
use crate::core::metrics::{InputError, ensure_length};
use crate::core::models::chain::ResidueLabel;
use crate::core::models::lattice::LatticePoint;
use crate::core::models::measures::{ContactCounts, MeasurementRecord};
use crate::engine::config::{MeasureConfig, NegativeCountPolicy};
use crate::engine::error::EngineError;
use tracing::{debug, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Raw pair counts per subset, before inclusion-exclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RawCounts([i64; BeadSubset::COUNT]);

impl RawCounts {
    #[inline]
    pub fn get(&self, subset: BeadSubset) -> i64 {
        self.0[subset.index()]
    }
}

/// Contact and collision measures of one conformation, square-root compressed.
#[instrument(skip_all, name = "contact_measurement", fields(n = labels.len()))]
pub fn measure(
    backbone: &[LatticePoint],
    sidechain: &[LatticePoint],
    labels: &[ResidueLabel],
    config: &MeasureConfig,
) -> Result<MeasurementRecord, EngineError> {
    let counts = count(backbone, sidechain, labels, config)?;
    Ok(counts.compress())
}

/// Corrected counts of one conformation, with negative values resolved per `config`.
pub fn count(
    backbone: &[LatticePoint],
    sidechain: &[LatticePoint],
    labels: &[ResidueLabel],
    config: &MeasureConfig,
) -> Result<ContactCounts, EngineError> {
    validate(backbone, sidechain, labels)?;

    let buffers = SubsetBuffers::partition(backbone, sidechain, labels);
    let raw = raw_counts(&buffers);
    debug!(?raw, "Raw subset counts.");

    let corrected = correct(&raw, labels.len(), buffers.h_count(), buffers.p_count());
    resolve_negatives(corrected, config.negative_counts)
}

fn validate(
    backbone: &[LatticePoint],
    sidechain: &[LatticePoint],
    labels: &[ResidueLabel],
) -> Result<(), InputError> {
    if labels.is_empty() {
        return Err(InputError::EmptyChain);
    }
    ensure_length("backbone beads", labels.len(), backbone.len())?;
    ensure_length("side-chain beads", labels.len(), sidechain.len())?;
    Ok(())
}

/// Runs the seven subset tasks and joins their results.
pub fn raw_counts(buffers: &SubsetBuffers) -> RawCounts {
    #[cfg(not(feature = "parallel"))]
    let iterator = MEASUREMENT_TASKS.iter();

    #[cfg(feature = "parallel")]
    let iterator = MEASUREMENT_TASKS.par_iter();

    let results: Vec<(BeadSubset, i64)> = iterator
        .map(|task| (task.subset, task.run(buffers)))
        .collect();

    let mut raw = RawCounts::default();
    for (subset, value) in results {
        raw.0[subset.index()] = value;
    }
    raw
}

/// Inclusion-exclusion followed by removal of bonded neighbours.
fn correct(raw: &RawCounts, chain_len: usize, h_count: usize, p_count: usize) -> ContactCounts {
    let hh = raw.get(BeadSubset::HH);
    let pp = raw.get(BeadSubset::PP);
    let bb = raw.get(BeadSubset::BB);

    let hp = raw.get(BeadSubset::HP) - hh - pp;
    let hb = raw.get(BeadSubset::HB) - hh - bb;
    let pb = raw.get(BeadSubset::PB) - pp - bb;

    ContactCounts {
        hh,
        pp,
        hp,
        bb: bb - (chain_len as i64 - 1),
        hb: hb - h_count as i64,
        pb: pb - p_count as i64,
        collisions: raw.get(BeadSubset::All),
    }
}

fn resolve_negatives(
    counts: ContactCounts,
    policy: NegativeCountPolicy,
) -> Result<ContactCounts, EngineError> {
    let Some((field, value)) = counts.negative_fields().next() else {
        return Ok(counts);
    };

    match policy {
        NegativeCountPolicy::Reject => Err(InputError::NegativeCount { field, value }.into()),
        NegativeCountPolicy::Clamp => {
            for (field, value) in counts.negative_fields() {
                warn!(%field, value, "Negative corrected count clamped to zero.");
            }
            Ok(counts.clamped())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::chain::ResidueLabel::{H, P};
    use crate::core::models::measures::MeasureField;

    fn pts(raw: &[[i32; 3]]) -> Vec<LatticePoint> {
        raw.iter().copied().map(LatticePoint::from).collect()
    }

    fn clamp() -> MeasureConfig {
        MeasureConfig::builder()
            .negative_counts(NegativeCountPolicy::Clamp)
            .build()
    }

    fn ladder() -> (Vec<LatticePoint>, Vec<LatticePoint>, Vec<ResidueLabel>) {
        (
            pts(&[[0, 0, 0], [1, 0, 0], [2, 0, 0]]),
            pts(&[[0, 1, 0], [1, 1, 0], [2, 1, 0]]),
            vec![H, P, H],
        )
    }

    /// Compact 2x2x2 cube of backbone beads with side chains pointing outward.
    fn folded_cube() -> (Vec<LatticePoint>, Vec<LatticePoint>, Vec<ResidueLabel>) {
        let backbone = pts(&[
            [0, 0, 0],
            [1, 0, 0],
            [1, 1, 0],
            [0, 1, 0],
            [0, 1, 1],
            [1, 1, 1],
            [1, 0, 1],
            [0, 0, 1],
        ]);
        let sidechain = pts(&[
            [-1, 0, 0],
            [2, 0, 0],
            [2, 1, 0],
            [-1, 1, 0],
            [-1, 1, 1],
            [2, 1, 1],
            [2, 0, 1],
            [-1, 0, 1],
        ]);
        (backbone, sidechain, vec![H, P, P, H, H, P, P, H])
    }

    #[test]
    fn ladder_raw_counts_match_hand_computation() {
        let (bb, sc, labels) = ladder();
        let raw = raw_counts(&SubsetBuffers::partition(&bb, &sc, &labels));
        assert_eq!(raw.get(BeadSubset::HH), 0);
        assert_eq!(raw.get(BeadSubset::PP), 0);
        assert_eq!(raw.get(BeadSubset::HP), 2);
        assert_eq!(raw.get(BeadSubset::BB), 2);
        assert_eq!(raw.get(BeadSubset::HB), 4);
        assert_eq!(raw.get(BeadSubset::PB), 3);
        assert_eq!(raw.get(BeadSubset::All), 0);
    }

    #[test]
    fn ladder_corrected_counts_and_record() {
        let (bb, sc, labels) = ladder();
        let counts = count(&bb, &sc, &labels, &MeasureConfig::default()).unwrap();
        assert_eq!(
            counts,
            ContactCounts {
                hh: 0,
                pp: 0,
                hp: 2,
                bb: 0,
                hb: 0,
                pb: 0,
                collisions: 0,
            }
        );

        let record = measure(&bb, &sc, &labels, &MeasureConfig::default()).unwrap();
        assert!((record.hp - std::f64::consts::SQRT_2).abs() < 1e-9);
        for field in MeasureField::ALL {
            if field != MeasureField::HP {
                assert_eq!(record.get(field), 0.0, "field {}", field);
            }
        }
    }

    #[test]
    fn inclusion_exclusion_closes_on_side_chain_contacts() {
        for (bb, sc, labels) in [ladder(), folded_cube()] {
            let raw = raw_counts(&SubsetBuffers::partition(&bb, &sc, &labels));
            let counts = count(&bb, &sc, &labels, &clamp()).unwrap();
            assert_eq!(raw.get(BeadSubset::HP), counts.hh + counts.pp + counts.hp);
        }
    }

    #[test]
    fn folded_cube_counts_backbone_contacts_beyond_bonds() {
        let (bb, sc, labels) = folded_cube();
        let counts = count(&bb, &sc, &labels, &MeasureConfig::default()).unwrap();
        // 12 cube edges, 7 of them bonds.
        assert_eq!(counts.bb, 5);
        assert_eq!(counts.collisions, 0);
        // Side chains sit on the x = -1 and x = 2 faces and touch only their own backbone.
        assert_eq!(counts.hb, 0);
        assert_eq!(counts.pb, 0);
        assert_eq!(counts.hh, 4);
        assert_eq!(counts.pp, 4);
        assert_eq!(counts.hp, 0);
    }

    #[test]
    fn coincident_side_chains_are_collisions() {
        let backbone = pts(&[[0, 0, 0], [1, 0, 0]]);
        let sidechain = pts(&[[0, 1, 0], [0, 1, 0]]);
        let counts = count(&backbone, &sidechain, &[H, H], &MeasureConfig::default()).unwrap();
        assert_eq!(counts.collisions, 1);
        assert_eq!(counts.hh, 0);
        assert_eq!(counts.bb, 0);
        assert_eq!(counts.hb, 0);
        assert_eq!(counts.pb, 0);

        let record = measure(&backbone, &sidechain, &[H, H], &MeasureConfig::default()).unwrap();
        assert_eq!(record.collisions, 1.0);
    }

    #[test]
    fn scattered_beads_are_clamped_to_zero() {
        let backbone = pts(&[[0, 0, 0], [10, 0, 0], [20, 0, 0]]);
        let sidechain = pts(&[[0, 10, 0], [10, 10, 0], [20, 10, 0]]);
        let record = measure(&backbone, &sidechain, &[H, P, H], &clamp()).unwrap();
        assert_eq!(record, MeasurementRecord::default());
    }

    #[test]
    fn scattered_beads_are_rejected_by_default() {
        let backbone = pts(&[[0, 0, 0], [10, 0, 0], [20, 0, 0]]);
        let sidechain = pts(&[[0, 10, 0], [10, 10, 0], [20, 10, 0]]);
        let err = measure(&backbone, &sidechain, &[H, P, H], &MeasureConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InputError::NegativeCount {
                field: MeasureField::BB,
                value: -2,
            })
        );
    }

    #[test]
    fn detached_side_chain_reports_negative_class_count() {
        let backbone = pts(&[[0, 0, 0], [1, 0, 0]]);
        let sidechain = pts(&[[0, 1, 0], [9, 9, 9]]);
        let err = count(&backbone, &sidechain, &[H, P], &MeasureConfig::default()).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidInput(InputError::NegativeCount {
                field: MeasureField::PB,
                value: -1,
            })
        );
    }

    #[test]
    fn single_residue_chain_has_no_contacts() {
        let counts = count(
            &pts(&[[0, 0, 0]]),
            &pts(&[[0, 0, 1]]),
            &[P],
            &MeasureConfig::default(),
        )
        .unwrap();
        assert_eq!(counts, ContactCounts::default());
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let (bb, sc, labels) = ladder();
        let err = count(&bb[..2], &sc, &labels, &MeasureConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput(InputError::LengthMismatch {
                what: "backbone beads",
                expected: 3,
                found: 2,
            })
        ));
        let err = count(&bb, &sc[..1], &labels, &MeasureConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidInput(InputError::LengthMismatch {
                what: "side-chain beads",
                ..
            })
        ));
    }

    #[test]
    fn empty_chain_is_rejected() {
        let err = measure(&[], &[], &[], &MeasureConfig::default()).unwrap_err();
        assert_eq!(err, EngineError::InvalidInput(InputError::EmptyChain));
    }

    #[test]
    fn repeated_measurements_are_deterministic() {
        let (bb, sc, labels) = folded_cube();
        let first = measure(&bb, &sc, &labels, &clamp()).unwrap();
        for _ in 0..16 {
            assert_eq!(measure(&bb, &sc, &labels, &clamp()).unwrap(), first);
        }
    }
}
