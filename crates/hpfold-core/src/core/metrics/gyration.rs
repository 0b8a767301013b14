use super::{InputError, ensure_length};
use crate::core::models::chain::ResidueLabel;
use crate::core::models::lattice::{Centroid, LatticePoint};
use crate::core::models::measures::GyrationPair;

/// Root-mean-square distance of `coords` from `centroid`.
pub fn gyration(coords: &[LatticePoint], centroid: &Centroid) -> Result<f64, InputError> {
    if coords.is_empty() {
        return Err(InputError::EmptyBeadSet);
    }
    let n = coords.len() as f64;
    let squared_dist_sum: f64 = coords.iter().map(|p| p.squared_distance_to(centroid)).sum();
    Ok((squared_dist_sum / n).sqrt())
}

/// Gyration of the H and P side-chain beads, each against its own centroid.
///
/// A class with no beads contributes a radius of `0.0`.
pub fn joint_gyration(
    sidechain: &[LatticePoint],
    labels: &[ResidueLabel],
    centroid_h: &Centroid,
    centroid_p: &Centroid,
) -> Result<GyrationPair, InputError> {
    ensure_length("side-chain beads", labels.len(), sidechain.len())?;

    let (h_beads, p_beads): (Vec<_>, Vec<_>) = sidechain
        .iter()
        .zip(labels)
        .partition(|&(_, &label)| label == ResidueLabel::H);
    let h_beads: Vec<LatticePoint> = h_beads.into_iter().map(|(p, _)| *p).collect();
    let p_beads: Vec<LatticePoint> = p_beads.into_iter().map(|(p, _)| *p).collect();

    Ok(GyrationPair {
        h: class_gyration(&h_beads, centroid_h)?,
        p: class_gyration(&p_beads, centroid_p)?,
    })
}

fn class_gyration(beads: &[LatticePoint], centroid: &Centroid) -> Result<f64, InputError> {
    if beads.is_empty() {
        Ok(0.0)
    } else {
        gyration(beads, centroid)
    }
}

/// Gyration of the H beads if the chain were stretched along a straight line.
///
/// Residue `i` sits `i` lattice units from the first one, so only the indices of
/// the H residues matter. Chains without any H residue yield `0.0`.
pub fn max_gyration(labels: &[ResidueLabel], length: usize) -> Result<f64, InputError> {
    if length == 0 {
        return Err(InputError::EmptyChain);
    }
    ensure_length("residue labels", length, labels.len())?;

    let h_indices: Vec<f64> = labels
        .iter()
        .enumerate()
        .filter(|&(_, &label)| label == ResidueLabel::H)
        .map(|(i, _)| i as f64)
        .collect();

    if h_indices.is_empty() {
        return Ok(0.0);
    }

    let n = h_indices.len() as f64;
    let center = h_indices.iter().sum::<f64>() / n;
    let squared_dist_sum: f64 = h_indices.iter().map(|i| (i - center).powi(2)).sum();
    Ok((squared_dist_sum / n).sqrt())
}
