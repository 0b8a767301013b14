use crate::core::models::lattice::LatticePoint;
use itertools::Itertools;

/// Number of unordered bead pairs at lattice distance one.
pub fn count_contacts(beads: &[LatticePoint]) -> i64 {
    count_pairs(beads, |a, b| a.is_adjacent(b))
}

/// Number of unordered bead pairs sharing the same lattice point.
pub fn count_collisions(beads: &[LatticePoint]) -> i64 {
    count_pairs(beads, |a, b| a == b)
}

#[inline]
fn count_pairs<F>(beads: &[LatticePoint], predicate: F) -> i64
where
    F: Fn(&LatticePoint, &LatticePoint) -> bool,
{
    beads
        .iter()
        .tuple_combinations()
        .filter(|&(a, b)| predicate(a, b))
        .count() as i64
}
