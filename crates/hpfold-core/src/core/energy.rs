use crate::core::models::lattice::LatticePoint;
use crate::core::models::monomer::HpSequence;
use crate::core::utils::geometry::neighbors;
use std::collections::HashMap;

/// Scores a fold as the negated count of non-covalent hydrophobic contacts.
///
/// For every hydrophobic monomer, the occupants of its four lattice neighbors
/// are counted when they are hydrophobic too, and the covalent chain
/// neighbors (i−1, i+1) are subtracted back out. Every true contact is seen
/// from both endpoints, so the accumulated count is halved before negation.
/// The result is never positive; 0 means no non-covalent H–H contact exists.
///
/// Pure function of `(sequence, walk)`; the walk must hold one point per
/// monomer and be self-avoiding.
pub fn contact_energy(sequence: &HpSequence, walk: &[LatticePoint]) -> i32 {
    debug_assert_eq!(sequence.len(), walk.len());

    let occupancy: HashMap<LatticePoint, usize> = walk
        .iter()
        .copied()
        .enumerate()
        .map(|(index, point)| (point, index))
        .collect();

    let monomers = sequence.monomers();
    let mut doubled = 0i32;
    for (i, monomer) in monomers.iter().enumerate() {
        if !monomer.is_hydrophobic() {
            continue;
        }
        for neighbor in neighbors(walk[i]) {
            if let Some(&j) = occupancy.get(&neighbor) {
                if monomers[j].is_hydrophobic() {
                    doubled += 1;
                }
            }
        }
        // Chain-adjacent pairs touch on the lattice but are covalent bonds,
        // not the contacts being scored.
        if i > 0 && monomers[i - 1].is_hydrophobic() {
            doubled -= 1;
        }
        if i + 1 < monomers.len() && monomers[i + 1].is_hydrophobic() {
            doubled -= 1;
        }
    }

    -(doubled / 2)
}
