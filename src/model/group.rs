//! Generator sets, group closure and grid-factor derivation.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::error::Error;
use crate::io::triplet::gcd;
use crate::model::op::{Op, Tran};

/// A set of symmetry operations plus centering translations.
///
/// Directly after Hall interpretation this is a minimal generator set;
/// after [`GroupOps::closure`] it holds one coset representative per
/// point-group element in `sym_ops` and every lattice-centering vector in
/// `cen_ops`. The zero vector is always present in `cen_ops`, and the
/// identity is always the first element of `sym_ops`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOps {
    pub sym_ops: Vec<Op>,
    pub cen_ops: Vec<Tran>,
}

impl GroupOps {
    /// Number of operations in the group, counting centering cosets.
    pub fn order(&self) -> usize {
        self.sym_ops.len() * self.cen_ops.len()
    }

    /// Iterates over all operations: the coset representatives first,
    /// then their combination with each further centering vector.
    pub fn iter(&self) -> impl Iterator<Item = Op> + '_ {
        self.cen_ops
            .iter()
            .flat_map(move |cen| self.sym_ops.iter().map(move |op| op.translated(cen)))
    }

    /// Expands the generator set into the full finite group.
    ///
    /// Worklist fixed point keyed by the canonical triplet string: every
    /// known pair (self-pairs included) is combined and any new canonical
    /// form admitted until a pass adds nothing. Termination is bounded by
    /// the largest space-group order (192).
    pub fn closure(&self) -> GroupOps {
        let mut ops: Vec<Op> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut push = |ops: &mut Vec<Op>, seen: &mut HashSet<String>, op: Op| {
            let op = op.wrapped();
            if seen.insert(op.triplet()) {
                ops.push(op);
            }
        };
        push(&mut ops, &mut seen, Op::identity());
        for op in &self.sym_ops {
            push(&mut ops, &mut seen, *op);
        }
        for cen in &self.cen_ops {
            push(&mut ops, &mut seen, Op::identity().translated(cen));
        }
        let mut i = 0;
        while i < ops.len() {
            let mut j = 0;
            while j < ops.len() {
                let forward = ops[i].combine(&ops[j]);
                push(&mut ops, &mut seen, forward);
                let backward = ops[j].combine(&ops[i]);
                push(&mut ops, &mut seen, backward);
                j += 1;
            }
            i += 1;
        }
        Self::partition(ops)
    }

    /// Splits a closed operation list into coset representatives and
    /// centering vectors. The representative for each rotation is the one
    /// with the lexicographically smallest reduced translation, which makes
    /// the partition canonical across equivalent generator sets.
    fn partition(ops: Vec<Op>) -> GroupOps {
        let mut cen_ops: Vec<Tran> = Vec::new();
        for op in &ops {
            if op.rot == Op::identity().rot {
                cen_ops.push(op.tran);
            }
        }
        cen_ops.sort_by_key(|t| (t[0], t[1], t[2]));

        let mut rot_order: Vec<[i32; 9]> = Vec::new();
        let mut best: HashMap<[i32; 9], Op> = HashMap::new();
        for op in &ops {
            let key = rot_key(op);
            // Compare the representative over every centering shift.
            match best.entry(key) {
                Entry::Vacant(slot) => {
                    rot_order.push(key);
                    slot.insert(*op);
                }
                Entry::Occupied(mut slot) => {
                    if tran_key(op) < tran_key(slot.get()) {
                        slot.insert(*op);
                    }
                }
            }
        }
        let sym_ops = rot_order.into_iter().map(|k| best[&k]).collect();
        GroupOps { sym_ops, cen_ops }
    }

    /// Re-expresses every generator and centering vector in another basis.
    pub fn transformed_by(&self, cob: &Op) -> Result<GroupOps, Error> {
        let mut sym_ops = Vec::with_capacity(self.sym_ops.len());
        for op in &self.sym_ops {
            sym_ops.push(op.transform_by(cob)?);
        }
        let mut cen_ops: Vec<Tran> = Vec::new();
        for cen in &self.cen_ops {
            let moved = Op::identity().translated(cen).transform_by(cob)?;
            if !cen_ops.contains(&moved.tran) {
                cen_ops.push(moved.tran);
            }
        }
        Ok(GroupOps { sym_ops, cen_ops })
    }

    /// Set comparison on canonical triplet strings; the insertion order of
    /// two closures of equivalent generator sets may differ.
    pub fn is_same_group(&self, other: &GroupOps) -> bool {
        self.canonical_key() == other.canonical_key()
    }

    /// Sorted canonical serializations of every operation in the group.
    pub fn canonical_key(&self) -> Vec<String> {
        let mut key: Vec<String> = self.iter().map(|op| op.triplet()).collect();
        key.sort();
        key.dedup();
        key
    }

    /// Minimal per-axis sampling divisors compatible with every fractional
    /// translation in the group; a grid of size `(fx·k, fy·k, fz·k)` maps
    /// onto itself under all operations. Identity-only groups yield
    /// `[1, 1, 1]`.
    pub fn find_grid_factors(&self) -> [i32; 3] {
        let den = Op::DEN;
        let mut factors = [1i32; 3];
        for op in self.iter() {
            for i in 0..3 {
                let t = op.tran[i].rem_euclid(den);
                if t != 0 {
                    factors[i] = lcm(factors[i], den / gcd(den as u32, t as u32) as i32);
                }
            }
        }
        // Axes exchanged by a rotation must share a factor.
        let mut changed = true;
        while changed {
            changed = false;
            for op in self.iter() {
                for i in 0..3 {
                    for j in 0..3 {
                        if i != j && op.rot[(i, j)] != 0 && factors[i] != factors[j] {
                            let f = lcm(factors[i], factors[j]);
                            factors[i] = f;
                            factors[j] = f;
                            changed = true;
                        }
                    }
                }
            }
        }
        factors
    }
}

fn rot_key(op: &Op) -> [i32; 9] {
    let mut key = [0i32; 9];
    for (i, e) in op.rot.iter().enumerate() {
        key[i] = *e;
    }
    key
}

fn tran_key(op: &Op) -> (i32, i32, i32) {
    let t = op.wrapped().tran;
    (t[0], t[1], t[2])
}

fn lcm(a: i32, b: i32) -> i32 {
    a / gcd(a as u32, b as u32) as i32 * b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::hall::{generators_from_hall, symops_from_hall};

    #[test]
    fn closure_of_p21_has_order_two() {
        let gens = generators_from_hall("P 2yb").unwrap();
        let group = gens.closure();
        assert_eq!(group.order(), 2);
        assert_eq!(group.find_grid_factors(), [1, 2, 1]);
    }

    #[test]
    fn closure_of_p61_has_order_six() {
        let group = symops_from_hall("P 61").unwrap();
        assert_eq!(group.order(), 6);
        assert_eq!(group.find_grid_factors(), [1, 1, 6]);
    }

    #[test]
    fn identity_only_group_needs_no_grid_restriction() {
        let group = symops_from_hall("P 1").unwrap();
        assert_eq!(group.order(), 1);
        assert_eq!(group.find_grid_factors(), [1, 1, 1]);
    }

    #[test]
    fn centering_cosets_are_counted() {
        // F222: point group order 4, four lattice points.
        let group = symops_from_hall("F 2 2").unwrap();
        assert_eq!(group.sym_ops.len(), 4);
        assert_eq!(group.cen_ops.len(), 4);
        assert_eq!(group.order(), 16);
    }

    #[test]
    fn iteration_lists_representatives_first() {
        let group = symops_from_hall("I 4").unwrap();
        let ops: Vec<Op> = group.iter().collect();
        assert_eq!(ops.len(), 8);
        for (rep, got) in group.sym_ops.iter().zip(&ops) {
            assert_eq!(rep, got);
        }
    }

    #[test]
    fn screw_axis_grid_factor_follows_translation() {
        let group = symops_from_hall("P 4w").unwrap(); // P41
        assert_eq!(group.find_grid_factors(), [1, 1, 4]);
    }

    #[test]
    fn cubic_grid_factors_are_linked_across_axes() {
        let group = symops_from_hall("P 2ac 2ab 3").unwrap(); // P213
        let f = group.find_grid_factors();
        assert_eq!(f[0], f[1]);
        assert_eq!(f[1], f[2]);
    }

    #[test]
    fn closure_is_idempotent() {
        let group = symops_from_hall("-P 4c 2").unwrap(); // P42/mmc
        let again = group.closure();
        assert!(group.is_same_group(&again));
        assert_eq!(group.order(), again.order());
    }

    #[test]
    fn partition_picks_minimal_translations() {
        let group = symops_from_hall("I 2yb").unwrap();
        // I 1 21 1: the screw representative combines with the body
        // centering; the chosen coset representative is the smaller one.
        for op in &group.sym_ops {
            for cen in &group.cen_ops {
                let shifted = op.translated(cen);
                assert!(tran_key(op) <= tran_key(&shifted));
            }
        }
    }
}
