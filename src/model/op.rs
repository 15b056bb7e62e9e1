//! The symmetry-operation value type and its exact integer algebra.
//!
//! An [`Op`] is an affine map `x ↦ R·x + t/DEN` where `R` is a 3×3 integer
//! rotation matrix and `t` an integer translation numerator over the fixed
//! denominator [`Op::DEN`]. All arithmetic is exact; floating point only
//! appears when an operation is applied to fractional coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::Error;
use crate::io::triplet;

/// Integer rotation part of a symmetry operation.
pub type Rot = Matrix3<i32>;
/// Integer translation numerators, in units of `1/Op::DEN`.
pub type Tran = Vector3<i32>;

/// A crystallographic symmetry operation with exact rational translation.
///
/// Entries of `rot` stay in `{-1, 0, 1}` for group operations; larger
/// magnitudes occur only transiently while composing basis changes.
/// Translations are stored unreduced, so non-crystallographic operations
/// such as `"x+3"` survive a parse/serialize round trip. [`Op::combine`]
/// and [`Op::inverse`] reduce their output into `[0, DEN)`.
#[derive(Debug, Clone, Copy, Eq)]
pub struct Op {
    pub rot: Rot,
    pub tran: Tran,
}

impl Op {
    /// Fixed denominator for translations. 24 represents every half, third,
    /// quarter, sixth and eighth used in the space-group tables exactly.
    pub const DEN: i32 = 24;

    pub fn new(rot: Rot, tran: Tran) -> Self {
        Self { rot, tran }
    }

    /// The identity operation `x,y,z`.
    pub fn identity() -> Self {
        Self {
            rot: Rot::identity(),
            tran: Tran::zeros(),
        }
    }

    /// The inversion operation `-x,-y,-z`.
    pub fn inversion() -> Self {
        Self {
            rot: -Rot::identity(),
            tran: Tran::zeros(),
        }
    }

    /// Determinant of the rotation part.
    pub fn det_rot(&self) -> i32 {
        det3(&self.rot)
    }

    /// Group multiplication: `self.combine(rhs)` maps `x` to
    /// `self(rhs(x))`. The result's translation is reduced into
    /// `[0, DEN)`, so composing crystallographic operations always yields
    /// a crystallographic operation. Composition is non-commutative.
    pub fn combine(&self, rhs: &Op) -> Op {
        Op {
            rot: self.rot * rhs.rot,
            tran: (self.rot * rhs.tran + self.tran).map(wrap),
        }
    }

    /// Inverse operation.
    ///
    /// Fails when `|det(R)| != 1`: such a matrix (e.g. the determinant-3
    /// rhombohedral-to-hexagonal basis change) is a valid basis-change
    /// operator but not a group operation.
    pub fn inverse(&self) -> Result<Op, Error> {
        let det = self.det_rot();
        if det != 1 && det != -1 {
            return Err(Error::not_invertible(self.triplet()));
        }
        // det = ±1, so R⁻¹ = adj(R)/det = adj(R)·det.
        let rot = adjugate(&self.rot).map(|e| e * det);
        let tran = (rot * -self.tran).map(wrap);
        Ok(Op { rot, tran })
    }

    /// Returns the operation shifted by a centering vector, reduced.
    pub fn translated(&self, shift: &Tran) -> Op {
        Op {
            rot: self.rot,
            tran: (self.tran + shift).map(wrap),
        }
    }

    /// Canonical form: same rotation, translation reduced into `[0, DEN)`.
    pub fn wrapped(&self) -> Op {
        Op {
            rot: self.rot,
            tran: self.tran.map(wrap),
        }
    }

    /// Conjugation by a basis-change operator: `cob ∘ self ∘ cob⁻¹`.
    ///
    /// `cob` may have `|det| > 1` (e.g. determinant 3 for the
    /// rhombohedral/hexagonal change); the division by the determinant is
    /// carried out exactly and fails if the transformed operation is not
    /// integral in the new basis.
    pub fn transform_by(&self, cob: &Op) -> Result<Op, Error> {
        let det = cob.det_rot();
        if det == 0 {
            return Err(Error::basis_change(cob.triplet()));
        }
        let adj = adjugate(&cob.rot);
        // cob ∘ self = (C·R, C·t + c); appending cob⁻¹ = (adj/det, -adj·c/det)
        // keeps everything integral until the final division.
        let rot_num = cob.rot * self.rot * adj;
        let tran_num =
            (cob.rot * self.tran + cob.tran).map(|e| e * det) - cob.rot * self.rot * adj * cob.tran;
        if rot_num.iter().any(|e| e % det != 0) || tran_num.iter().any(|e| e % det != 0) {
            return Err(Error::basis_change(cob.triplet()));
        }
        Ok(Op {
            rot: rot_num.map(|e| e / det),
            tran: tran_num.map(|e| (e / det).rem_euclid(Self::DEN)),
        })
    }

    /// Applies the operation to a fractional coordinate.
    ///
    /// This is the entry point grid-symmetrization and neighbor-search
    /// consumers use; everything else in this crate is exact integer math.
    pub fn apply(&self, pos: &Point3<f64>) -> Point3<f64> {
        let rot = self.rot.map(|e| e as f64);
        let tran = self.tran.map(|e| e as f64 / Self::DEN as f64);
        Point3::from(rot * pos.coords + tran)
    }

    /// Serializes the operation in triplet notation, e.g. `"-y,x,z+1/4"`.
    pub fn triplet(&self) -> String {
        triplet::make_triplet(self)
    }

    /// Compares against a triplet string, parsing it once.
    ///
    /// Equality holds iff the canonical serializations agree, so
    /// `"x+1,y,z"` equals `"x,y,z"`.
    pub fn equals_triplet(&self, text: &str) -> Result<bool, Error> {
        Ok(*self == triplet::parse_triplet(text)?)
    }
}

impl PartialEq for Op {
    fn eq(&self, other: &Self) -> bool {
        self.rot == other.rot && self.tran.map(wrap) == other.tran.map(wrap)
    }
}

impl Hash for Op {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for e in self.rot.iter() {
            e.hash(state);
        }
        for e in self.tran.iter() {
            wrap(*e).hash(state);
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.triplet())
    }
}

fn wrap(e: i32) -> i32 {
    e.rem_euclid(Op::DEN)
}

fn det3(m: &Rot) -> i32 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Adjugate (transposed cofactor matrix); `m · adj(m) = det(m) · I`.
pub(crate) fn adjugate(m: &Rot) -> Rot {
    Rot::new(
        m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
        m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
        m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
        m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::triplet::parse_triplet;

    fn op(s: &str) -> Op {
        parse_triplet(s).unwrap()
    }

    #[test]
    fn combine_matches_reference_products() {
        let a = op("x+1/3,z,-y");
        assert_eq!(a.combine(&a).triplet(), "x+2/3,-y,-z");

        let a = op("-y+1/4,x+3/4,z+1/4");
        let b = op("-x+1/2,y,-z");
        assert_eq!(a.combine(&b).triplet(), "-y+1/4,-x+1/4,-z+1/4");
        let c = op("-y,-z,-x");
        assert_eq!(a.combine(&c).triplet(), "z+1/4,-y+3/4,-x+1/4");
        assert_eq!(b.combine(&c), op("y+1/2,-z,x"));
        assert_eq!(c.combine(&b), op("-y,z,x+1/2"));
    }

    #[test]
    fn combine_is_not_commutative() {
        let b = op("-x+1/2,y,-z");
        let c = op("-y,-z,-x");
        assert_ne!(b.combine(&c), c.combine(&b));
    }

    #[test]
    fn combine_is_associative() {
        let a = op("-y+1/4,x+3/4,z+1/4");
        let b = op("-x+1/2,y,-z");
        let c = op("-y,-z,-x");
        assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn inverse_round_trips() {
        for xyz in ["-y,-x,-z+1/4", "y,-x,z+3/4", "y,x,-z", "y+1/2,x,-z+1/3"] {
            let o = op(xyz);
            let inv = o.inverse().unwrap();
            assert!(o.combine(&inv).equals_triplet("x,y,z").unwrap());
            assert_eq!(inv.inverse().unwrap(), o);
        }
    }

    #[test]
    fn inverse_rejects_det_3() {
        let o = op("-y+z,x+z,-x+y+z");
        assert_eq!(o.det_rot(), 3);
        assert!(matches!(o.inverse(), Err(Error::NotInvertible { .. })));
    }

    #[test]
    fn equality_is_modular() {
        assert_eq!(op("x+1,y,z"), op("x,y,z"));
        assert!(op("x+3,y,z").equals_triplet("x,y,z").unwrap());
        assert_ne!(op("x+1/2,y,z"), op("x,y,z"));
    }

    #[test]
    fn apply_transforms_fractional_coordinates() {
        let o = op("-y,x+1/2,z+1/4");
        let p = o.apply(&Point3::new(0.1, 0.2, 0.3));
        assert!((p.x - -0.2).abs() < 1e-12);
        assert!((p.y - 0.6).abs() < 1e-12);
        assert!((p.z - 0.55).abs() < 1e-12);
    }

    #[test]
    fn basis_change_by_det_3_matrix_is_exact() {
        let cob = op("-y+z,x+z,-x+y+z");
        let three_fold = op("-y,x-y,z");
        let t = three_fold.transform_by(&cob).unwrap();
        assert_eq!(t.triplet(), "z,x,y");
    }
}
