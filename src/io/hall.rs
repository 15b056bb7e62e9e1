//! Hall-symbol interpretation.
//!
//! A Hall symbol packs a space group into a lattice letter, a short list
//! of rotation tokens and an optional change of basis, e.g. `"-P 2ybc"`
//! or `"R 3 (-y+z,x+z,-x+y+z)"`. Each token becomes one generator; the
//! closure of the generators (with the centering translations) is the
//! full group.
//!
//! The supported grammar covers lattice letters `P A B C I F R`, rotation
//! orders 1/2/3/4/6 with screw subscripts, explicit axes `x y z`, the
//! diagonal markers `' " *`, translation letters `a b c n u v w d`, and a
//! trailing parenthesis holding either a triplet change of basis or an
//! origin shift in twelfths.

use nalgebra::Matrix3;

use crate::error::Error;
use crate::model::group::GroupOps;
use crate::model::op::{Op, Rot, Tran};

use super::triplet::parse_triplet;

/// Interprets a Hall symbol into its minimal generator set.
///
/// `sym_ops` starts with the identity (and the inversion for
/// centrosymmetric `-X ...` symbols) followed by one operation per
/// rotation token; `cen_ops` holds the zero vector plus the lattice
/// centering translations.
pub fn generators_from_hall(hall: &str) -> Result<GroupOps, Error> {
    let text = hall.trim();
    let (body, cob) = match text.find('(') {
        Some(start) => {
            let end = text
                .rfind(')')
                .ok_or_else(|| Error::hall(hall, "unclosed parenthesis"))?;
            (&text[..start], Some(&text[start + 1..end]))
        }
        None => (text, None),
    };

    let mut tokens = body.split_whitespace();
    let lattice = tokens
        .next()
        .ok_or_else(|| Error::hall(hall, "empty symbol"))?;
    let (centrosymmetric, lattice_letter) = match lattice.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, lattice),
    };
    let mut chars = lattice_letter.chars();
    let letter = chars
        .next()
        .ok_or_else(|| Error::hall(hall, "missing lattice letter"))?;
    if chars.next().is_some() {
        return Err(Error::hall(hall, "malformed lattice symbol"));
    }

    let mut cen_ops: Vec<Tran> = vec![Tran::zeros()];
    for &(x, y, z) in centering_vectors(letter)
        .ok_or_else(|| Error::hall(hall, format!("unknown lattice letter '{letter}'")))?
    {
        cen_ops.push(Tran::new(x, y, z));
    }

    let mut sym_ops = vec![Op::identity()];
    if centrosymmetric {
        sym_ops.push(Op::inversion());
    }

    let mut prev_order = 0u32;
    for (idx, token) in tokens.enumerate() {
        let op = parse_rotation_token(token, idx, prev_order)
            .map_err(|details| Error::hall(hall, details))?;
        prev_order = op.order;
        sym_ops.push(op.op);
    }

    let ops = GroupOps { sym_ops, cen_ops };
    match cob {
        Some(content) => {
            let cob_op = parse_change_of_basis(content).map_err(|d| Error::hall(hall, d))?;
            ops.transformed_by(&cob_op)
        }
        None => Ok(ops),
    }
}

/// Interprets a Hall symbol and expands it to the full group.
pub fn symops_from_hall(hall: &str) -> Result<GroupOps, Error> {
    Ok(generators_from_hall(hall)?.closure())
}

struct TokenOp {
    op: Op,
    order: u32,
}

#[derive(Clone, Copy, PartialEq)]
enum Direction {
    Principal(usize),
    Prime,
    DoublePrime,
    Star,
}

fn parse_rotation_token(token: &str, idx: usize, prev_order: u32) -> Result<TokenOp, String> {
    let mut chars = token.chars().peekable();
    let improper = chars.peek() == Some(&'-');
    if improper {
        chars.next();
    }
    let order = match chars.next() {
        Some(d @ ('1' | '2' | '3' | '4' | '6')) => d.to_digit(10).unwrap(),
        _ => return Err(format!("bad rotation order in token '{token}'")),
    };
    let mut screw = 0u32;
    if matches!(order, 3 | 4 | 6) {
        if let Some(s) = chars.peek().and_then(|c| c.to_digit(10)) {
            if s == 0 || s >= order {
                return Err(format!("bad screw subscript in token '{token}'"));
            }
            screw = s;
            chars.next();
        }
    }

    let mut direction: Option<Direction> = None;
    let mut tran = Tran::zeros();
    for ch in chars {
        match ch {
            'x' => direction = Some(Direction::Principal(0)),
            'y' => direction = Some(Direction::Principal(1)),
            'z' => direction = Some(Direction::Principal(2)),
            '\'' => direction = Some(Direction::Prime),
            '"' => direction = Some(Direction::DoublePrime),
            '*' => direction = Some(Direction::Star),
            'a' => tran[0] += Op::DEN / 2,
            'b' => tran[1] += Op::DEN / 2,
            'c' => tran[2] += Op::DEN / 2,
            'n' => tran += Tran::from_element(Op::DEN / 2),
            'u' => tran[0] += Op::DEN / 4,
            'v' => tran[1] += Op::DEN / 4,
            'w' => tran[2] += Op::DEN / 4,
            'd' => tran += Tran::from_element(Op::DEN / 4),
            other => return Err(format!("unknown modifier '{other}' in token '{token}'")),
        }
    }

    let direction = match direction {
        Some(d) => d,
        None => default_direction(order, idx, prev_order)
            .ok_or_else(|| format!("token '{token}' needs an explicit axis direction"))?,
    };

    let rot = rotation_matrix(order, direction)
        .ok_or_else(|| format!("rotation order {order} is invalid for the axis of '{token}'"))?;
    if screw != 0 {
        match direction {
            Direction::Principal(axis) => {
                tran[axis] += (screw * Op::DEN as u32 / order) as i32;
            }
            _ => return Err(format!("screw subscript needs a principal axis in '{token}'")),
        }
    }
    let rot = if improper { -rot } else { rot };
    Ok(TokenOp {
        op: Op::new(rot, tran).wrapped(),
        order,
    })
}

/// Default axis rules from Hall's notation: the first rotation is about c;
/// a twofold after a 2/4 is about a, after a 3/6 about a-b; a threefold in
/// third place is about the body diagonal. A onefold never needs an axis.
fn default_direction(order: u32, idx: usize, prev_order: u32) -> Option<Direction> {
    if order == 1 {
        return Some(Direction::Principal(2));
    }
    match idx {
        0 => Some(Direction::Principal(2)),
        1 if order == 2 && matches!(prev_order, 2 | 4) => Some(Direction::Principal(0)),
        1 if order == 2 && matches!(prev_order, 3 | 6) => Some(Direction::Prime),
        2 if order == 3 => Some(Direction::Star),
        _ => None,
    }
}

fn rotation_matrix(order: u32, direction: Direction) -> Option<Rot> {
    match direction {
        Direction::Principal(axis) => {
            let about_c = match order {
                1 => Rot::identity(),
                2 => Matrix3::new(-1, 0, 0, 0, -1, 0, 0, 0, 1),
                3 => Matrix3::new(0, -1, 0, 1, -1, 0, 0, 0, 1),
                4 => Matrix3::new(0, -1, 0, 1, 0, 0, 0, 0, 1),
                6 => Matrix3::new(1, -1, 0, 1, 0, 0, 0, 0, 1),
                _ => return None,
            };
            // Cyclic conjugation c -> a -> b keeps one table of matrices.
            let p = Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0);
            Some(match axis {
                0 => p * about_c * p.transpose(),
                1 => p * p * about_c * (p * p).transpose(),
                _ => about_c,
            })
        }
        Direction::Prime if order == 2 => Some(Matrix3::new(0, -1, 0, -1, 0, 0, 0, 0, -1)),
        Direction::DoublePrime if order == 2 => Some(Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, -1)),
        Direction::Star if order == 3 => Some(Matrix3::new(0, 0, 1, 1, 0, 0, 0, 1, 0)),
        _ => None,
    }
}

fn centering_vectors(letter: char) -> Option<&'static [(i32, i32, i32)]> {
    const H: i32 = Op::DEN / 2;
    const T1: i32 = Op::DEN / 3;
    const T2: i32 = 2 * Op::DEN / 3;
    match letter.to_ascii_uppercase() {
        'P' => Some(&[]),
        'A' => Some(&[(0, H, H)]),
        'B' => Some(&[(H, 0, H)]),
        'C' => Some(&[(H, H, 0)]),
        'I' => Some(&[(H, H, H)]),
        'F' => Some(&[(0, H, H), (H, 0, H), (H, H, 0)]),
        'R' => Some(&[(T2, T1, T1), (T1, T2, T2)]),
        _ => None,
    }
}

/// Parses the trailing parenthesis: a triplet change of basis when it
/// contains commas, otherwise an origin shift given in twelfths.
fn parse_change_of_basis(content: &str) -> Result<Op, String> {
    if content.contains(',') {
        return parse_triplet(content).map_err(|e| e.to_string());
    }
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(format!("bad origin shift '({content})'"));
    }
    let mut tran = Tran::zeros();
    for (i, field) in fields.iter().enumerate() {
        let twelfths: i32 = field
            .parse()
            .map_err(|_| format!("bad origin shift component '{field}'"))?;
        tran[i] = twelfths * (Op::DEN / 12);
    }
    Ok(Op::new(Rot::identity(), tran))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triplets(ops: &[Op]) -> Vec<String> {
        ops.iter().map(|op| op.triplet()).collect()
    }

    #[test]
    fn reference_generator_matrices() {
        let g = generators_from_hall("p -2xc").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "-x,y,z+1/2"]);

        let g = generators_from_hall("p 3*").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "z,x,y"]);

        let g = generators_from_hall("p 4vw").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "-y,x+1/4,z+1/4"]);

        let g = generators_from_hall("p 61 2 (0 0 -1)").unwrap();
        assert_eq!(
            triplets(&g.sym_ops),
            ["x,y,z", "x-y,x,z+1/6", "-y,-x,-z+5/6"]
        );
    }

    #[test]
    fn default_twofold_direction_follows_preceding_order() {
        let g = generators_from_hall("P -2 -2").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "x,y,-z", "-x,y,z"]);
    }

    #[test]
    fn centrosymmetric_symbol_adds_inversion() {
        let g = generators_from_hall("-P 2yb").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "-x,-y,-z", "-x,y+1/2,-z"]);
    }

    #[test]
    fn lattice_letter_sets_centering() {
        let g = generators_from_hall("I 4").unwrap();
        assert_eq!(g.cen_ops.len(), 2);
        assert_eq!(g.cen_ops[1], Tran::new(12, 12, 12));
        let g = generators_from_hall("F 2 2").unwrap();
        assert_eq!(g.cen_ops.len(), 4);
        let g = generators_from_hall("R 3").unwrap();
        assert_eq!(g.cen_ops.len(), 3);
    }

    #[test]
    fn rhombohedral_settings_agree_after_basis_change() {
        let a = generators_from_hall("P 3*").unwrap();
        let b = generators_from_hall("R 3 (-y+z,x+z,-x+y+z)").unwrap();
        assert_eq!(triplets(&a.sym_ops), triplets(&b.sym_ops));
        assert_eq!(a.cen_ops, b.cen_ops);

        let a = symops_from_hall("P 3*").unwrap();
        let b = symops_from_hall("R 3 (-y+z,x+z,-x+y+z)").unwrap();
        assert!(a.is_same_group(&b));
    }

    #[test]
    fn screw_subscripts_translate_along_the_axis() {
        let g = generators_from_hall("P 61").unwrap();
        assert_eq!(g.sym_ops[1].triplet(), "x-y,x,z+1/6");
        let g = generators_from_hall("P 4w 2c").unwrap();
        assert_eq!(triplets(&g.sym_ops), ["x,y,z", "-y,x,z+1/4", "x,-y,-z+1/2"]);
    }

    #[test]
    fn rejects_malformed_symbols() {
        assert!(matches!(generators_from_hall(""), Err(Error::Hall { .. })));
        assert!(matches!(
            generators_from_hall("Q 2"),
            Err(Error::Hall { .. })
        ));
        assert!(matches!(
            generators_from_hall("P 5"),
            Err(Error::Hall { .. })
        ));
        assert!(matches!(
            generators_from_hall("P 2 2 4"),
            Err(Error::Hall { .. })
        ));
        assert!(matches!(
            generators_from_hall("P 2q"),
            Err(Error::Hall { .. })
        ));
        assert!(matches!(
            generators_from_hall("P 3 (0 0"),
            Err(Error::Hall { .. })
        ));
    }

    #[test]
    fn full_group_orders_match_the_tables() {
        for (hall, order) in [
            ("P 1", 1),
            ("-P 1", 2),
            ("P 61 2 (0 0 -1)", 12),
            ("-P 4c 2", 16),
            ("F 4d 2 3", 96),
            ("-F 4vw 2vw 3", 192),
            ("-I 4bd 2c 3", 96),
            ("-P 6c 2c", 24),
        ] {
            let g = symops_from_hall(hall).unwrap();
            assert_eq!(g.order(), order, "{hall}");
        }
    }
}
