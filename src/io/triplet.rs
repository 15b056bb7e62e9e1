//! Triplet notation: parsing and serialization of symmetry operations as
//! comma-separated axis expressions such as `"-y+1/4,x+3/4,z+1/4"`.
//!
//! Parsing is deliberately permissive about spelling (term order, letter
//! case, translations outside one unit cell); serialization always emits
//! the canonical form: x, then y, then z, then the reduced fraction.

use nalgebra::{Matrix3, Vector3};

use crate::error::Error;
use crate::model::op::Op;

/// Parses one axis expression into `([x, y, z] coefficients, translation)`.
///
/// Accepts terms in any order and case (`"Y-x"`, `"-1/2+y"`), fractions
/// with any denominator that divides into [`Op::DEN`] exactly, and
/// non-crystallographic translations (`"x+3"`, `"-2+y"`), which are kept
/// as given rather than wrapped into `[0, 1)`.
pub fn parse_triplet_part(text: &str) -> Result<([i32; 3], i32), Error> {
    let mut coefs = [0i32; 3];
    let mut tran = 0i32;
    let mut sign = 1i32;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            ' ' | '\t' => {}
            '+' => sign = 1,
            '-' => sign = -1,
            'x' | 'X' => {
                coefs[0] += sign;
                sign = 1;
            }
            'y' | 'Y' => {
                coefs[1] += sign;
                sign = 1;
            }
            'z' | 'Z' => {
                coefs[2] += sign;
                sign = 1;
            }
            '0'..='9' => {
                let mut num = ch as i32 - '0' as i32;
                while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                    num = num * 10 + d as i32;
                    chars.next();
                }
                if chars.peek() == Some(&'/') {
                    chars.next();
                    let mut den = 0i32;
                    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
                        den = den * 10 + d as i32;
                        chars.next();
                    }
                    if den == 0 {
                        return Err(Error::triplet(text, "/"));
                    }
                    if (num * Op::DEN) % den != 0 {
                        return Err(Error::fraction(text, num, den, Op::DEN));
                    }
                    tran += sign * num * Op::DEN / den;
                } else {
                    tran += sign * num * Op::DEN;
                }
                sign = 1;
            }
            other => return Err(Error::triplet(text, other.to_string())),
        }
    }
    Ok((coefs, tran))
}

/// Canonical inverse of [`parse_triplet_part`]: coefficients in x, y, z
/// order, then the translation as a fraction reduced to lowest terms.
pub fn make_triplet_part(a: i32, b: i32, c: i32, w: i32) -> String {
    let mut s = String::new();
    for (coef, letter) in [(a, 'x'), (b, 'y'), (c, 'z')] {
        if coef == 0 {
            continue;
        }
        if coef < 0 {
            s.push('-');
        } else if !s.is_empty() {
            s.push('+');
        }
        if coef.abs() != 1 {
            s.push_str(&coef.abs().to_string());
        }
        s.push(letter);
    }
    if w != 0 {
        if w < 0 {
            s.push('-');
        } else if !s.is_empty() {
            s.push('+');
        }
        let g = gcd(w.unsigned_abs(), Op::DEN as u32) as i32;
        s.push_str(&(w.abs() / g).to_string());
        let den = Op::DEN / g;
        if den != 1 {
            s.push('/');
            s.push_str(&den.to_string());
        }
    }
    if s.is_empty() {
        s.push('0');
    }
    s
}

/// Parses a full triplet (three comma-separated parts) into an [`Op`].
pub fn parse_triplet(text: &str) -> Result<Op, Error> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(Error::triplet(text, ","));
    }
    let mut rot = Matrix3::zeros();
    let mut tran = Vector3::zeros();
    for (i, part) in parts.iter().enumerate() {
        let (coefs, w) = parse_triplet_part(part)?;
        for (j, coef) in coefs.into_iter().enumerate() {
            rot[(i, j)] = coef;
        }
        tran[i] = w;
    }
    Ok(Op::new(rot, tran))
}

/// Serializes an operation as a triplet string; used by [`Op::triplet`].
pub fn make_triplet(op: &Op) -> String {
    (0..3)
        .map(|i| make_triplet_part(op.rot[(i, 0)], op.rot[(i, 1)], op.rot[(i, 2)], op.tran[i]))
        .collect::<Vec<_>>()
        .join(",")
}

pub(crate) fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    const D: i32 = Op::DEN;

    // Every canonical single-term spelling with its coefficient row.
    const CANONICAL_SINGLES: &[(&str, [i32; 4])] = &[
        ("x", [1, 0, 0, 0]),
        ("z", [0, 0, 1, 0]),
        ("-y", [0, -1, 0, 0]),
        ("-z", [0, 0, -1, 0]),
        ("x-y", [1, -1, 0, 0]),
        ("-x+y", [-1, 1, 0, 0]),
        ("x+1/2", [1, 0, 0, D / 2]),
        ("y+1/4", [0, 1, 0, D / 4]),
        ("z+3/4", [0, 0, 1, D * 3 / 4]),
        ("z+1/3", [0, 0, 1, D / 3]),
        ("z+1/6", [0, 0, 1, D / 6]),
        ("z+2/3", [0, 0, 1, D * 2 / 3]),
        ("z+5/6", [0, 0, 1, D * 5 / 6]),
        ("-x+1/4", [-1, 0, 0, D / 4]),
        ("-y+1/2", [0, -1, 0, D / 2]),
        ("-y+3/4", [0, -1, 0, D * 3 / 4]),
        ("-z+1/3", [0, 0, -1, D / 3]),
        ("-z+1/6", [0, 0, -1, D / 6]),
        ("-z+2/3", [0, 0, -1, D * 2 / 3]),
        ("-z+5/6", [0, 0, -1, D * 5 / 6]),
    ];

    // Equivalent spellings with reordered terms, mixed case and
    // translations outside [0, 1).
    const OTHER_SINGLES: &[(&str, [i32; 4])] = &[
        ("Y-x", [-1, 1, 0, 0]),
        ("-X", [-1, 0, 0, 0]),
        ("-1/2+Y", [0, 1, 0, -D / 2]),
        ("x+3", [1, 0, 0, D * 3]),
        ("1+Y", [0, 1, 0, D]),
        ("-2+Y", [0, 1, 0, -D * 2]),
        ("-z-5/6", [0, 0, -1, -D * 5 / 6]),
    ];

    #[test]
    fn parses_canonical_singles() {
        for (text, row) in CANONICAL_SINGLES {
            let (coefs, w) = parse_triplet_part(text).unwrap();
            assert_eq!((coefs, w), ([row[0], row[1], row[2]], row[3]), "{text}");
        }
    }

    #[test]
    fn parses_noncanonical_spellings() {
        for (text, row) in OTHER_SINGLES {
            let (coefs, w) = parse_triplet_part(text).unwrap();
            assert_eq!((coefs, w), ([row[0], row[1], row[2]], row[3]), "{text}");
        }
    }

    #[test]
    fn make_part_round_trips_canonical_singles() {
        assert_eq!(make_triplet_part(0, 0, 0, 1), format!("1/{D}"));
        for (text, row) in CANONICAL_SINGLES {
            assert_eq!(make_triplet_part(row[0], row[1], row[2], row[3]), *text);
        }
    }

    #[test]
    fn random_triplet_round_trips() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let parts: Vec<&str> = (0..3)
                .map(|_| CANONICAL_SINGLES.choose(&mut rng).unwrap().0)
                .collect();
            let text = parts.join(",");
            let op = parse_triplet(&text).unwrap();
            assert_eq!(op.triplet(), text);
            assert_eq!(parse_triplet(&op.triplet()).unwrap(), op);
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(matches!(
            parse_triplet_part("x+w"),
            Err(Error::Triplet { .. })
        ));
        assert!(matches!(
            parse_triplet_part("x+1/5"),
            Err(Error::Fraction { .. })
        ));
        assert!(matches!(parse_triplet("x,y"), Err(Error::Triplet { .. })));
    }

    #[test]
    fn large_translations_survive_round_trip() {
        let op = parse_triplet("x+3,y,z").unwrap();
        assert_eq!(op.triplet(), "x+3,y,z");
    }
}
