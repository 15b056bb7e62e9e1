//! Catalogue lookups: by number, by name and by operation set.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::db::table::TABLE;
use crate::error::Error;
use crate::model::group::GroupOps;
use crate::model::spacegroup::SpaceGroup;

/// All catalogue entries in table order.
pub fn spacegroup_table() -> &'static [SpaceGroup] {
    TABLE
}

/// Looks up the default setting of a sequential number (1-230).
pub fn find_spacegroup_by_number(number: i32) -> Option<&'static SpaceGroup> {
    TABLE.iter().find(|sg| sg.number == number)
}

/// Looks up an entry by its legacy CCP4 code (e.g. `4005`).
pub fn find_spacegroup_by_ccp4(code: i32) -> Option<&'static SpaceGroup> {
    TABLE.iter().find(|sg| sg.ccp4 == code)
}

/// Looks up an entry by name.
///
/// Accepts full Hermann-Mauguin symbols, compressed short names
/// (`"P21"`, `"H32"`), extended symbols with a setting qualifier
/// (`"R 3 2:R"`), sequential numbers and CCP4 codes given as digit
/// strings, and the 2002 e-glide symbols (`"Aem2"`). Comparison ignores
/// letter case and spacing. Returns `None` when nothing matches.
pub fn find_spacegroup_by_name(name: &str) -> Option<&'static SpaceGroup> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if name.bytes().all(|b| b.is_ascii_digit()) {
        let code: i32 = name.parse().ok()?;
        return if (1..=230).contains(&code) {
            find_spacegroup_by_number(code)
        } else {
            find_spacegroup_by_ccp4(code)
        };
    }

    let (base, ext) = match name.rsplit_once(':') {
        Some((base, ext)) => {
            let ext = ext.trim();
            if !matches!(ext, "H" | "h" | "R" | "r" | "1" | "2") {
                return None;
            }
            (base, Some(ext.to_ascii_uppercase()))
        }
        None => (name, None),
    };
    let mut query = squash(base);
    if let Some(canonical) = E_GLIDE_ALIASES
        .iter()
        .find_map(|&(e, old)| (query == e).then_some(old))
    {
        query = canonical.to_string();
    }

    TABLE.iter().find(|sg| {
        if let Some(ext) = &ext {
            if sg.ext != ext {
                return false;
            }
        }
        squash(sg.hm) == query || squash(&sg.short_name()) == query
    })
}

/// Finds the catalogue entry whose full operation set equals `group`.
///
/// The comparison is on closed groups, so any spelling of the same
/// setting (reordered generators, shifted coset representatives) maps to
/// the same entry.
pub fn find_spacegroup_by_ops(group: &GroupOps) -> Option<&'static SpaceGroup> {
    static INDEX: OnceLock<HashMap<Vec<String>, usize>> = OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let mut map = HashMap::new();
        for (i, sg) in TABLE.iter().enumerate() {
            map.entry(sg.operations().canonical_key()).or_insert(i);
        }
        map
    });
    index.get(&group.canonical_key()).map(|&i| &TABLE[i])
}

impl SpaceGroup {
    /// Like [`find_spacegroup_by_name`], but an unknown name is an error.
    pub fn from_name(name: &str) -> Result<&'static SpaceGroup, Error> {
        find_spacegroup_by_name(name).ok_or_else(|| Error::unknown_spacegroup(name))
    }
}

// The 2002 edition of the International Tables renamed a few a/b glides
// to the double glide 'e'; the catalogue keeps the older symbols.
const E_GLIDE_ALIASES: &[(&str, &str)] = &[
    ("AEM2", "ABM2"),
    ("AEA2", "ABA2"),
    ("CMCE", "CMCA"),
    ("CMME", "CMMA"),
    ("CCCE", "CCCA"),
];

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::hall::symops_from_hall;

    #[test]
    fn number_lookup_returns_the_default_setting() {
        assert_eq!(find_spacegroup_by_number(5).unwrap().hm, "C 1 2 1");
        assert_eq!(find_spacegroup_by_number(230).unwrap().hm, "I a -3 d");
        assert!(find_spacegroup_by_number(0).is_none());
        assert!(find_spacegroup_by_number(231).is_none());
    }

    #[test]
    fn name_lookup_accepts_many_spellings() {
        for (name, hm) in [
            ("P 21 21 2", "P 21 21 2"),
            ("P21212", "P 21 21 2"),
            ("P21", "P 1 21 1"),
            ("P 2", "P 1 2 1"),
            ("i2", "I 1 2 1"),
            ("I1211", "I 1 21 1"),
            ("Aem2", "A b m 2"),
            ("H32", "R 3 2"),
            ("R 3 2", "R 3 2"),
        ] {
            let sg = find_spacegroup_by_name(name).unwrap();
            assert_eq!(sg.hm, hm, "{name}");
        }
        assert!(find_spacegroup_by_name("abc").is_none());
        assert!(find_spacegroup_by_name("").is_none());
    }

    #[test]
    fn qualifier_selects_the_setting() {
        assert_eq!(find_spacegroup_by_name("R 3 2").unwrap().xhm(), "R 3 2:H");
        assert_eq!(find_spacegroup_by_name("R 3 2:R").unwrap().hall, "P 3* 2");
        assert_eq!(find_spacegroup_by_name("C c c e").unwrap().xhm(), "C c c a:1");
        assert!(find_spacegroup_by_name("P 4:X").is_none());
    }

    #[test]
    fn digit_strings_cover_numbers_and_ccp4_codes() {
        assert_eq!(find_spacegroup_by_name("5").unwrap().hm, "C 1 2 1");
        assert_eq!(find_spacegroup_by_name("4005").unwrap().hm, "I 1 2 1");
        assert!(find_spacegroup_by_name("4999").is_none());
    }

    #[test]
    fn from_name_turns_a_miss_into_an_error() {
        assert!(SpaceGroup::from_name("I 41 2 2").is_ok());
        assert!(matches!(
            SpaceGroup::from_name("i3"),
            Err(Error::UnknownSpaceGroup { .. })
        ));
    }

    #[test]
    fn ccp4_codes_are_consistent_with_numbers() {
        for sg in spacegroup_table() {
            assert!(sg.ccp4 == 0 || sg.ccp4 % 1000 == sg.number, "{}", sg.xhm());
        }
    }

    #[test]
    fn every_number_has_a_default_setting() {
        for number in 1..=230 {
            assert!(find_spacegroup_by_number(number).is_some(), "{number}");
        }
    }

    #[test]
    fn ops_lookup_identifies_permuted_settings() {
        let group = symops_from_hall("-P 2a 2ac (z,x,y)").unwrap();
        let sg = find_spacegroup_by_ops(&group).unwrap();
        assert_eq!(sg.hm, "P b a a");
        assert_eq!(sg.number, 54);

        let default = find_spacegroup_by_number(19).unwrap();
        assert_eq!(
            find_spacegroup_by_ops(&default.operations()).unwrap().hm,
            "P 21 21 21"
        );
    }

    #[test]
    fn every_catalogue_hall_symbol_expands() {
        for sg in spacegroup_table() {
            let group = sg.operations();
            assert!(group.order() >= 1, "{}", sg.xhm());
            assert_eq!(group.sym_ops[0], crate::model::op::Op::identity());
        }
    }
}
