//! The space-group catalogue record.

use crate::io::hall::symops_from_hall;
use crate::model::group::GroupOps;

/// One reference setting of a crystallographic space group.
///
/// The catalogue stores several settings per sequential number (unique
/// axes, cell choices, origin choices, rhombohedral/hexagonal duals);
/// the first entry for a number is its default setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpaceGroup {
    /// Sequential number, 1–230.
    pub number: i32,
    /// Legacy CCP4 code; 0 when absent. `ccp4 % 1000 == number` when set.
    pub ccp4: i32,
    /// Hermann-Mauguin symbol with spaces, e.g. `"P 1 21 1"`.
    pub hm: &'static str,
    /// Setting qualifier: `""`, `"H"`, `"R"`, `"1"` or `"2"`.
    pub ext: &'static str,
    /// Hall symbol encoding the generators of this setting.
    pub hall: &'static str,
}

impl SpaceGroup {
    /// Extended Hermann-Mauguin symbol, e.g. `"R 3 2:H"`. Equals `hm`
    /// for settings without a qualifier.
    pub fn xhm(&self) -> String {
        if self.ext.is_empty() {
            self.hm.to_string()
        } else {
            format!("{}:{}", self.hm, self.ext)
        }
    }

    /// Compressed name matching CCP4 conventions: spaces removed, the
    /// monoclinic `1` placeholders dropped, and an `H` lattice letter for
    /// hexagonal-setting rhombohedral groups (`"R 3 2:H"` → `"H32"`).
    pub fn short_name(&self) -> String {
        let hm = self.hm;
        let bytes = hm.as_bytes();
        let len = bytes.len();
        let mut s = if len > 6 && bytes[2] == b'1' && bytes[len - 2] == b' ' && bytes[len - 1] == b'1'
        {
            format!("{}{}", &hm[..2], &hm[4..len - 2])
        } else {
            hm.to_string()
        };
        s.retain(|c| c != ' ');
        if self.ext == "H" {
            s.replace_range(0..1, "H");
        }
        s
    }

    /// Expands this setting's Hall symbol into the full operation group.
    ///
    /// Catalogue Hall symbols are static and known-good; a failure here is
    /// a defect in the table itself, so it aborts rather than returning.
    pub fn operations(&self) -> GroupOps {
        symops_from_hall(self.hall)
            .unwrap_or_else(|e| panic!("bad Hall symbol '{}' in catalogue: {e}", self.hall))
    }
}

#[cfg(test)]
mod tests {
    use crate::db::find_spacegroup_by_name;

    #[test]
    fn short_name_matches_reference_tooling() {
        for (longer, shorter) in [
            ("P 21 2 21", "P21221"),
            ("P 1 2 1", "P2"),
            ("P 1", "P1"),
            ("R 3 2:R", "R32"),
            ("R 3 2:H", "H32"),
        ] {
            let sg = find_spacegroup_by_name(longer).unwrap();
            assert_eq!(sg.short_name(), shorter);
        }
    }

    #[test]
    fn xhm_carries_the_setting_qualifier() {
        assert_eq!(find_spacegroup_by_name("R 3 2").unwrap().xhm(), "R 3 2:H");
        assert_eq!(find_spacegroup_by_name("P 6").unwrap().xhm(), "P 6");
    }
}
