use std::io::{self, Write};

use anyhow::{Context, Result};
use prettytable::{Table, format, row};

use xtal_sym::{GroupOps, SpaceGroup};

pub mod hall;
pub mod list;
pub mod lookup;

/// Renders a rounded-corner label above a table section.
pub fn print_boxed_label<W: Write>(writer: &mut W, title: &str) -> io::Result<()> {
    let inner = format!(" {title} ");
    let width = inner.chars().count();
    writeln!(writer, "╭{}╮", "─".repeat(width))?;
    writeln!(writer, "│{}│", inner)?;
    writeln!(writer, "╰{}╯", "─".repeat(width))?;
    Ok(())
}

/// Prints a catalogue entry's identifying fields as a two-column table.
pub fn print_spacegroup_summary<W: Write>(writer: &mut W, sg: &SpaceGroup) -> Result<()> {
    let group = sg.operations();
    let [fx, fy, fz] = group.find_grid_factors();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["Field", "Value"]);
    table.add_row(row!["Number", sg.number]);
    if sg.ccp4 != 0 {
        table.add_row(row!["CCP4 code", sg.ccp4]);
    }
    table.add_row(row!["Hermann-Mauguin", sg.xhm()]);
    table.add_row(row!["Short name", sg.short_name()]);
    table.add_row(row!["Hall symbol", sg.hall]);
    table.add_row(row!["Order", group.order()]);
    table.add_row(row![
        "Grid factors",
        format!("{fx} x {fy} x {fz}")
    ]);
    table.print(writer).context("Failed to render summary")?;
    Ok(())
}

/// Prints every operation of a group in triplet notation, one per line.
pub fn print_operations<W: Write>(writer: &mut W, group: &GroupOps) -> Result<()> {
    for op in group.iter() {
        writeln!(writer, "{op}")?;
    }
    Ok(())
}
