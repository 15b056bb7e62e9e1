use std::io;

use anyhow::{Context, Result};
use clap::Args;
use prettytable::{Table, format, row};

use xtal_sym::spacegroup_table;

use crate::commands::print_boxed_label;

/// Lists catalogue entries as a table.
#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Restrict the listing to one sequential number.
    #[arg(long)]
    pub number: Option<i32>,
    /// Include alternative settings, not just the default of each number.
    #[arg(long)]
    pub all_settings: bool,
}

pub fn run(args: &ListArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();
    print_boxed_label(&mut stdout, "Space-group catalogue")?;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_BOX_CHARS);
    table.set_titles(row!["No.", "CCP4", "Symbol", "Short", "Hall symbol"]);

    let mut last_number = 0;
    for sg in spacegroup_table() {
        if let Some(number) = args.number {
            if sg.number != number {
                continue;
            }
        } else if !args.all_settings && sg.number == last_number {
            continue;
        }
        last_number = sg.number;
        table.add_row(row![
            sg.number,
            if sg.ccp4 != 0 { sg.ccp4.to_string() } else { String::new() },
            sg.xhm(),
            sg.short_name(),
            sg.hall
        ]);
    }
    table.print(&mut stdout).context("Failed to render catalogue")?;
    Ok(())
}
