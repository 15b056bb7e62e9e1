use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use xtal_sym::{find_spacegroup_by_ops, generators_from_hall, symops_from_hall};

use crate::commands::{print_boxed_label, print_operations};

/// Expands a Hall symbol into symmetry operations.
#[derive(Debug, Args)]
pub struct HallArgs {
    /// Hall symbol, e.g. "-P 2ybc" or "R 3 (-y+z,x+z,-x+y+z)".
    pub symbol: String,
    /// Print only the generator operations instead of the closed group.
    #[arg(long)]
    pub generators: bool,
}

pub fn run(args: &HallArgs) -> Result<()> {
    let mut stdout = io::stdout().lock();

    if args.generators {
        let gens = generators_from_hall(&args.symbol)?;
        print_operations(&mut stdout, &gens)?;
        return Ok(());
    }

    let group = symops_from_hall(&args.symbol)?;
    print_boxed_label(
        &mut stdout,
        &format!("{} operations", group.order()),
    )?;
    print_operations(&mut stdout, &group)?;
    if let Some(sg) = find_spacegroup_by_ops(&group) {
        writeln!(stdout)?;
        writeln!(stdout, "Matches space group {} (no. {})", sg.xhm(), sg.number)?;
    }
    Ok(())
}
