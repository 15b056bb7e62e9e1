use std::io;

use anyhow::Result;
use clap::Args;

use xtal_sym::SpaceGroup;

use crate::commands::{print_boxed_label, print_operations, print_spacegroup_summary};

/// Looks up one space group and reports its setting and operations.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Space-group name, sequential number, or CCP4 code.
    ///
    /// Accepts full Hermann-Mauguin symbols ("P 21 21 21"), compressed
    /// spellings ("p212121", "P21"), extended symbols with a setting
    /// qualifier ("R 3 2:R"), and digit strings ("19", "4005").
    pub name: String,
    /// Only print the operations, one triplet per line.
    #[arg(long)]
    pub ops_only: bool,
}

pub fn run(args: &LookupArgs) -> Result<()> {
    let sg = SpaceGroup::from_name(&args.name)?;
    let mut stdout = io::stdout().lock();

    if args.ops_only {
        print_operations(&mut stdout, &sg.operations())?;
        return Ok(());
    }

    print_boxed_label(&mut stdout, &format!("Space group {}", sg.xhm()))?;
    print_spacegroup_summary(&mut stdout, sg)?;
    print_boxed_label(&mut stdout, "Operations")?;
    print_operations(&mut stdout, &sg.operations())?;
    Ok(())
}
