use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{hall, list, lookup};

#[derive(Parser, Debug)]
#[command(
    name = "xtalsym",
    about = "A command-line tool for inspecting crystallographic space groups, their symmetry operations, and Hall symbols.",
    version,
    author,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a space group by name, number, or CCP4 code.
    Lookup(lookup::LookupArgs),
    /// Expand a Hall symbol into symmetry operations.
    Hall(hall::HallArgs),
    /// List the space-group catalogue.
    List(list::ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Lookup(args) => lookup::run(&args),
        Command::Hall(args) => hall::run(&args),
        Command::List(args) => list::run(&args),
    }
}
