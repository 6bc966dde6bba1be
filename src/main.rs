//! padseq - directional-pad key sequence generator.
//!
//! Prints the shortest sequence of directional presses and selections that
//! types a sentence on a pad-navigated on-screen keyboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use padseq::cli::{GenerateArgs, NeighborsArgs};
use padseq::constants::APP_BINARY_NAME;

/// Directional-pad key sequence generator
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the press sequence that types a sentence
    Generate(GenerateArgs),
    /// Show a key's four directional neighbors
    Neighbors(NeighborsArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => args.execute(),
        Command::Neighbors(args) => args.execute(),
    };

    if let Err(error) = result {
        eprintln!("Error: {error}");
        std::process::exit(error.exit_code());
    }

    Ok(())
}
