mod cli;
mod describe;
mod error;

use clap::Parser;
use cli::Cli;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::process;

fn main() {
    let cli = Cli::parse();
    let name = cli.name.join(" ");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if let Err(e) = run(&name, &mut rng) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(name: &str, rng: &mut impl Rng) -> error::Result<()> {
    let line = describe::describe_player(name, rng);
    writeln!(std::io::stdout(), "{}", line)?;
    Ok(())
}
