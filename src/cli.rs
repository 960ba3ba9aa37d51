use clap::Parser;

#[derive(Parser)]
#[command(name = "craque", about = "Prints a random scouting verdict for a football player")]
pub struct Cli {
    /// Player name (multiple words are joined with spaces)
    pub name: Vec<String>,

    /// Seed the random generator for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}
