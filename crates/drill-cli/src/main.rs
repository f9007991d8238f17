//! Prints one randomized chess pattern-drill prompt and exits.

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "chess-drill")]
#[command(about = "Emits one randomized chess pattern-recognition prompt")]
struct Cli {
    /// Seed for the random source, for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match drill_engine::generate(&mut rng) {
        Ok(line) => println!("{}", line),
        Err(e) => {
            eprintln!("drill generation failed: {}", e);
            std::process::exit(1);
        }
    }
}
