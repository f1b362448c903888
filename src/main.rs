//! # Sopa Demo CLI
//!
//! Generates a word-search puzzle from a JSON word list (or a built-in demo
//! list) and prints the grid and clue list to the terminal.

use clap::Parser;
use sopa::generation::utils;
use sopa::{GenerationConfig, PuzzleGenerator, SopaResult, WordEntry};

/// Command line arguments for the sopa demo.
#[derive(Parser, Debug)]
#[command(name = "sopa")]
#[command(about = "A word-search (sopa de letras) puzzle generator")]
#[command(version)]
struct Args {
    /// Random seed for puzzle generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Grid side length in cells
    #[arg(long, default_value_t = sopa::config::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Path to a JSON word list: [{"word": "...", "clue": "..."}, ...]
    #[arg(short, long)]
    words: Option<std::path::PathBuf>,

    /// Also print each placed word with its start cell and direction
    #[arg(long)]
    reveal: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> SopaResult<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .init();

    log::info!("sopa v{}", sopa::VERSION);

    let entries = match &args.words {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            serde_json::from_str::<Vec<WordEntry>>(&json)?
        }
        None => demo_word_list(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let config = GenerationConfig::with_size(seed, args.size);
    let mut rng = utils::create_rng(&config);
    let puzzle = PuzzleGenerator::new().generate(&entries, &config, &mut rng)?;

    println!("Sopa de letras (seed {}, {}x{})\n", seed, args.size, args.size);
    print!("{}", puzzle.render_grid());

    println!("\nPistas ({} palabras):", puzzle.total_words());
    for (i, word) in puzzle.words().iter().enumerate() {
        println!("  {}. {}", i + 1, word.clue);
    }

    if args.reveal {
        println!("\nSoluciones:");
        for word in puzzle.words() {
            if let Some(start) = word.start() {
                println!(
                    "  {} — ({}, {}) {:?}",
                    word.word,
                    start.row,
                    start.col,
                    word.direction()
                );
            }
        }
    }

    Ok(())
}

/// Built-in word list used when no file is given.
fn demo_word_list() -> Vec<WordEntry> {
    vec![
        WordEntry::new("gato", "Felino doméstico"),
        WordEntry::new("perro", "El mejor amigo del hombre"),
        WordEntry::new("jirafa", "Animal de cuello largo"),
        WordEntry::new("ñandú", "Ave corredora sudamericana"),
        WordEntry::new("sol", "Estrella del día"),
        WordEntry::new("luna", "Satélite natural"),
        WordEntry::new("montaña", "Elevación natural del terreno"),
        WordEntry::new("río", "Corriente de agua"),
        WordEntry::new("bosque", "Conjunto de árboles"),
        WordEntry::new("estrella", "Brilla en la noche"),
    ]
}
