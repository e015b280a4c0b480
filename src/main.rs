//! `ithkuil` command-line tool
//!
//! ```text
//! ithkuil analyze <word>...     one JSON analysis per word
//! ithkuil generate <json>       surface text of a JSON-encoded word
//! ithkuil normalize <word>...   normalized text and stress
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use ithkuil::{analyze_word, generate_word, normalize, GenerationOptions, Word};

#[derive(Parser, Debug)]
#[command(name = "ithkuil")]
#[command(about = "Generate and analyze Ithkuil words")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one JSON analysis per word, or "no match"
    Analyze {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the surface text of a JSON-encoded word
    Generate {
        /// Word record, e.g. '{"class":"Adjunct","value":{"Numeral":7}}'
        json: String,
    },
    /// Print each word's canonical spelling and stress
    Normalize {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ithkuil=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "running");

    match cli.command {
        Command::Analyze { words } => analyze(&words),
        Command::Generate { json } => generate(&json),
        Command::Normalize { words } => {
            for word in &words {
                let normalized = normalize(word);
                println!("{}\t{:?}", normalized.text, normalized.stress);
            }
            Ok(())
        }
    }
}

fn analyze(words: &[String]) -> Result<()> {
    for word in words {
        match analyze_word(word).with_context(|| format!("Failed to analyze '{}'", word))? {
            Some(analysis) => {
                info!(word = %word, gloss = %analysis.decomposition.gloss(), "analyzed");
                println!("{}", serde_json::to_string(&analysis)?);
            }
            None => println!("{}: no match", word),
        }
    }
    Ok(())
}

fn generate(json: &str) -> Result<()> {
    let word: Word = serde_json::from_str(json).context("Failed to parse word JSON")?;
    let options = GenerationOptions::from_env().context("Failed to read generation options")?;
    let text = generate_word(&word, &options).context("Failed to generate word")?;
    println!("{}", text);
    Ok(())
}
