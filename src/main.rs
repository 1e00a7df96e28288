//! review-cards CLI - .docx study notes to cards.json

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use review_cards::cards::build_deck_with;
use review_cards::export::{deck_to_json, paragraphs_to_json, write_output};
use review_cards::{Config, JsonFormat, load_document};

#[derive(Parser)]
#[command(name = "review-cards")]
#[command(version)]
#[command(about = "Turn .docx study notes into direction-based review cards", long_about = None)]
struct Cli {
    /// Input .docx file, or a paragraph stream written by --dump-paragraphs
    #[arg(value_name = "INPUT", required_unless_present = "init_config")]
    input: Option<PathBuf>,

    /// Output JSON file (stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Output compact JSON
    #[arg(long)]
    compact: bool,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the loaded paragraph stream instead of cards
    #[arg(long)]
    dump_paragraphs: bool,

    /// Write the default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.init_config {
        match &cli.config {
            Some(path) => {
                Config::default().save_to(path)?;
                println!("Wrote default config -> {}", path.display());
            }
            None => match Config::init_default()? {
                Some(path) => println!("Wrote default config -> {}", path.display()),
                None => bail!("no config directory available on this platform"),
            },
        }
        return Ok(());
    }

    let Some(input) = cli.input else {
        bail!("missing INPUT file");
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let format = if cli.compact || !config.output.pretty {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let document = load_document(&input).await?;

    let (json, card_count) = if cli.dump_paragraphs {
        (paragraphs_to_json(&document.paragraphs, format)?, None)
    } else {
        let deck = build_deck_with(&document.paragraphs, &document.source_file, &config.rules);
        (deck_to_json(&deck, format)?, Some(deck.meta.card_count))
    };

    match cli.output {
        Some(path) => {
            write_output(&path, &json)?;
            match card_count {
                Some(count) => println!("Wrote {count} cards -> {}", path.display()),
                None => println!(
                    "Wrote {} paragraphs -> {}",
                    document.paragraphs.len(),
                    path.display()
                ),
            }
        }
        None => println!("{json}"),
    }

    Ok(())
}
