use anyhow::{Context, Result};
use clap::Parser;
use slidecoach::cli::{slide_index, Cli};
use slidecoach::config::Config;
use slidecoach::deck::{builtin_deck, Deck};
use slidecoach::logging::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let deck = match &cli.deck {
        Some(path) => Deck::load(path)
            .with_context(|| format!("Failed to load deck from {}", path.display()))?,
        None => builtin_deck().context("Built-in deck is invalid")?,
    };

    if cli.list {
        println!("{}", deck.title());
        for line in slide_index(&deck) {
            println!("{}", line);
        }
        return Ok(());
    }

    let start = cli.start_index(deck.len());
    tracing::info!(deck = %deck.title(), slides = deck.len(), "starting slidecoach");
    slidecoach::ui::run(&config, deck, start).context("Presentation terminated with an error")?;
    Ok(())
}
