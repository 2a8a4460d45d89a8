use std::path::PathBuf;

use clap::Parser;

use crate::deck::Deck;

#[derive(Parser, Debug)]
#[command(name = "slidecoach")]
#[command(about = "Terminal slide presenter with an AI speaker coach")]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/slidecoach/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Load slides from a TOML deck file instead of the built-in deck
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Slide number to open at, counting from 1
    #[arg(long, value_name = "N")]
    pub start: Option<usize>,

    /// Print the slide index and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Zero-based start position, clamped into the deck.
    pub fn start_index(&self, deck_len: usize) -> usize {
        self.start
            .unwrap_or(1)
            .saturating_sub(1)
            .min(deck_len.saturating_sub(1))
    }
}

/// One line per slide: position, id, variant and title.
pub fn slide_index(deck: &Deck) -> Vec<String> {
    deck.slides()
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            format!(
                "{:>3}  #{:<3} {:<15} {}",
                index + 1,
                slide.id,
                slide.layout.tag(),
                slide.title()
            )
        })
        .collect()
}
