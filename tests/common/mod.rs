//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_gemini;

use slidecoach::config::AiConfig;
use slidecoach::deck::{
    Deck, HeroContent, ImageSlot, ImageSplitContent, ListContent, Slide, SlideLayout,
};
use std::net::TcpListener;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-gemini-key";

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// AI config pointing at `base_url` with an inline test key.
pub fn ai_config(base_url: &str) -> AiConfig {
    AiConfig {
        base_url: base_url.to_string(),
        api_key: Some(TEST_API_KEY.to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
        ..AiConfig::default()
    }
}

/// AI config whose key variable is never set.
pub fn unconfigured_ai_config() -> AiConfig {
    AiConfig {
        api_key: None,
        api_key_env: "SLIDECOACH_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
        ..AiConfig::default()
    }
}

/// Three slides with ids 1, 2, 3. Slides 1 and 3 have image prompts.
pub fn three_slide_deck() -> Deck {
    Deck::new(
        "Test Talk",
        vec![
            Slide::new(
                1,
                SlideLayout::Cover(HeroContent {
                    title: "Opening".to_string(),
                    subtitle: Some("Why we are here".to_string()),
                    quote: None,
                    image: ImageSlot::with_prompt("A sunrise over circuits"),
                }),
            ),
            Slide::new(
                2,
                SlideLayout::List(ListContent {
                    title: "Agenda".to_string(),
                    points: vec!["First".to_string(), "Second".to_string()],
                    quote: None,
                    image: ImageSlot::default(),
                }),
            ),
            Slide::new(
                3,
                SlideLayout::ImageSplit(ImageSplitContent {
                    title: "Leverage".to_string(),
                    points: vec!["Tools multiply".to_string()],
                    quote: Some("Work smarter".to_string()),
                    image: ImageSlot::with_prompt("A lever lifting a planet"),
                }),
            ),
        ],
    )
    .expect("valid deck")
}

/// Write `content` to a file named `name` in a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
