//! The image area shared by every layout with an image slot.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::deck::{ImageArtifact, ImageSlot};
use crate::ui::theme::{ACCENT, ACCENT_ALT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_OK};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the image area shows. Exactly one applies: an artifact wins over a
/// running generation, which wins over the idle prompt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageAreaState<'a> {
    Artifact(&'a ImageArtifact),
    Generating,
    Idle { prompt: Option<&'a str> },
}

impl<'a> ImageAreaState<'a> {
    pub fn resolve(slot: &'a ImageSlot, generating: bool) -> Self {
        if let Some(artifact) = slot.artifact.as_ref() {
            ImageAreaState::Artifact(artifact)
        } else if generating {
            ImageAreaState::Generating
        } else if slot.can_generate() {
            ImageAreaState::Idle {
                prompt: slot.prompt(),
            }
        } else {
            ImageAreaState::Idle { prompt: None }
        }
    }

    /// Whether there is anything worth drawing.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ImageAreaState::Idle { prompt: None })
    }
}

pub fn render_image_area(frame: &mut Frame, area: Rect, state: ImageAreaState, tick: u8) {
    if !state.is_visible() || area.width < 4 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match state {
        ImageAreaState::Artifact(artifact) => vec![
            Line::from(""),
            Line::styled("🖼  Generated image", Style::default().fg(ACCENT)),
            Line::styled(artifact.summary(), Style::default().fg(MUTED_TEXT)),
        ],
        ImageAreaState::Generating => {
            let spinner = SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()];
            vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled("Generating image...", Style::default().fg(HEADER_TEXT)),
                ]),
            ]
        }
        ImageAreaState::Idle { prompt: Some(prompt) } => vec![
            Line::styled(
                prompt.to_string(),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            ),
            Line::from(""),
            Line::from(vec![
                Span::styled("[g] ", Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD)),
                Span::styled("Generate image", Style::default().fg(HEADER_TEXT)),
            ]),
        ],
        ImageAreaState::Idle { prompt: None } => Vec::new(),
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
