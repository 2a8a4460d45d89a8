//! Rendering for the speaker-coach side panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::deck::{Deck, SlideId};
use crate::ui::theme::{ACCENT, ACCENT_ALT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_OK};

use super::state::{NotesPanelState, NotesPhase};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the notes panel into `area` if it is open.
///
/// `current` is the slide on screen. Notes that belong to another slide are
/// shown under that slide's name, never as notes for `current`.
pub fn render_notes_panel(
    frame: &mut Frame,
    area: Rect,
    state: &NotesPanelState,
    deck: &Deck,
    current: SlideId,
) {
    if !state.open || area.width < 4 || area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Span::styled(
            " AI Speaker Coach ",
            Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = panel_lines(state, deck, current);
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn panel_lines(state: &NotesPanelState, deck: &Deck, current: SlideId) -> Vec<Line<'static>> {
    match &state.phase {
        NotesPhase::Empty => vec![
            Line::from(""),
            Line::styled(
                "Press n to generate speaker notes for this slide.",
                Style::default().fg(MUTED_TEXT),
            ),
        ],

        NotesPhase::Loading {
            slide_id,
            animation_tick,
        } => {
            let spinner = SPINNER_FRAMES[(*animation_tick as usize) % SPINNER_FRAMES.len()];
            let mut lines = vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled(format!("  {} ", spinner), Style::default().fg(STATUS_OK)),
                    Span::styled("Thinking...", Style::default().fg(HEADER_TEXT)),
                ]),
            ];
            if *slide_id != current {
                lines.push(Line::from(""));
                lines.push(attribution(deck, *slide_id));
            }
            lines
        }

        NotesPhase::Ready { slide_id, text } => {
            let mut lines = Vec::new();
            if *slide_id != current {
                lines.push(attribution(deck, *slide_id));
                lines.push(Line::styled(
                    "Press n for notes on this slide.",
                    Style::default().fg(MUTED_TEXT),
                ));
                lines.push(Line::from(""));
            }
            lines.extend(markdown_lines(text));
            lines
        }
    }
}

fn attribution(deck: &Deck, slide_id: SlideId) -> Line<'static> {
    let title = deck
        .position_of(slide_id)
        .and_then(|index| deck.get(index))
        .map(|slide| slide.title().to_string())
        .unwrap_or_default();
    Line::styled(
        format!("Notes for slide {}: {}", slide_id, title),
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
    )
}

/// Light Markdown: headings, bullets and `**bold**` markers.
pub(crate) fn markdown_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|raw| {
            let line = raw.trim_end();
            let trimmed = line.trim_start();
            if let Some(heading) = heading_text(trimmed) {
                Line::styled(
                    strip_emphasis(heading),
                    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
                )
            } else if let Some(item) = trimmed
                .strip_prefix("- ")
                .or_else(|| trimmed.strip_prefix("* "))
            {
                let indent = " ".repeat(line.len() - trimmed.len());
                Line::from(vec![
                    Span::styled(format!("{}• ", indent), Style::default().fg(ACCENT)),
                    Span::styled(strip_emphasis(item), Style::default().fg(HEADER_TEXT)),
                ])
            } else {
                Line::styled(strip_emphasis(line), Style::default().fg(HEADER_TEXT))
            }
        })
        .collect()
}

/// Text of an ATX heading: one to six `#` followed by a space or nothing.
fn heading_text(line: &str) -> Option<&str> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest.trim())
    } else {
        None
    }
}

fn strip_emphasis(text: &str) -> String {
    text.replace("**", "").replace("__", "")
}
