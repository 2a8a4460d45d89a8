use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Deck title on the left, slide counter and variant on the right.
pub struct Header<'a> {
    deck_title: &'a str,
    position: usize,
    total: usize,
    variant: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(deck_title: &'a str, position: usize, total: usize, variant: &'a str) -> Self {
        Self {
            deck_title,
            position,
            total,
            variant,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let left = format!("  {}", self.deck_title);
        let counter = format!("{:02} / {:02}", self.position, self.total);
        let right_width = counter.chars().count() + self.variant.chars().count() + 7;
        let padding = (area.width as usize)
            .saturating_sub(left.chars().count())
            .saturating_sub(right_width);

        let line = Line::from(vec![
            Span::styled(left, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(self.variant.to_string(), Style::default().fg(MUTED_TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(counter, text_style),
            Span::styled("  ", text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
