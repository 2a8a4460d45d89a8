use crate::presenter::Notice;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HINTS: &str = " ←/→: Navigate │ n: Notes │ g: Image │ Esc: Close │ q: Quit";

/// Key hints and version, replaced by the current notice while one is
/// showing, over a progress bar.
pub struct Footer<'a> {
    position: usize,
    total: usize,
    notice: Option<&'a Notice>,
}

impl<'a> Footer<'a> {
    pub fn new(position: usize, total: usize, notice: Option<&'a Notice>) -> Self {
        Self {
            position,
            total,
            notice,
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let content_width = area.width.saturating_sub(2) as usize;
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let status = match self.notice {
            Some(notice) => {
                let color = if notice.is_error() { STATUS_ERROR } else { STATUS_OK };
                Line::from(Span::styled(
                    format!(" {}", notice.message),
                    Style::default().fg(color),
                ))
            }
            None => {
                let version = format!("v{} ", VERSION);
                // Char count, not byte count
                let padding = content_width
                    .saturating_sub(HINTS.chars().count())
                    .saturating_sub(version.chars().count());
                Line::from(vec![
                    Span::styled(HINTS, text_style),
                    Span::styled(" ".repeat(padding), text_style),
                    Span::styled(version, text_style),
                ])
            }
        };

        let (filled, empty) = progress_cells(self.position, self.total, content_width);
        let bar = Line::from(vec![
            Span::styled("━".repeat(filled), Style::default().fg(ACCENT)),
            Span::styled("━".repeat(empty), Style::default().fg(HEADER_SEPARATOR)),
        ]);

        Paragraph::new(vec![status, bar])
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

/// Split `width` cells into filled and empty parts for `position` of `total`.
pub fn progress_cells(position: usize, total: usize, width: usize) -> (usize, usize) {
    if total == 0 {
        return (0, width);
    }
    let filled = (width * position.min(total)) / total;
    (filled, width - filled)
}
