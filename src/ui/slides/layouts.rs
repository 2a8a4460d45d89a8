//! One render function per slide layout.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::deck::{
    Column, ColumnsContent, GridContent, GridItem, HeroContent, ImageSlot, ImageSplitContent,
    ListContent, TableContent,
};
use crate::ui::theme::{
    ACCENT, ACCENT_ALT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, QUOTE_TEXT, STATUS_ERROR,
};

use super::image_area::{render_image_area, ImageAreaState};
use super::RenderContext;

const IMAGE_STRIP_HEIGHT: u16 = 6;

/// Which hero slide is being drawn. They share a payload but not a look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroKind {
    Cover,
    Section,
    Closing,
}

pub fn render_hero(
    frame: &mut Frame,
    area: Rect,
    content: &HeroContent,
    kind: HeroKind,
    ctx: RenderContext,
) {
    let image = ImageAreaState::resolve(&content.image, ctx.generating);
    let (text_area, image_area) = split_bottom(area, image.is_visible(), IMAGE_STRIP_HEIGHT);

    let title_style = match kind {
        HeroKind::Cover => Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        HeroKind::Section => Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        HeroKind::Closing => Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
    };

    let mut lines = Vec::new();
    if kind == HeroKind::Section {
        lines.push(Line::styled("── SECTION ──", Style::default().fg(MUTED_TEXT)));
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(content.title.clone(), title_style));
    if let Some(subtitle) = &content.subtitle {
        lines.push(Line::from(""));
        lines.push(Line::styled(subtitle.clone(), Style::default().fg(HEADER_TEXT)));
    }
    if let Some(quote) = &content.quote {
        lines.push(Line::from(""));
        lines.push(quote_line(quote));
    }

    let height = lines.len() as u16;
    let centered = vertically_centered(text_area, height);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        centered,
    );

    if let Some(image_area) = image_area {
        render_image_area(frame, image_area, image, ctx.tick);
    }
}

pub fn render_list(frame: &mut Frame, area: Rect, content: &ListContent, ctx: RenderContext) {
    let image = ImageAreaState::resolve(&content.image, ctx.generating);
    let (head, body, foot) = title_body_quote(area, content.quote.is_some());
    render_title(frame, head, &content.title, None);

    let (points_area, image_area) = if image.is_visible() {
        let columns = split_columns(body, 60);
        (columns[0], Some(columns[1]))
    } else {
        (body, None)
    };
    render_points(frame, points_area, &content.points, true);
    if let Some(image_area) = image_area {
        render_image_area(frame, image_area, image, ctx.tick);
    }
    render_quote(frame, foot, content.quote.as_deref());
}

pub fn render_image_split(
    frame: &mut Frame,
    area: Rect,
    content: &ImageSplitContent,
    ctx: RenderContext,
) {
    let (head, body, foot) = title_body_quote(area, content.quote.is_some());
    render_title(frame, head, &content.title, None);

    let columns = split_columns(body, 50);
    render_points(frame, columns[0], &content.points, false);
    render_split_image(frame, columns[1], &content.image, ctx);
    render_quote(frame, foot, content.quote.as_deref());
}

// The image pane is always present on split slides, even without a prompt.
fn render_split_image(frame: &mut Frame, area: Rect, slot: &ImageSlot, ctx: RenderContext) {
    let state = ImageAreaState::resolve(slot, ctx.generating);
    if state.is_visible() {
        render_image_area(frame, area, state, ctx.tick);
    } else {
        let block = Block::default()
            .title(Span::styled(" Visual concept ", Style::default().fg(MUTED_TEXT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        frame.render_widget(block, area);
    }
}

pub fn render_split_columns(
    frame: &mut Frame,
    area: Rect,
    content: &ColumnsContent,
    _ctx: RenderContext,
) {
    let (head, body, foot) = title_body_quote(area, content.quote.is_some());
    render_title(frame, head, &content.title, content.subtitle.as_deref());

    let columns = split_columns(body, 50);
    render_column(frame, columns[0], &content.left, ACCENT);
    render_column(frame, columns[1], &content.right, ACCENT_ALT);
    render_quote(frame, foot, content.quote.as_deref());
}

fn render_column(frame: &mut Frame, area: Rect, column: &Column, color: ratatui::style::Color) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", column.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    render_points(frame, inner, &column.points, false);
}

pub fn render_table(frame: &mut Frame, area: Rect, content: &TableContent, ctx: RenderContext) {
    let image = ImageAreaState::resolve(&content.image, ctx.generating);
    let (head, body, _) = title_body_quote(area, false);
    render_title(frame, head, &content.title, content.subtitle.as_deref());

    let (table_area, image_area) = if image.is_visible() {
        let strip = IMAGE_STRIP_HEIGHT.min(body.height / 2);
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(strip), Constraint::Min(0)])
            .split(body);
        (parts[1], Some(parts[0]))
    } else {
        (body, None)
    };

    if let Some(image_area) = image_area {
        render_image_area(frame, image_area, image, ctx.tick);
    }

    let header = Row::new(
        content
            .table
            .headers
            .iter()
            .map(|h| Cell::from(h.clone()))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows = content.table.rows.iter().map(|row| {
        Row::new(vec![
            Cell::from(row[0].clone()).style(Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD)),
            Cell::from(row[1].clone()).style(Style::default().fg(MUTED_TEXT)),
            Cell::from(row[2].clone()).style(Style::default().fg(HEADER_TEXT)),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(table, table_area);
}

pub fn render_grid(frame: &mut Frame, area: Rect, content: &GridContent, _ctx: RenderContext) {
    let (head, body, foot) = title_body_quote(area, content.quote.is_some());
    render_title(frame, head, &content.title, content.subtitle.as_deref());

    let row_count = content.items.len().div_ceil(2).max(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, row_count as u32); row_count])
        .split(body);

    for (index, item) in content.items.iter().enumerate() {
        let row = rows[index / 2];
        let cell = split_columns(row, 50)[index % 2];
        render_grid_card(frame, cell, item);
    }
    render_quote(frame, foot, content.quote.as_deref());
}

fn render_grid_card(frame: &mut Frame, area: Rect, item: &GridItem) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", item.icon.glyph()), Style::default().fg(ACCENT)),
            Span::styled(
                item.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(item.description.clone(), Style::default().fg(MUTED_TEXT)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

pub fn render_unsupported(frame: &mut Frame, area: Rect, tag: &str) {
    let line = Line::styled(
        format!("Slide type not supported: {}", tag),
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
    );
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Center),
        vertically_centered(area, 1),
    );
}

// -- shared pieces ------------------------------------------------------------

fn render_title(frame: &mut Frame, area: Rect, title: &str, subtitle: Option<&str>) {
    let mut lines = vec![Line::styled(
        title.to_string(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )];
    if let Some(subtitle) = subtitle {
        lines.push(Line::styled(subtitle.to_string(), Style::default().fg(MUTED_TEXT)));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_points(frame: &mut Frame, area: Rect, points: &[String], numbered: bool) {
    let mut lines = Vec::with_capacity(points.len() * 2);
    for (index, point) in points.iter().enumerate() {
        let marker = if numbered {
            format!("{:>2}. ", index + 1)
        } else {
            " • ".to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(ACCENT)),
            Span::styled(point.clone(), Style::default().fg(HEADER_TEXT)),
        ]));
        lines.push(Line::from(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_quote(frame: &mut Frame, area: Rect, quote: Option<&str>) {
    if let Some(quote) = quote {
        frame.render_widget(
            Paragraph::new(quote_line(quote))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            area,
        );
    }
}

fn quote_line(quote: &str) -> Line<'static> {
    Line::styled(
        format!("“{}”", quote),
        Style::default().fg(QUOTE_TEXT).add_modifier(Modifier::ITALIC),
    )
}

/// Title band, body and an optional two-line quote footer.
fn title_body_quote(area: Rect, has_quote: bool) -> (Rect, Rect, Rect) {
    let quote_height = if has_quote { 2 } else { 0 };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(quote_height),
        ])
        .split(area);
    (parts[0], parts[1], parts[2])
}

fn split_columns(area: Rect, left_percent: u16) -> [Rect; 2] {
    let parts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(left_percent),
            Constraint::Percentage(100 - left_percent),
        ])
        .split(area);
    [parts[0], parts[1]]
}

fn split_bottom(area: Rect, enabled: bool, height: u16) -> (Rect, Option<Rect>) {
    if !enabled || area.height <= height {
        return (area, None);
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(height)])
        .split(area);
    (parts[0], Some(parts[1]))
}

fn vertically_centered(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertically_centered_stays_inside() {
        let area = Rect::new(0, 0, 10, 10);
        assert_eq!(vertically_centered(area, 2), Rect::new(0, 4, 10, 2));
        assert_eq!(vertically_centered(area, 20), area);
    }

    #[test]
    fn image_strip_is_skipped_on_tiny_areas() {
        let (text, image) = split_bottom(Rect::new(0, 0, 20, 4), true, IMAGE_STRIP_HEIGHT);
        assert_eq!(text.height, 4);
        assert!(image.is_none());
    }
}
