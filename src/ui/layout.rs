use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Footer is two content rows plus borders.
const FOOTER_HEIGHT: u16 = 4;

/// Smallest width at which the notes panel sits beside the slide.
const SIDE_PANEL_MIN_WIDTH: u16 = 80;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into slide area and notes panel.
///
/// Wide terminals get a right-hand panel; narrow ones an overlay covering the
/// lower part of the slide.
pub fn split_notes(body: Rect, notes_open: bool) -> (Rect, Option<Rect>) {
    if !notes_open {
        return (body, None);
    }
    if body.width >= SIDE_PANEL_MIN_WIDTH {
        let parts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(body);
        (parts[0], Some(parts[1]))
    } else {
        (body, Some(bottom_rect(60, body)))
    }
}

/// Inset slide content so it does not touch the frame edges.
pub fn padded(area: Rect, horizontal: u16, vertical: u16) -> Rect {
    if area.width <= horizontal * 2 || area.height <= vertical * 2 {
        return area;
    }
    Rect {
        x: area.x + horizontal,
        y: area.y + vertical,
        width: area.width - horizontal * 2,
        height: area.height - vertical * 2,
    }
}

fn bottom_rect(percent_y: u16, area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(100 - percent_y),
            Constraint::Percentage(percent_y),
        ])
        .split(area)[1]
}
