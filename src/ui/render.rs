use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, padded, split_notes};
use crate::ui::notes::render_notes_panel;
use crate::ui::slides::{render_slide, RenderContext};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let presenter = app.presenter();
    let slide = presenter.current_slide();
    let (position, total) = presenter.progress();

    let header_widget = Header::new(presenter.deck().title(), position, total, slide.layout.tag());
    frame.render_widget(header_widget.widget(header), header);

    frame.render_widget(Clear, body);
    let (slide_area, notes_area) = split_notes(body, presenter.notes().open);
    let ctx = RenderContext {
        generating: presenter.is_generating(slide.id),
        tick: app.tick(),
    };
    render_slide(frame, padded(slide_area, 2, 1), &slide, ctx);

    if let Some(notes_area) = notes_area {
        render_notes_panel(frame, notes_area, presenter.notes(), presenter.deck(), slide.id);
    }

    let footer_widget = Footer::new(position, total, presenter.notice());
    frame.render_widget(footer_widget.widget(footer), footer);
}
