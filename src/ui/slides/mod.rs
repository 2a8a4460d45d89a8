//! Slide rendering: one layout per variant, picked by an exhaustive match.
//!
//! Layouts only read. The one interactive affordance, image generation, is
//! bound to a key by the shell; layouts show it and the in-flight indicator.

mod image_area;
mod layouts;

use ratatui::{layout::Rect, Frame};

use crate::deck::{Slide, SlideLayout};

pub use image_area::{render_image_area, ImageAreaState};
pub use layouts::HeroKind;

/// Per-frame inputs a layout needs besides the slide itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// An image is being generated for this slide.
    pub generating: bool,
    /// Animation counter for spinners.
    pub tick: u8,
}

pub fn render_slide(frame: &mut Frame, area: Rect, slide: &Slide, ctx: RenderContext) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    match &slide.layout {
        SlideLayout::Cover(content) => {
            layouts::render_hero(frame, area, content, HeroKind::Cover, ctx)
        }
        SlideLayout::SectionHeader(content) => {
            layouts::render_hero(frame, area, content, HeroKind::Section, ctx)
        }
        SlideLayout::Closing(content) => {
            layouts::render_hero(frame, area, content, HeroKind::Closing, ctx)
        }
        SlideLayout::List(content) => layouts::render_list(frame, area, content, ctx),
        SlideLayout::ImageSplit(content) => layouts::render_image_split(frame, area, content, ctx),
        SlideLayout::SplitColumns(content) => {
            layouts::render_split_columns(frame, area, content, ctx)
        }
        SlideLayout::Table(content) => layouts::render_table(frame, area, content, ctx),
        SlideLayout::Grid(content) => layouts::render_grid(frame, area, content, ctx),
        SlideLayout::Unsupported { tag, .. } => layouts::render_unsupported(frame, area, tag),
    }
}
