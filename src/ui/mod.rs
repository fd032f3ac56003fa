pub mod layout;
pub mod nav_bar;
mod slide_strip;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area(), state.sliders.len());

    for (i, (slider, slot)) in state
        .sliders
        .iter()
        .zip(app_layout.sliders.iter())
        .enumerate()
    {
        let focused = i == state.focus;
        let (title, title_style) = if slider.is_destroyed() {
            (format!(" {} (detached) ", slider.id()), Theme::title_detached())
        } else {
            (format!(" {} ", slider.id()), Theme::title())
        };
        let block = Block::default()
            .title(title)
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(if focused {
                Theme::border_focused()
            } else {
                Theme::border()
            });
        frame.render_widget(block, slot.block);

        if !slider.is_destroyed() {
            slide_strip::render(frame, slot.strip, slider);
            nav_bar::render(frame, slot.nav, slider);
        }
    }

    status_bar::render(frame, app_layout.status_bar, state);
}
