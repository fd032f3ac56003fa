use crate::app::state::AppState;
use crate::slider::GesturePhase;
use crate::ui::theme::Theme;
use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focus = state
        .sliders
        .get(state.focus)
        .map(|slider| {
            if slider.is_destroyed() {
                format!("{} (detached)", slider.id())
            } else if slider.slide_count() == 0 {
                format!("{} (empty)", slider.id())
            } else if slider.gesture_phase() == GesturePhase::CurrentlySliding {
                format!("{} (dragging)", slider.id())
            } else {
                format!(
                    "{} {}/{}",
                    slider.id(),
                    slider.current_slide() + 1,
                    slider.slide_count()
                )
            }
        })
        .unwrap_or_else(|| "no sliders".to_string());

    let clock = Local::now()
        .format(&state.config.ui.timestamp_format)
        .to_string();
    let text = format!(
        " q quit | Tab focus | \u{2190}/\u{2192} step | 1-9 jump | drag to slide | {} | {}",
        focus, clock
    );
    frame.render_widget(Paragraph::new(text).style(Theme::status_bar()), area);
}
