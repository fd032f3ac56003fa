//! Navigation row: prev/next arrows and one handle dot per slide.
//!
//! Glyph positions are computed by [`nav_positions`], which the mouse
//! handler reuses for hit-testing. Rendering and hit-testing must agree on
//! the same cells.

use crate::slider::Slider;
use crate::ui::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const PREV_GLYPH: &str = "‹";
const NEXT_GLYPH: &str = "›";
const HANDLE_ACTIVE_GLYPH: &str = "●";
const HANDLE_INACTIVE_GLYPH: &str = "○";

/// Which control a pointer press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavHit {
    Prev,
    Next,
    Handle(usize),
}

pub struct NavPositions {
    pub y: u16,
    pub prev_x: u16,
    pub next_x: u16,
    pub handle_xs: Vec<u16>,
}

/// Cell positions of the navigation glyphs: arrows at the row edges,
/// handles centered between them.
pub fn nav_positions(area: Rect, slide_count: usize) -> NavPositions {
    let handles_width = if slide_count == 0 {
        0
    } else {
        2 * slide_count as u16 - 1
    };
    let start = area.x + area.width.saturating_sub(handles_width) / 2;
    NavPositions {
        y: area.y,
        prev_x: area.x,
        next_x: area.x + area.width.saturating_sub(1),
        handle_xs: (0..slide_count as u16).map(|i| start + 2 * i).collect(),
    }
}

/// Resolve a pointer position to a control, if it hit one.
pub fn hit_test(area: Rect, slide_count: usize, pos: Position) -> Option<NavHit> {
    let np = nav_positions(area, slide_count);
    if pos.y != np.y {
        return None;
    }
    if pos.x == np.prev_x {
        return Some(NavHit::Prev);
    }
    if pos.x == np.next_x {
        return Some(NavHit::Next);
    }
    np.handle_xs
        .iter()
        .position(|&x| x == pos.x)
        .map(NavHit::Handle)
}

pub fn render(frame: &mut Frame, area: Rect, slider: &Slider) {
    if area.width < 4 || slider.slide_count() == 0 {
        return;
    }
    let np = nav_positions(area, slider.slide_count());
    let controls = slider.controls();

    let mut spans: Vec<Span> = Vec::new();
    let mut cursor = area.x;

    push_gap(&mut spans, &mut cursor, np.prev_x);
    spans.push(Span::styled(
        PREV_GLYPH,
        if controls.prev_enabled {
            Theme::control_enabled()
        } else {
            Theme::control_disabled()
        },
    ));
    cursor += 1;

    for (i, &hx) in np.handle_xs.iter().enumerate() {
        push_gap(&mut spans, &mut cursor, hx);
        if controls.active_handle == Some(i) {
            spans.push(Span::styled(HANDLE_ACTIVE_GLYPH, Theme::handle_active()));
        } else {
            spans.push(Span::styled(HANDLE_INACTIVE_GLYPH, Theme::handle_inactive()));
        }
        cursor += 1;
    }

    push_gap(&mut spans, &mut cursor, np.next_x);
    spans.push(Span::styled(
        NEXT_GLYPH,
        if controls.next_enabled {
            Theme::control_enabled()
        } else {
            Theme::control_disabled()
        },
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn push_gap(spans: &mut Vec<Span>, cursor: &mut u16, target: u16) {
    if target > *cursor {
        spans.push(Span::raw(" ".repeat(usize::from(target - *cursor))));
        *cursor = target;
    }
}
