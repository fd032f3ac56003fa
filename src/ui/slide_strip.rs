//! Slide strip rendering with a fractional horizontal offset.
//!
//! The strip is a virtual row of slides, each one viewport wide. The
//! slider's pixel offset shifts the whole row; during a drag or an
//! animation two slides are partially visible at once, so each slide's
//! centered text is clipped to its visible column range.

use crate::slider::{Slide, Slider};
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, area: Rect, slider: &Slider) {
    if area.width == 0 || area.height == 0 || slider.slide_count() == 0 {
        return;
    }
    let width = i32::from(area.width);
    let offset = slider.pixel_offset().round() as i32;

    for (i, slide) in slider.slides().iter().enumerate() {
        let left = i as i32 * width + offset;
        if left >= width || left + width <= 0 {
            continue;
        }
        let vis_start = left.max(0);
        let vis_end = (left + width).min(width);
        let skip = (vis_start - left) as usize;
        let take = (vis_end - vis_start) as usize;

        let lines = slide_lines(slide, area.width as usize, area.height as usize)
            .into_iter()
            .map(|(text, style)| Line::styled(clip_columns(&text, skip, take), style))
            .collect::<Vec<_>>();

        let slice = Rect::new(
            area.x + vis_start as u16,
            area.y,
            take as u16,
            area.height,
        );
        frame.render_widget(Paragraph::new(lines), slice);
    }
}

/// Full-width, vertically centered text rows for one slide.
fn slide_lines(slide: &Slide, width: usize, height: usize) -> Vec<(String, Style)> {
    let mut content: Vec<(String, Style)> = Vec::new();
    content.push((slide.title.clone(), Theme::slide_title()));
    if !slide.lines.is_empty() {
        content.push((String::new(), Theme::slide_text()));
        for line in &slide.lines {
            content.push((line.clone(), Theme::slide_text()));
        }
    }
    content.truncate(height);

    let pad_top = height.saturating_sub(content.len()) / 2;
    let mut rows = Vec::with_capacity(pad_top + content.len());
    for _ in 0..pad_top {
        rows.push((" ".repeat(width), Theme::slide_text()));
    }
    for (text, style) in content {
        rows.push((center(&text, width), style));
    }
    rows
}

/// Center `s` within `width` display columns, padding with spaces and
/// truncating when it does not fit.
fn center(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        return clip_columns(s, 0, width);
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// Take `take` display columns of `s` starting at column `skip`. A wide
/// character straddling either edge is replaced by spaces so the result is
/// always exactly `min(take, remaining)` columns.
fn clip_columns(s: &str, skip: usize, take: usize) -> String {
    let end = skip + take;
    let mut out = String::new();
    let mut col = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if col + w <= skip {
            col += w;
            continue;
        }
        if col >= end {
            break;
        }
        if col < skip || col + w > end {
            let visible = (col + w).min(end) - col.max(skip);
            for _ in 0..visible {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
        col += w;
    }
    out
}
