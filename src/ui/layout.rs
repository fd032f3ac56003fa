use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

pub struct SliderLayout {
    /// Outer bordered region owned by one slider.
    pub block: Rect,
    /// Slide strip: the gesture surface.
    pub strip: Rect,
    /// Navigation row: prev arrow, handle dots, next arrow.
    pub nav: Rect,
}

pub struct AppLayout {
    pub sliders: Vec<SliderLayout>,
    pub status_bar: Rect,
}

/// Compute the frame layout. The handler calls this with the last known
/// terminal area for mouse hit-testing, so it must stay in sync with what
/// the renderer draws.
pub fn compute_layout(area: Rect, slider_count: usize) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Sliders
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    let mut sliders = Vec::new();
    if slider_count > 0 {
        let constraints: Vec<Constraint> = (0..slider_count)
            .map(|_| Constraint::Ratio(1, slider_count as u32))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(content);

        for row in rows.iter() {
            let inner = row.inner(Margin::new(1, 1));
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Slide strip
                    Constraint::Length(1), // Navigation row
                ])
                .split(inner);
            sliders.push(SliderLayout {
                block: *row,
                strip: chunks[0],
                nav: chunks[1],
            });
        }
    }

    AppLayout {
        sliders,
        status_bar,
    }
}
