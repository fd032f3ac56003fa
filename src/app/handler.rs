use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::slider::SliderEvent;
use crate::ui::layout;
use crate::ui::nav_bar::{self, NavHit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    let now = Instant::now();
    let mut actions = Vec::new();
    let mut animating = false;
    for slider in &mut state.sliders {
        if slider.is_animating() {
            animating = true;
        }
        if let Some(SliderEvent::TransitionEnd { slide_index }) = slider.tick(now) {
            actions.push(Action::Publish {
                slider_id: slider.id().to_string(),
                slide_index,
            });
        }
    }
    if animating {
        state.dirty = true;
    }
    actions
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_terminal_area(Rect::new(0, 0, width, height), Instant::now());
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let now = Instant::now();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab => state.cycle_focus(),
        KeyCode::Left => {
            if let Some(slider) = state.focused_slider_mut() {
                let target = slider.current_slide() as isize - 1;
                slider.step(target, now);
            }
        }
        KeyCode::Right => {
            if let Some(slider) = state.focused_slider_mut() {
                let target = slider.current_slide() as isize + 1;
                slider.step(target, now);
            }
        }
        KeyCode::Char('d') => {
            if let Some(slider) = state.focused_slider_mut() {
                slider.destroy();
            }
        }
        // Jump targets: 1-based slide index.
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(slider) = state.focused_slider_mut() {
                let target = (c as u8 - b'1') as isize;
                slider.step(target, now);
            }
        }
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let now = Instant::now();
    let pos = Position::new(mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let app_layout = layout::compute_layout(state.terminal_area, state.sliders.len());
            for (i, slot) in app_layout.sliders.iter().enumerate() {
                if !slot.block.contains(pos) {
                    continue;
                }
                state.focus = i;
                let slider = &mut state.sliders[i];
                if slot.strip.contains(pos) {
                    slider.gesture_start(i32::from(mouse.column), i32::from(mouse.row));
                } else if let Some(hit) = nav_bar::hit_test(slot.nav, slider.slide_count(), pos) {
                    let current = slider.current_slide() as isize;
                    match hit {
                        NavHit::Prev => slider.step(current - 1, now),
                        NavHit::Next => slider.step(current + 1, now),
                        NavHit::Handle(index) => slider.step(index as isize, now),
                    }
                }
                break;
            }
        }
        // Drags and releases follow the slider that owns the gesture, even
        // when the pointer leaves its region.
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some(slider) = state.focused_slider_mut() {
                slider.gesture_move(i32::from(mouse.column), i32::from(mouse.row));
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(slider) = state.focused_slider_mut() {
                slider.gesture_end(now);
            }
        }
        _ => {}
    }
    vec![]
}
