use crate::counter::CounterIntent;
use crate::ui::app::App;
use crate::ui::navigation::Screen;
use crate::ui::slider::IntervalSlider;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Counter => handle_counter_key(app, key),
        Screen::Settings => handle_settings_key(app, key),
    }
}

fn handle_counter_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Char('k') | KeyCode::Up => {
            CounterIntent::Increment
        }
        KeyCode::Char('-') | KeyCode::Char('j') | KeyCode::Down => CounterIntent::Decrement,
        KeyCode::Char('r') => CounterIntent::Reset,
        KeyCode::Char('a') | KeyCode::Char(' ') => CounterIntent::ToggleAutoIncrement,
        KeyCode::Char('s') => {
            app.open_settings();
            return;
        }
        _ => return,
    };
    app.dispatch_counter(intent);
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.go_back(),
        KeyCode::Left | KeyCode::Char('h') => app.move_slider(IntervalSlider::step_down),
        KeyCode::Right | KeyCode::Char('l') => app.move_slider(IntervalSlider::step_up),
        KeyCode::Home => app.move_slider(|_| IntervalSlider::min()),
        KeyCode::End => app.move_slider(|_| IntervalSlider::max()),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
