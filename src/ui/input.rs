use crate::ui::app::App;
use crate::ui::dogs::DogsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('r') | KeyCode::F(5) => app.request_reload(),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(DogsIntent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(DogsIntent::SelectPrevious),
        KeyCode::Home | KeyCode::Char('g') => app.dispatch(DogsIntent::SelectFirst),
        KeyCode::End | KeyCode::Char('G') => app.dispatch(DogsIntent::SelectLast),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
