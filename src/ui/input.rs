use crate::ui::app::App;
use crate::ui::dialog::DialogState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.dialog() {
        DialogState::AwaitingPlate { .. } => match key.code {
            KeyCode::Esc => app.cancel_dialog(),
            KeyCode::Enter => app.confirm_dialog(),
            KeyCode::Backspace => app.erase_plate(),
            KeyCode::Char(ch) if !has_command_modifier(key) => app.type_plate(ch),
            _ => {}
        },
        DialogState::AwaitingSaveConfirmation { .. } | DialogState::AwaitingClearConfirmation => {
            match key.code {
                KeyCode::Esc | KeyCode::Char('n') => app.cancel_dialog(),
                KeyCode::Enter | KeyCode::Char('y') => app.confirm_dialog(),
                _ => {}
            }
        }
        DialogState::Idle => handle_main_key(app, key),
    }
}

fn handle_main_key(app: &mut App, key: KeyEvent) {
    if has_command_modifier(key) {
        return;
    }
    match key.code {
        KeyCode::Esc if app.stock().visible => app.toggle_stock(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::BackTab => app.cycle_user(-1),
        KeyCode::Right | KeyCode::Tab => app.cycle_user(1),
        KeyCode::Char('i') | KeyCode::Char('+') => app.record_in(),
        KeyCode::Char('o') | KeyCode::Char('-') => app.record_out(),
        KeyCode::Char('s') => app.request_save(),
        KeyCode::Char('c') => app.request_clear(),
        KeyCode::Char('w') => app.toggle_stock(),
        KeyCode::Char('r') => app.refresh_stock(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
