use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::events::UserAction;

/// Translate a key press on the fixtures screen into an action.
pub fn action_for(key: KeyEvent) -> Option<UserAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(UserAction::Quit);
    }

    let action = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => UserAction::NextLeague,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => UserAction::PrevLeague,
        KeyCode::Up | KeyCode::Char('k') => UserAction::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => UserAction::ScrollDown,
        KeyCode::Char('d') => UserAction::Download,
        KeyCode::Char('r') => UserAction::RefreshNow,
        KeyCode::Enter | KeyCode::Esc => UserAction::DismissAlert,
        KeyCode::Char('q') => UserAction::Quit,
        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn maps_navigation_and_commands() {
        assert_eq!(action_for(press(KeyCode::Right)), Some(UserAction::NextLeague));
        assert_eq!(action_for(press(KeyCode::Char('h'))), Some(UserAction::PrevLeague));
        assert_eq!(action_for(press(KeyCode::Char('d'))), Some(UserAction::Download));
        assert_eq!(action_for(press(KeyCode::Enter)), Some(UserAction::DismissAlert));
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(key), Some(UserAction::Quit));
    }

    #[test]
    fn ignores_releases() {
        let mut key = press(KeyCode::Char('d'));
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key), None);
    }
}
