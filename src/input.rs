use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// App-level commands a key press can map to when hosting fields in a form.
#[derive(Debug, Clone, Copy)]
pub enum KeyCommand {
    Submit,
    Quit,
    NextField,
    PrevField,
    ResetStatus,
    Edit(KeyEvent),
    None,
}

pub fn classify(key: &KeyEvent) -> KeyCommand {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') | KeyCode::Char('S') => KeyCommand::Submit,
            KeyCode::Char('q') | KeyCode::Char('Q') => KeyCommand::Quit,
            KeyCode::Char('c') | KeyCode::Char('C') => KeyCommand::Quit,
            _ => KeyCommand::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => KeyCommand::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyCommand::PrevField,
        KeyCode::Esc => KeyCommand::ResetStatus,
        _ => KeyCommand::Edit(*key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_chords_map_to_commands() {
        let save = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert!(matches!(classify(&save), KeyCommand::Submit));
        let quit = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(classify(&quit), KeyCommand::Quit));
        let unknown = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(matches!(classify(&unknown), KeyCommand::None));
    }

    #[test]
    fn navigation_keys_move_focus() {
        let tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert!(matches!(classify(&tab), KeyCommand::NextField));
        let back = KeyEvent::new(KeyCode::BackTab, KeyModifiers::NONE);
        assert!(matches!(classify(&back), KeyCommand::PrevField));
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert!(matches!(classify(&enter), KeyCommand::NextField));
    }

    #[test]
    fn plain_characters_fall_through_to_editing() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(classify(&key), KeyCommand::Edit(_)));
        let backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        assert!(matches!(classify(&backspace), KeyCommand::Edit(_)));
    }
}
