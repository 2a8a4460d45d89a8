use crate::ui::app::App;
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
        KeyCode::Char('q') | KeyCode::Char('Q') => app.request_quit(),
        KeyCode::Right | KeyCode::Char(' ') => app.next_slide(),
        KeyCode::Left => app.previous_slide(),
        KeyCode::Home => app.first_slide(),
        KeyCode::End => app.last_slide(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_notes(),
        KeyCode::Char('g') | KeyCode::Char('G') => app.generate_image(),
        KeyCode::Esc => app.close_notes(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::builtin_deck;
    use crate::presenter::Presenter;
    use std::sync::Arc;

    fn app() -> App {
        App::new(Presenter::new(Arc::new(builtin_deck().unwrap())))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_space_navigate() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Right));
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.presenter().current_index(), 2);
        handle_key(&mut app, press(KeyCode::Left));
        assert_eq!(app.presenter().current_index(), 1);
    }

    #[test]
    fn unbound_keys_do_not_navigate() {
        let mut app = app();
        for code in [
            KeyCode::PageDown,
            KeyCode::Char('l'),
            KeyCode::Char('j'),
            KeyCode::Enter,
        ] {
            handle_key(&mut app, press(code));
        }
        assert_eq!(app.presenter().current_index(), 0);

        handle_key(&mut app, press(KeyCode::End));
        for code in [KeyCode::PageUp, KeyCode::Char('h'), KeyCode::Backspace] {
            handle_key(&mut app, press(code));
        }
        assert!(app.presenter().is_last());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app();
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.presenter().current_index(), 0);
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let mut app = app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit());

        let mut app2 = self::app();
        handle_key(&mut app2, press(KeyCode::Char('q')));
        assert!(app2.should_quit());
    }

    #[test]
    fn escape_closes_notes() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert!(app.presenter().notes().open);
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(!app.presenter().notes().open);
    }
}
