//! Maps crossterm events onto marquee input events.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::input::InputEvent;

/// Translate a crossterm event. Events the marquee ignores map to `None`.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(_, _) => Some(InputEvent::Resize),
        _ => None, // Ignore mouse, focus, paste
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Interrupt)
        }
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn plain_chars_become_keys() {
        assert_eq!(
            map_event(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(InputEvent::Key('q'))
        );
        assert_eq!(
            map_event(key(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
            Some(InputEvent::Key('Q'))
        );
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        assert_eq!(
            map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Interrupt)
        );
    }

    #[test]
    fn resize_is_forwarded() {
        assert_eq!(map_event(Event::Resize(100, 30)), Some(InputEvent::Resize));
    }

    #[test]
    fn other_keys_and_events_are_ignored() {
        assert_eq!(map_event(key(KeyCode::Esc, KeyModifiers::NONE)), None);
        assert_eq!(map_event(key(KeyCode::Left, KeyModifiers::NONE)), None);
        assert_eq!(map_event(Event::FocusGained), None);
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }
}
