use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Up,
    Down,
    Enter,
    Space,
    Resize,
}

/// Read every event already queued without blocking. Events we don't act
/// on (mouse, key releases) are skipped, not treated as the end of the queue.
pub fn drain_pending() -> io::Result<Vec<TuiEvent>> {
    drain_from(|| {
        if event::poll(Duration::ZERO)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    })
}

/// Wait up to `timeout` for an event we care about.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(event::read()?))
}

fn drain_from<F>(mut next: F) -> io::Result<Vec<TuiEvent>>
where
    F: FnMut() -> io::Result<Option<Event>>,
{
    let mut events = Vec::new();
    while let Some(event) = next()? {
        events.extend(translate(event));
    }
    Ok(events)
}

fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some platforms report releases too
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(TuiEvent::Up),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(TuiEvent::Down),
        (_, KeyCode::Enter) => Some(TuiEvent::Enter),
        (_, KeyCode::Char(' ')) => Some(TuiEvent::Space),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};
    use std::collections::VecDeque;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            translate(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::Quit)
        );
        assert_eq!(translate(press(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_navigation_and_confirm_keys() {
        let none = KeyModifiers::NONE;
        assert_eq!(translate(press(KeyCode::Up, none)), Some(TuiEvent::Up));
        assert_eq!(translate(press(KeyCode::Char('k'), none)), Some(TuiEvent::Up));
        assert_eq!(translate(press(KeyCode::Down, none)), Some(TuiEvent::Down));
        assert_eq!(translate(press(KeyCode::Char('j'), none)), Some(TuiEvent::Down));
        assert_eq!(translate(press(KeyCode::Enter, none)), Some(TuiEvent::Enter));
        assert_eq!(translate(press(KeyCode::Char(' '), none)), Some(TuiEvent::Space));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_resize() {
        assert_eq!(translate(Event::Resize(80, 24)), Some(TuiEvent::Resize));
    }

    fn release(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        })
    }

    fn mouse_move() -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_drain_skips_ignored_events() {
        let mut queue: VecDeque<Event> = VecDeque::from([
            press(KeyCode::Down, KeyModifiers::NONE),
            mouse_move(),
            release(KeyCode::Down),
            press(KeyCode::Enter, KeyModifiers::NONE),
        ]);
        let events = drain_from(|| Ok(queue.pop_front())).unwrap();
        assert_eq!(events, vec![TuiEvent::Down, TuiEvent::Enter]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_propagates_read_errors() {
        let mut calls = 0;
        let result = drain_from(|| {
            calls += 1;
            match calls {
                1 => Ok(Some(press(KeyCode::Char(' '), KeyModifiers::NONE))),
                _ => Err(io::Error::other("terminal gone")),
            }
        });
        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "terminal gone");
    }
}
