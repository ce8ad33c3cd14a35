#![forbid(unsafe_code)]

//! Terminal events to host inputs.
//!
//! [`map_event`] is a pure function from crossterm events to [`Input`]
//! values; the app loop matches on the result. Key releases and events the
//! browser has no use for map to `None`.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rgtui_nav::{Direction, NavEvent};

/// Cursor movement inside the focused column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
}

/// One host-level input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Straight to the navigation controller.
    Nav(NavEvent),
    /// Horizontal arrow: column focus or edge pivot.
    Arrow(Direction),
    Move(Motion),
    /// Follow the focused column's selection.
    Activate,
    /// Left click at screen cell (`x`, `y`).
    Click { x: u16, y: u16 },
    /// Re-read the graph snapshot.
    Refresh,
    Quit,
    Resize { width: u16, height: u16 },
}

/// Map one crossterm event.
#[must_use]
pub fn map_event(event: Event) -> Option<Input> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(Input::Resize { width, height }),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => None,
    }
}

fn map_key(key: KeyEvent) -> Option<Input> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(Input::Quit),
            KeyCode::Char('r' | 'R') => Some(Input::Refresh),
            _ => None,
        };
    }
    let input = match key.code {
        KeyCode::Esc => Input::Nav(NavEvent::Escape),
        KeyCode::Backspace => Input::Nav(NavEvent::Backspace),
        KeyCode::Enter | KeyCode::Char(' ') => Input::Activate,
        KeyCode::Left => Input::Arrow(Direction::Left),
        KeyCode::Right => Input::Arrow(Direction::Right),
        KeyCode::Up => Input::Move(Motion::Up),
        KeyCode::Down => Input::Move(Motion::Down),
        KeyCode::PageUp => Input::Move(Motion::PageUp),
        KeyCode::PageDown => Input::Move(Motion::PageDown),
        KeyCode::Home => Input::Move(Motion::Home),
        KeyCode::End => Input::Move(Motion::End),
        // The controller drops characters outside the filter alphabet.
        KeyCode::Char(c) => Input::Nav(NavEvent::FilterChar(c)),
        _ => return None,
    };
    Some(input)
}

fn map_mouse(mouse: MouseEvent) -> Option<Input> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(Input::Move(Motion::Up)),
        MouseEventKind::ScrollDown => Some(Input::Move(Motion::Down)),
        _ => None,
    }
}
