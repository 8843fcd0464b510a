//! Translation of crossterm events into editor messages.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pathgrid_core::Point;
use pathgrid_paths::Algorithm;

/// An input the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// Main button pressed or dragged at a screen position.
    Paint(Point),
    /// Secondary button pressed or dragged at a screen position.
    Erase(Point),
    Run,
    Select(Algorithm),
    /// Switch to the next algorithm.
    Cycle,
    /// Discard the grid and start over.
    Clear,
    /// Erase search marks but keep the layout.
    ResetSearch,
    /// Quit, or cancel a running search.
    Quit,
    /// The terminal was resized; everything must be redrawn.
    Redraw,
}

fn key_msg(ke: &KeyEvent) -> Option<Msg> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        return (ke.code == KeyCode::Char('c')).then_some(Msg::Quit);
    }
    match ke.code {
        KeyCode::Char(' ') | KeyCode::Enter => Some(Msg::Run),
        KeyCode::Char('1') => Some(Msg::Select(Algorithm::BestFirst)),
        KeyCode::Char('2') => Some(Msg::Select(Algorithm::BreadthFirst)),
        KeyCode::Char('3') => Some(Msg::Select(Algorithm::DepthFirst)),
        KeyCode::Tab => Some(Msg::Cycle),
        KeyCode::Char('c') => Some(Msg::Clear),
        KeyCode::Char('r') => Some(Msg::ResetSearch),
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        _ => None,
    }
}

fn mouse_msg(me: &MouseEvent) -> Option<Msg> {
    let pos = Point::new(i32::from(me.column), i32::from(me.row));
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            Some(Msg::Paint(pos))
        }
        MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
            Some(Msg::Erase(pos))
        }
        _ => None,
    }
}

/// Map a crossterm event to a [`Msg`], ignoring everything else.
pub fn to_msg(ev: &Event) -> Option<Msg> {
    match ev {
        Event::Key(ke) => key_msg(ke),
        Event::Mouse(me) => mouse_msg(me),
        Event::Resize(..) => Some(Msg::Redraw),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn keys() {
        assert_eq!(to_msg(&key(KeyCode::Char(' '))), Some(Msg::Run));
        assert_eq!(
            to_msg(&key(KeyCode::Char('2'))),
            Some(Msg::Select(Algorithm::BreadthFirst))
        );
        assert_eq!(to_msg(&key(KeyCode::Tab)), Some(Msg::Cycle));
        assert_eq!(to_msg(&key(KeyCode::Char('c'))), Some(Msg::Clear));
        assert_eq!(to_msg(&key(KeyCode::Char('r'))), Some(Msg::ResetSearch));
        assert_eq!(to_msg(&key(KeyCode::Esc)), Some(Msg::Quit));
        assert_eq!(to_msg(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_rather_than_clears() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(to_msg(&ev), Some(Msg::Quit));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut ke = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        ke.kind = KeyEventKind::Release;
        assert_eq!(to_msg(&Event::Key(ke)), None);
    }

    #[test]
    fn mouse_buttons() {
        assert_eq!(
            to_msg(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(Msg::Paint(Point::new(4, 7)))
        );
        assert_eq!(
            to_msg(&mouse(MouseEventKind::Drag(MouseButton::Right), 0, 1)),
            Some(Msg::Erase(Point::new(0, 1)))
        );
        assert_eq!(to_msg(&mouse(MouseEventKind::Moved, 3, 3)), None);
        assert_eq!(to_msg(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 3)), None);
    }
}
