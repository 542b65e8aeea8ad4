use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Viewer;

/// Applies one terminal event. Returns false when the viewer should close.
pub fn handle_event(viewer: &mut Viewer, ev: Event) -> bool {
    match ev {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(viewer, key),
        // Resize is picked up by the next draw
        _ => true,
    }
}

fn handle_key(viewer: &mut Viewer, KeyEvent { code, modifiers, .. }: KeyEvent) -> bool {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return false,
        KeyCode::Char('q') | KeyCode::Esc => return false,

        KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => viewer.page_down(),
        KeyCode::PageUp => viewer.page_up(),
        KeyCode::Home | KeyCode::Char('g') => viewer.to_top(),
        KeyCode::End | KeyCode::Char('G') => viewer.to_bottom(),

        _ => {}
    }
    true
}
