//! Full-screen, scrollable list used by `view`.

pub mod input;
pub mod ui;

use std::io;

use anyhow::Result;
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, text::Line, Terminal};

use crate::task::Todo;
use input::handle_event;
use ui::{draw, todo_lines};

/// Scroll state over the pre-rendered todo lines.
pub struct Viewer {
    pub lines: Vec<Line<'static>>,
    pub scroll: usize,
    /// Rows available for content, updated on every draw.
    pub viewport: usize,
}

impl Viewer {
    pub fn new(todos: &[&Todo]) -> Self {
        Self {
            lines: todo_lines(todos),
            scroll: 0,
            viewport: 0,
        }
    }

    /// Largest offset that still fills the viewport.
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport)
    }

    pub fn set_viewport(&mut self, rows: usize) {
        self.viewport = rows;
        self.clamp();
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_add(rows);
        self.clamp();
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport.max(1));
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport.max(1));
    }

    pub fn to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    fn clamp(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

/// Shows `todos` until the user quits. Never touches the store.
pub fn run_viewer(todos: &[&Todo]) -> Result<()> {
    let mut viewer = Viewer::new(todos);

    enable_raw_mode()?;
    // Restores the terminal even if we bail out below
    let _guard = TerminalGuard;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| draw(f, &mut viewer))?;
        if !handle_event(&mut viewer, event::read()?) {
            break;
        }
    }
    tracing::debug!(lines = viewer.lines.len(), "viewer closed");
    Ok(())
}

/// Restores the terminal on drop (even if we return early)
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Best-effort cleanup; errors at shutdown are ignored
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}
