use crate::features::session::{SessionFrame, SessionView};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::{self, Stdout};
use tracing::warn;

use super::render::{draw_session, draw_terminal_too_small, too_small};

/// Raw-mode alternate screen; restored when dropped.
pub(super) struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub(super) fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub(super) fn draw(&mut self, render: impl FnOnce(&mut ratatui::Frame)) -> io::Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl SessionView for Tui {
    fn show(&mut self, frame: &SessionFrame<'_>) -> io::Result<()> {
        self.draw(|f| {
            let area = f.area();
            if too_small(area) {
                draw_terminal_too_small(f, area);
            } else {
                draw_session(f, frame);
            }
        })
    }

    fn reset(&mut self) -> io::Result<()> {
        self.terminal.clear()
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let restored = disable_raw_mode()
            .and_then(|()| execute!(self.terminal.backend_mut(), LeaveAlternateScreen))
            .and_then(|()| self.terminal.show_cursor());
        if let Err(err) = restored {
            warn!(error = %err, "could not restore the terminal");
        }
    }
}
