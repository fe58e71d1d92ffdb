use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;

/// Keyboard access for menus (blocking) and live sessions (polling).
pub trait KeyInput {
    /// Waits for the next key press.
    fn read_blocking(&mut self) -> io::Result<KeyEvent>;

    /// Returns `true` if a key press is waiting, consuming it. Never blocks.
    fn poll_nonblocking(&mut self) -> io::Result<bool>;
}

/// Reads the terminal through crossterm. Expects raw mode to be enabled.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeyInput for TerminalKeys {
    fn read_blocking(&mut self) -> io::Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(key);
            }
        }
    }

    fn poll_nonblocking(&mut self) -> io::Result<bool> {
        // Drain resize and release events so they don't count as a key.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(true);
            }
        }
        Ok(false)
    }
}
