//! Terminal session: raw mode, hidden cursor and click reporting, held for
//! the lifetime of one [`TerminalSession`] and undone in `Drop`.

use std::fmt;
use std::io::{self, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{Command, execute};
use log::{info, warn};

use crate::core::viewport::MIN_SIDE;

#[derive(Debug)]
pub enum TerminalError {
    RawMode(io::Error),
    Size(io::Error),
    TooSmall { rows: u16, cols: u16 },
    Io(io::Error),
}

impl fmt::Display for TerminalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalError::RawMode(e) => write!(f, "cannot enable raw mode: {e}"),
            TerminalError::Size(e) => write!(f, "cannot query terminal size: {e}"),
            TerminalError::TooSmall { rows, cols } => write!(
                f,
                "terminal is {cols}x{rows}, need at least {MIN_SIDE}x{MIN_SIDE}"
            ),
            TerminalError::Io(e) => write!(f, "terminal I/O error: {e}"),
        }
    }
}

impl std::error::Error for TerminalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TerminalError::RawMode(e) | TerminalError::Size(e) | TerminalError::Io(e) => Some(e),
            TerminalError::TooSmall { .. } => None,
        }
    }
}

/// Button press/release reporting in SGR encoding, without the motion
/// tracking that crossterm's `EnableMouseCapture` turns on.
#[derive(Debug, Clone, Copy)]
pub struct EnableClickReporting;

impl Command for EnableClickReporting {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1000h\x1b[?1006h")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "ANSI click reporting only"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisableClickReporting;

impl Command for DisableClickReporting {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[?1000l\x1b[?1006l")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "ANSI click reporting only"))
    }
}

/// Scoped terminal modes. Everything `start` managed to switch on is
/// switched off again when the session drops, including on panic unwind.
pub struct TerminalSession {
    rows: u16,
    cols: u16,
}

impl TerminalSession {
    pub fn start() -> Result<Self, TerminalError> {
        enable_raw_mode().map_err(TerminalError::RawMode)?;
        // From here on, Drop undoes whatever was applied.
        let mut session = Self { rows: 0, cols: 0 };

        let (cols, rows) = terminal::size().map_err(TerminalError::Size)?;
        if rows < MIN_SIDE || cols < MIN_SIDE {
            return Err(TerminalError::TooSmall { rows, cols });
        }
        session.rows = rows;
        session.cols = cols;

        execute!(
            stdout(),
            Hide,
            Clear(ClearType::All),
            MoveTo(0, 0),
            EnableClickReporting
        )
        .map_err(TerminalError::Io)?;
        info!("Terminal modes enabled (raw, hidden cursor, click reporting), size {cols}x{rows}");
        Ok(session)
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableClickReporting,
            Show,
            Clear(ClearType::All),
            MoveTo(0, 0)
        );
        if let Err(e) = disable_raw_mode() {
            warn!("Failed to restore terminal mode: {}", e);
        }
        info!("Terminal restored");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi(command: impl Command) -> String {
        let mut out = String::new();
        command.write_ansi(&mut out).unwrap();
        out
    }

    #[test]
    fn test_click_reporting_sequences() {
        assert_eq!(ansi(EnableClickReporting), "\x1b[?1000h\x1b[?1006h");
        assert_eq!(ansi(DisableClickReporting), "\x1b[?1000l\x1b[?1006l");
    }

    #[test]
    fn test_error_messages() {
        let err = TerminalError::TooSmall { rows: 2, cols: 40 };
        assert_eq!(err.to_string(), "terminal is 40x2, need at least 3x3");

        let err = TerminalError::RawMode(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "cannot enable raw mode: not a tty");
        assert!(std::error::Error::source(&err).is_some());
    }
}
