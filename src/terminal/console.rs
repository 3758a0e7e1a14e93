//! The real console backend over stdin/stdout.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{self, Clear, ClearType};

use super::{Key, TermError, Terminal};

/// Terminal backend over the process's stdin and stdout.
///
/// Line reads use the locked standard input; key reads switch the terminal
/// into raw mode for the duration of a single key event and restore it on
/// the way out, even when the read fails.
///
/// # Examples
///
/// ```rust,no_run
/// use termflow::terminal::{Console, Terminal};
///
/// let mut console = Console::new();
/// console.write_line("hello").unwrap();
/// ```
#[derive(Debug, Default)]
pub struct Console {
    _private: (),
}

impl Console {
    /// Creates a console backend.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Restores cooked mode when dropped, so a failed read cannot leave the
/// terminal raw.
struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self, TermError> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {error}");
        }
    }
}

fn decode(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(character) => Key::Char(character),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Esc => Key::Esc,
        _ => Key::Other,
    }
}

impl Terminal for Console {
    fn write(&mut self, text: &str) -> Result<(), TermError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<(), TermError> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, TermError> {
        let mut buffer = String::new();
        let bytes = io::stdin().lock().read_line(&mut buffer)?;
        if bytes == 0 {
            return Err(TermError::Eof);
        }
        while buffer.ends_with('\n') || buffer.ends_with('\r') {
            buffer.pop();
        }
        Ok(buffer)
    }

    fn read_key(&mut self) -> Result<Key, TermError> {
        let _guard = RawModeGuard::enter()?;
        loop {
            // Key releases and non-key events (resize, focus) are not input.
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(decode(key_event.code));
                }
            }
        }
    }

    fn clear(&mut self) -> Result<(), TermError> {
        let mut stdout = io::stdout().lock();
        crossterm::execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }
}
