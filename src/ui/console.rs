use std::io::{self, BufRead, Write};

// ---------------------------------------------------------------------------
// Interactive console surface
// ---------------------------------------------------------------------------

/// Line-based prompt/response surface. The state machine talks to the user
/// exclusively through this trait, so tests can script a whole session.
pub trait Console {
    /// Show `prompt` and read one line of input. `None` means the input
    /// stream ended (EOF); the session treats that as a request to exit.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Show a user-visible notice (invalid input, recoverable errors).
    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Console over stdin/stdout.
pub struct StdioConsole;

impl Console for StdioConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{message}")?;
        stdout.flush()
    }
}
