//! Line-based console the game talks through.
//!
//! The engine only needs three things from the outside world: print a line, ask
//! for a line, and optionally wait a moment for pacing. `Terminal` provides them
//! over any reader/writer pair, which is stdin/stdout in the binary and in-memory
//! buffers in tests.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use crate::error::{Error, Result};

/// Input/output collaborator of the game engine.
pub trait Console {
    /// Print one line verbatim.
    fn say(&mut self, line: &str) -> Result<()>;

    /// Show `message` and read one line of input, without the line terminator.
    ///
    /// Returns `Error::InputClosed` once input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<String>;

    /// Pause for pacing. No-op by default.
    fn pause(&mut self) {}
}

/// `Console` over a buffered reader and a writer.
#[derive(Debug)]
pub struct Terminal<R, W> {
    input: R,
    output: W,
    pause: Duration,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal on the process's stdin and stdout.
    #[must_use]
    pub fn stdio(pause: Duration) -> Self {
        Self::new(io::stdin().lock(), io::stdout()).with_pause(pause)
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Create a terminal with no pacing pause.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pause: Duration::ZERO,
        }
    }

    /// Set the pacing pause.
    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Writer the terminal prints to.
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn pause(&mut self) {
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
    }
}
