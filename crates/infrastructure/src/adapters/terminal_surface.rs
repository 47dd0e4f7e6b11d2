//! Terminal display surface

use std::io::{self, IsTerminal, Stdout, Write};

use dynclock_application::ports::DisplaySurface;
use parking_lot::Mutex;

/// How each write reaches the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Return to column 0, clear the line, print.
    Redraw,
    /// One line per write, for pipes and files.
    Lines,
}

/// Display surface showing the clock on a terminal.
///
/// On a terminal each write returns the cursor to the start of the line and
/// clears it before printing, so the clock updates in place. Redirected
/// output gets one plain line per write instead.
#[derive(Debug)]
pub struct TerminalSurface<W: Write + Send = Stdout> {
    out: Mutex<W>,
    mode: Mode,
}

impl TerminalSurface<Stdout> {
    /// Creates a surface on standard output, redrawing in place only when
    /// stdout is a terminal.
    #[must_use]
    pub fn stdout() -> Self {
        let out = io::stdout();
        if out.is_terminal() {
            Self::new(out)
        } else {
            Self::lines(out)
        }
    }
}

impl<W: Write + Send> TerminalSurface<W> {
    /// Creates a surface redrawing a single line of `out`.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            mode: Mode::Redraw,
        }
    }

    /// Creates a surface writing one plain line per update to `out`.
    #[must_use]
    pub fn lines(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            mode: Mode::Lines,
        }
    }

    /// Ends the redrawn line so following output starts on a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error.
    pub fn finish(&self) -> io::Result<()> {
        let mut out = self.out.lock();
        if self.mode == Mode::Redraw {
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    /// Consumes the surface, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn draw(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        match self.mode {
            // \r: column 0, ESC[2K: clear the whole line
            Mode::Redraw => write!(out, "\r\x1b[2K{text}")?,
            Mode::Lines => writeln!(out, "{text}")?,
        }
        out.flush()
    }
}

impl<W: Write + Send> DisplaySurface for TerminalSurface<W> {
    fn set_text(&self, text: &str) {
        if let Err(err) = self.draw(text) {
            tracing::warn!(error = %err, "failed to draw clock");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn redraws_in_place() {
        let surface = TerminalSurface::new(Vec::new());
        surface.set_text("09:00:00");
        surface.set_text("09:00:01");
        surface.finish().unwrap();

        let written = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(written, "\r\x1b[2K09:00:00\r\x1b[2K09:00:01\n");
    }

    #[test]
    fn redirected_output_has_no_escape_codes() {
        let surface = TerminalSurface::lines(Vec::new());
        surface.set_text("09:00:00");
        surface.set_text("09:00:01");
        surface.finish().unwrap();

        let written = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(written, "09:00:00\n09:00:01\n");
    }

    #[test]
    fn write_errors_do_not_escape() {
        let surface = TerminalSurface::new(BrokenPipe);
        surface.set_text("09:00:00");
        assert!(surface.finish().is_err());
    }
}
