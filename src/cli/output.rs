//! Colored terminal output for build progress and diagnostics.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of the `=`/`-` rules around section and step headers.
const RULE_WIDTH: usize = 70;

/// Writes human-readable progress and diagnostic text to standard output.
///
/// All output of the orchestrator goes through this type; there is no
/// machine-readable output contract.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Create an output manager.
    ///
    /// `quiet` suppresses everything, including warnings; `verbose` enables
    /// the extra detail lines.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a ruled section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout)?;
        writeln!(stdout, "{}", "=".repeat(RULE_WIDTH))?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "  {}", title)?;
        stdout.reset()?;
        writeln!(stdout, "{}", "=".repeat(RULE_WIDTH))
    }

    /// Print a numbered phase header, e.g. `[2/4] Checking packaging tool`.
    pub fn step(&self, step: usize, total: usize, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout)?;
        stdout.set_color(ColorSpec::new().set_bold(true))?;
        writeln!(stdout, "[{}/{}] {}", step, total, message)?;
        stdout.reset()?;
        writeln!(stdout, "{}", "-".repeat(RULE_WIDTH))
    }

    /// Print a progress message.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "  {}", message)
    }

    /// Print an indented detail line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        writeln!(stdout, "    {}", message)
    }

    /// Print a detail line only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if self.quiet || !self.verbose {
            return Ok(());
        }
        self.indent(message)
    }

    /// Print a green check-marked success message.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Green, "✓", message)
    }

    /// Print a yellow warning message.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Yellow, "⚠", message)
    }

    /// Print a red failure message.
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.marked(Color::Red, "✗", message)
    }

    fn marked(&self, color: Color, mark: &str, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        write!(stdout, "  ")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(stdout, "{}", mark)?;
        stdout.reset()?;
        writeln!(stdout, " {}", message)
    }
}
