//! Line-based text input and output with optional pacing.

use std::io::{self, BufRead, Cursor, Write};
use std::time::Duration;

use crate::config::Rules;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// How long to wait between animation dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    Real(Duration),
    Off,
}

impl Pacing {
    pub fn wait(self) {
        if let Pacing::Real(d) = self {
            std::thread::sleep(d);
        }
    }
}

pub struct Terminal<I: BufRead, W: Write> {
    input: I,
    output: W,
    pacing: Pacing,
    dots: usize,
    clear_screen: bool,
}

impl<I: BufRead, W: Write> Terminal<I, W> {
    pub fn new(input: I, output: W, rules: &Rules) -> Self {
        Self {
            input,
            output,
            pacing: Pacing::Real(rules.dot_delay()),
            dots: rules.animation_dots,
            clear_screen: rules.clear_screen,
        }
    }

    pub fn with_pacing(mut self, pacing: Pacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Write without a newline and flush, for prompts and animations.
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Read one line, `None` at end of input. Bytes that are not UTF-8 come
    /// through as replacement characters.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.print(text)?;
        self.read_line()
    }

    /// Discard input up to and including the next newline.
    pub fn wait_for_enter(&mut self) -> io::Result<()> {
        self.read_line().map(|_| ())
    }

    pub fn pause(&mut self, text: &str) -> io::Result<()> {
        self.print(&format!("\n{}", text))?;
        self.wait_for_enter()
    }

    pub fn header(&mut self) -> io::Result<()> {
        if self.clear_screen {
            self.print(CLEAR_SCREEN)?;
        }
        self.line("================================")?;
        self.line("   BASKETBALL TOURNAMENT MODE   ")?;
        self.line("================================\n")
    }

    /// Print `label` followed by a trail of dots, one per pacing step.
    pub fn animate(&mut self, label: &str) -> io::Result<()> {
        self.print(&format!("\n{} ", label))?;
        for _ in 0..self.dots {
            self.print(".")?;
            self.pacing.wait();
        }
        Ok(())
    }
}

impl Terminal<Cursor<Vec<u8>>, Vec<u8>> {
    /// In-memory terminal over scripted input, without pacing or screen
    /// clearing.
    pub fn headless(input: impl AsRef<[u8]>) -> Self {
        Self::new(
            Cursor::new(input.as_ref().to_vec()),
            Vec::new(),
            &Rules::headless(),
        )
        .with_pacing(Pacing::Off)
    }

    pub fn transcript(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_lines_then_eof() {
        let mut t = Terminal::headless("one\ntwo");
        assert_eq!(t.read_line().unwrap().as_deref(), Some("one\n"));
        assert_eq!(t.read_line().unwrap().as_deref(), Some("two"));
        assert_eq!(t.read_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut t = Terminal::headless(b"\xff\xfe\n1\n");
        assert_eq!(t.read_line().unwrap().as_deref(), Some("\u{fffd}\u{fffd}\n"));
        assert_eq!(t.read_line().unwrap().as_deref(), Some("1\n"));
    }

    #[test]
    fn animation_prints_dots() {
        let mut t = Terminal::headless("");
        t.animate("Layup").unwrap();
        assert_eq!(t.transcript(), "\nLayup ...");
    }

    #[test]
    fn header_without_clearing() {
        let mut t = Terminal::headless("");
        t.header().unwrap();
        let out = t.transcript();
        assert!(out.contains("BASKETBALL TOURNAMENT MODE"));
        assert!(!out.contains(CLEAR_SCREEN));
    }

    #[test]
    fn header_clears_when_asked() {
        let mut t = Terminal::new(Cursor::new(Vec::<u8>::new()), Vec::new(), &Rules::default())
            .with_pacing(Pacing::Off);
        t.header().unwrap();
        assert!(t.transcript().starts_with(CLEAR_SCREEN));
    }

    #[test]
    fn pause_consumes_one_line() {
        let mut t = Terminal::headless("ignored text\nnext\n");
        t.pause("Press Enter to continue...").unwrap();
        assert_eq!(t.read_line().unwrap().as_deref(), Some("next\n"));
    }
}
