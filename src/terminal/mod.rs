//! Console output sinks
//!
//! The `eat` capability writes through the [`Console`] trait rather than
//! calling `println!` directly, so the emitted lines can be captured and
//! order-checked in tests:
//! - [`StdoutTerminal`]: forwards each line to standard output
//! - [`MockTerminal`]: records lines for assertions
//!
//! Writing a line cannot fail; the sinks carry no error path.

/// Line-oriented output sink.
pub trait Console {
    /// Write one finished line.
    fn line(&mut self, text: &str);
}

/// Console that prints each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl Console for StdoutTerminal {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Mock console for capturing output in tests.
#[derive(Debug, Clone, Default)]
pub struct MockTerminal {
    lines: Vec<String>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// All recorded lines, in emission order.
    pub fn output(&self) -> &[String] {
        &self.lines
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Console for MockTerminal {
    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_in_order() {
        let mut terminal = MockTerminal::new();
        terminal.line("first");
        terminal.line("second");
        terminal.line("third");

        assert_eq!(terminal.output(), ["first", "second", "third"]);
    }

    #[test]
    fn test_clear_empties_output() {
        let mut terminal = MockTerminal::new();
        terminal.line("something");
        terminal.clear();

        assert!(terminal.output().is_empty());
    }
}
