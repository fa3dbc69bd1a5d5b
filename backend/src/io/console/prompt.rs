use anyhow::{Context, Result};
use std::io::{BufRead, Write};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Parse a number typed by the user; only finite values count
pub fn parse_number(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Line-oriented prompter over any reader/writer pair
///
/// Every `ask*` method returns `Ok(None)` once the input is exhausted so
/// callers can end the session cleanly.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("Failed to write to the console")
    }

    pub fn clear_screen(&mut self) -> Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN).context("Failed to write to the console")
    }

    /// Print `label` without a line break and read one line (without its terminator)
    pub fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label).context("Failed to write to the console")?;
        self.output.flush().context("Failed to write to the console")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from the console")?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Ask for a number, re-prompting with `retry_message` until one parses
    pub fn ask_number(&mut self, label: &str, retry_message: &str) -> Result<Option<f64>> {
        loop {
            let Some(input) = self.ask(label)? else {
                return Ok(None);
            };
            if let Some(value) = parse_number(&input) {
                return Ok(Some(value));
            }
            self.say(retry_message)?;
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_endings_and_reports_eof() {
        let mut prompt = prompt("first\r\nsecond\n");

        assert_eq!(prompt.ask("A: ").unwrap(), Some("first".to_string()));
        assert_eq!(prompt.ask("B: ").unwrap(), Some("second".to_string()));
        assert_eq!(prompt.ask("C: ").unwrap(), None);
        assert_eq!(String::from_utf8(prompt.into_output()).unwrap(), "A: B: C: ");
    }

    #[test]
    fn test_ask_number_reprompts_until_valid() {
        let mut prompt = prompt("long\nNaN\n 2.5 \n");

        assert_eq!(prompt.ask_number("Prop: ", "Enter a number.").unwrap(), Some(2.5));

        let output = String::from_utf8(prompt.into_output()).unwrap();
        assert_eq!(output.matches("Enter a number.").count(), 2);
    }

    #[test]
    fn test_ask_number_gives_up_at_eof() {
        let mut prompt = prompt("nope\n");
        assert_eq!(prompt.ask_number("Prop: ", "Enter a number.").unwrap(), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 15 "), Some(15.0));
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number(""), None);
    }
}
