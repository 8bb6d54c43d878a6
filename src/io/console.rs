//! # Console
//!
//! Line based prompting. Every question is written to the output, one line is read as the
//! answer, and malformed answers are met with a retry message and the same question again.
//! There is no retry limit; only the end of the input stops a prompt.

use std::{
    fmt::Display,
    io::{BufRead, ErrorKind, Result, Write},
    str::FromStr,
};

use tracing::debug;

use super::*;

/// Interactive prompt over a reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Creates a new console reading answers from `input` and writing prompts to `output`
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Returns the writer, e.g. to print reports in between prompts
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console and returns reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes `prompt` (without line break) and reads one line.
    /// Returns the line with surrounding whitespace removed.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnexpectedEof`] if the input is exhausted.
    pub fn prompt_line<P: Display>(&mut self, prompt: P) -> Result<&str> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads one line without prompting
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnexpectedEof`] if the input is exhausted.
    pub fn read_line(&mut self) -> Result<&str> {
        self.line.clear();
        let read = self.input.read_line(&mut self.line)?;
        raise_error_unless!(read > 0, ErrorKind::UnexpectedEof, "Input ended");
        Ok(self.line.trim())
    }

    /// Asks `prompt` until the answer parses as `T` and satisfies `accept`.
    /// After every rejected answer `retry` is printed on its own line.
    ///
    /// # Errors
    /// Returns [`ErrorKind::UnexpectedEof`] if the input ends before an answer was accepted.
    pub fn prompt_value<T, P, M, F>(&mut self, prompt: P, retry: M, accept: F) -> Result<T>
    where
        T: FromStr,
        P: Display,
        M: Display,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.prompt_line(&prompt)?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => {
                    debug!(answer, "rejected console input");
                    writeln!(self.output, "{retry}")?;
                }
            }
        }
    }

    /// Asks a yes/no question; only `y` (case-insensitive) counts as yes
    pub fn confirm<P: Display>(&mut self, prompt: P) -> Result<bool> {
        Ok(self.prompt_line(prompt)?.eq_ignore_ascii_case("y"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &str) -> Console<&[u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn output(console: Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.into_inner().1).unwrap()
    }

    #[test]
    fn reprompts_until_valid() {
        let mut console = console("abc\n1\n  7 \n");
        let value: u32 = console
            .prompt_value("n: ", "again", |&n: &u32| n >= 2)
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(output(console), "n: again\nn: again\nn: ");
    }

    #[test]
    fn end_of_input() {
        let mut console = console("x\n");
        let err = console
            .prompt_value::<u32, _, _, _>("n: ", "again", |_| true)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn negative_numbers_are_rejected() {
        let mut console = console("-1\n0\n");
        let value: u32 = console.prompt_value("v: ", "no", |_| true).unwrap();
        assert_eq!(value, 0);
    }

    #[test]
    fn confirm() {
        let mut console = console("Y\nyes\n\n");
        assert!(console.confirm("? ").unwrap());
        assert!(!console.confirm("? ").unwrap());
        assert!(!console.confirm("? ").unwrap());
        assert!(console.confirm("? ").is_err());
    }

    #[test]
    fn last_line_without_newline() {
        let mut console = console("5");
        assert_eq!(console.prompt_line("").unwrap(), "5");
    }
}
