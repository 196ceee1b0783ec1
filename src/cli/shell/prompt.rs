use crate::Result;
use std::io::{BufRead, Write};

/// A numeric menu answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Number(u64),
    /// Something other than digits was typed
    Invalid,
    /// Input ended
    Closed,
}

/// Line-oriented terminal I/O over any reader and writer
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref())?;
        Ok(())
    }

    /// Print an empty line
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Show `question` and read a trimmed line; `None` once input ends
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        // bytes that are not UTF-8 become replacement characters and fail validation later
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Show `question` and read a whole number
    pub fn ask_number(&mut self, question: &str) -> Result<Choice> {
        Ok(match self.ask(question)? {
            None => Choice::Closed,
            Some(answer) => match answer.parse::<u64>() {
                Ok(number) => Choice::Number(number),
                Err(_) => Choice::Invalid,
            },
        })
    }

    /// Like `ask_number`, reporting non-numeric answers the way every menu does
    pub fn ask_choice(&mut self, question: &str) -> Result<Choice> {
        let choice = self.ask_number(question)?;
        if choice == Choice::Invalid {
            self.say("You can enter only digits corresponding to the options above")?;
        }
        Ok(choice)
    }

    /// Print a menu header followed by numbered options
    pub fn menu(&mut self, options: &[&str]) -> Result<()> {
        self.say("Choose Operation Reference Number from the listed below:")?;
        for (number, option) in options.iter().enumerate() {
            self.say(format!("{} - '{}'", number + 1, option))?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
