use crate::entities::answer::is_affirmative;
use crate::error::{BootstrapError, Result};
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Yes/no question asked before optional work.
pub trait Prompt {
    fn confirm(&self, question: &str) -> Result<bool>;
}

/// Asks on a writer and reads the reply as one line from a reader.
///
/// End of input reads as "no", so a closed stdin never blocks the run.
pub struct LinePrompt<R, W> {
    input: RefCell<R>,
    output: RefCell<W>,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input: RefCell::new(input), output: RefCell::new(output) }
    }

    pub fn into_output(self) -> W {
        self.output.into_inner()
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn confirm(&self, question: &str) -> Result<bool> {
        {
            let mut output = self.output.borrow_mut();
            output.write_all(question.as_bytes()).map_err(prompt_error)?;
            output.flush().map_err(prompt_error)?;
        }

        let mut reply = String::new();
        let read = self.input.borrow_mut().read_line(&mut reply).map_err(prompt_error)?;
        if read == 0 {
            // stdin closed
            let mut output = self.output.borrow_mut();
            writeln!(output).map_err(prompt_error)?;
            return Ok(false);
        }

        Ok(is_affirmative(&reply))
    }
}

fn prompt_error(err: io::Error) -> BootstrapError {
    BootstrapError::Prompt(err.to_string())
}

/// [`LinePrompt`] on the process terminal.
pub type StdinPrompt = LinePrompt<io::StdinLock<'static>, io::Stdout>;

impl StdinPrompt {
    pub fn stdin() -> Self {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}
