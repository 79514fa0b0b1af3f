use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Interactive prompt mode for CLI operations
#[derive(Debug, Clone, Copy)]
pub enum Prompt {
    /// Console-based interactive prompts reading from standard input
    Console,
    /// Non-interactive mode that declines every confirmation
    NonInteractive,
}

impl Prompt {
    pub fn new(interactive: bool) -> Self {
        if interactive {
            Self::Console
        } else {
            Self::NonInteractive
        }
    }

    /// Print `message` and block for a single line of operator input.
    ///
    /// Only a response of "yes" (case-insensitive) counts as approval;
    /// anything else, including an empty line or EOF, declines.
    pub fn confirm(&self, message: &str) -> Result<bool> {
        match self {
            Prompt::Console => {
                print!("{message} ");
                io::stdout().flush()?;

                let mut answer = String::new();
                io::stdin().lock().read_line(&mut answer)?;
                Ok(is_approval(&answer))
            }
            Prompt::NonInteractive => Ok(false),
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::Console
    }
}

fn is_approval(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
