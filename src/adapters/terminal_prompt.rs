use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::ExitPrompt;

/// Waits for Enter on the controlling terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

impl ExitPrompt for TerminalPrompt {
    fn acknowledge(&self) -> Result<(), AppError> {
        let answer = Input::<String>::new()
            .with_prompt("Press Enter to exit")
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(_) => Ok(()),
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(()),
            Err(err) => Err(AppError::Prompt(err.to_string())),
        }
    }
}
