use crate::domain::AppError;

/// Port for the final "press Enter" acknowledgment.
pub trait ExitPrompt {
    /// Block until the user acknowledges.
    fn acknowledge(&self) -> Result<(), AppError>;
}

/// Prompt that returns immediately, for non-interactive runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPrompt;

impl ExitPrompt for NoopPrompt {
    fn acknowledge(&self) -> Result<(), AppError> {
        Ok(())
    }
}
