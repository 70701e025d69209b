//! Choice Prompter Port - collecting the user's answers.
//!
//! The wizard state machine decides what to ask; implementations of this
//! port decide how to ask it (terminal, scripted input, a UI toolkit).

use thiserror::Error;

use crate::domain::catalog::{UnitType, UnitTypeKey};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::wizard::{BinaryPrompt, IntroScreen, TypePrompt};

/// What the user wants to change on the result screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    UnitType,
    Utilities,
    Hillside,
    Done,
}

/// Port for asking the user for wizard inputs.
///
/// # Contract
///
/// Implementations must:
/// - Return one of the offered options, never an invented value
/// - Fall back to the prompt's default when the user accepts it
/// - Report `PromptError::EndOfInput` when no more answers can be read
///
/// # Usage
///
/// ```rust,ignore
/// let prompter: &mut dyn ChoicePrompter = &mut terminal;
///
/// prompter.show_intro(&INTRO)?;
/// let key = prompter.choose_unit_type(&TypePrompt::standard(), &Catalog::list_types())?;
/// let utilities = prompter.choose_yes_no(&BinaryPrompt::utilities())?;
/// ```
pub trait ChoicePrompter {
    /// Shows the intro screen and waits for the user to begin.
    fn show_intro(&mut self, intro: &IntroScreen) -> Result<(), PromptError>;

    /// Asks for a unit type from the given options.
    fn choose_unit_type(
        &mut self,
        prompt: &TypePrompt,
        options: &[(UnitTypeKey, &'static UnitType)],
    ) -> Result<UnitTypeKey, PromptError>;

    /// Asks a yes/no question.
    fn choose_yes_no(&mut self, prompt: &BinaryPrompt) -> Result<bool, PromptError>;

    /// Shows a rendered estimate.
    fn show_estimate(&mut self, rendered: &str) -> Result<(), PromptError>;

    /// Asks which input to change next, if any.
    fn choose_revision(&mut self) -> Result<Revision, PromptError>;
}

/// Errors that can occur while prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Input ended before a choice was made")]
    EndOfInput,

    #[error("No valid answer to '{prompt}' after {attempts} attempts")]
    TooManyAttempts { prompt: String, attempts: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PromptError> for DomainError {
    fn from(err: PromptError) -> Self {
        DomainError::new(ErrorCode::PromptFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_many_attempts_names_prompt() {
        let err = PromptError::TooManyAttempts {
            prompt: "Is home located on hillside?".to_string(),
            attempts: 3,
        };
        assert_eq!(
            err.to_string(),
            "No valid answer to 'Is home located on hillside?' after 3 attempts"
        );
    }

    #[test]
    fn converts_to_prompt_failed_domain_error() {
        let err: DomainError = PromptError::EndOfInput.into();
        assert_eq!(err.code, ErrorCode::PromptFailed);
    }
}
