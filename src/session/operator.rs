use anyhow::Result;
use inquire::{Confirm, InquireError, Select, Text};
use std::fmt;

use crate::ui::is_prompt_cancelled;

/// One selectable entry of the language catalog.
#[derive(Debug, Clone)]
pub struct LanguageChoice {
    pub code: String,
    pub name: String,
}

impl fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Operator-facing prompts for the session loop.
///
/// A `None` result means the operator interrupted the prompt; the session
/// treats that as a shutdown request and processes no partial turn.
pub trait Operator {
    /// Asks whether to keep the default language (English).
    fn confirm_default_language(&mut self) -> Result<Option<bool>>;

    /// Asks the operator to pick a language; returns its code.
    fn select_language(&mut self, choices: Vec<LanguageChoice>) -> Result<Option<String>>;

    /// Blocks for the next question.
    fn ask_question(&mut self) -> Result<Option<String>>;
}

/// Interactive prompts on the terminal.
#[derive(Debug, Default)]
pub struct TerminalOperator;

fn map_prompt<V>(result: Result<V, InquireError>) -> Result<Option<V>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if is_prompt_cancelled(&e) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl Operator for TerminalOperator {
    fn confirm_default_language(&mut self) -> Result<Option<bool>> {
        map_prompt(
            Confirm::new("Use default language? (English)")
                .with_default(true)
                .prompt(),
        )
    }

    fn select_language(&mut self, choices: Vec<LanguageChoice>) -> Result<Option<String>> {
        let selected = map_prompt(Select::new("Choose a language:", choices).prompt())?;
        Ok(selected.map(|choice| choice.code))
    }

    fn ask_question(&mut self) -> Result<Option<String>> {
        map_prompt(Text::new("Q:").prompt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_choice_display() {
        let choice = LanguageChoice {
            code: "fr".to_string(),
            name: "French".to_string(),
        };
        assert_eq!(choice.to_string(), "fr - French");
    }

    #[test]
    fn test_map_prompt_value() {
        let mapped = map_prompt(Ok(42)).unwrap();
        assert_eq!(mapped, Some(42));
    }

    #[test]
    fn test_map_prompt_interruption_is_none() {
        let mapped: Option<i32> = map_prompt(Err(InquireError::OperationInterrupted)).unwrap();
        assert!(mapped.is_none());

        let mapped: Option<i32> = map_prompt(Err(InquireError::OperationCanceled)).unwrap();
        assert!(mapped.is_none());
    }

    #[test]
    fn test_map_prompt_other_error_propagates() {
        let mapped: Result<Option<i32>> = map_prompt(Err(InquireError::Custom("boom".into())));
        assert!(mapped.is_err());
    }
}
