//! Line-oriented prompter over any reader/writer pair.
//!
//! Each question is printed with its default; an empty answer accepts the
//! default and an unrecognized answer is asked again, up to a limit.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::domain::catalog::{UnitType, UnitTypeKey};
use crate::domain::wizard::{BinaryPrompt, IntroScreen, TypePrompt};
use crate::ports::{ChoicePrompter, PromptError, Revision};

const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Terminal implementation of `ChoicePrompter`.
///
/// Generic over its streams so tests can drive it with in-memory buffers.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets how many unrecognized answers are tolerated per question.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Consumes the prompter, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn ask<T>(
        &mut self,
        question: &str,
        hint: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        for attempt in 1..=self.max_attempts {
            write!(self.output, "{} ", question)?;
            self.output.flush()?;

            let answer = self.read_line()?.ok_or(PromptError::EndOfInput)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }

            debug!(question, answer = %answer, attempt, "Unrecognized answer");
            writeln!(self.output, "Please answer {}.", hint)?;
        }

        Err(PromptError::TooManyAttempts {
            prompt: question.to_string(),
            attempts: self.max_attempts,
        })
    }
}

impl<R: BufRead, W: Write> ChoicePrompter for TerminalPrompter<R, W> {
    fn show_intro(&mut self, intro: &IntroScreen) -> Result<(), PromptError> {
        writeln!(self.output, "{}", intro.headline)?;
        write!(self.output, "Press Enter to {}: ", intro.action.to_lowercase())?;
        self.output.flush()?;
        self.read_line()?.ok_or(PromptError::EndOfInput)?;
        writeln!(self.output)?;
        Ok(())
    }

    fn choose_unit_type(
        &mut self,
        prompt: &TypePrompt,
        options: &[(UnitTypeKey, &'static UnitType)],
    ) -> Result<UnitTypeKey, PromptError> {
        writeln!(self.output, "{}", prompt.prompt)?;
        let mut default_number = 1;
        for (i, (key, unit)) in options.iter().enumerate() {
            let marker = if *key == prompt.default {
                default_number = i + 1;
                " (default)"
            } else {
                ""
            };
            writeln!(
                self.output,
                "  {}) {} - {}, {} sq ft [{}]{}",
                i + 1,
                unit.name,
                unit.construction,
                unit.area,
                key,
                marker
            )?;
        }

        let question = format!("Choose 1-{} [{}]:", options.len(), default_number);
        let hint = format!("with a number from 1 to {} or a unit type key", options.len());
        let choice = self.ask(&question, &hint, |answer| {
            if answer.is_empty() {
                return Some(prompt.default);
            }
            if let Ok(n) = answer.parse::<usize>() {
                return n.checked_sub(1).and_then(|i| options.get(i)).map(|(k, _)| *k);
            }
            answer
                .parse::<UnitTypeKey>()
                .ok()
                .filter(|key| options.iter().any(|(k, _)| k == key))
        })?;

        writeln!(self.output)?;
        Ok(choice)
    }

    fn choose_yes_no(&mut self, prompt: &BinaryPrompt) -> Result<bool, PromptError> {
        writeln!(self.output, "{}", prompt.prompt)?;
        if let Some(explanation) = prompt.explanation {
            writeln!(self.output, "  {}", explanation)?;
        }

        let default_label = if prompt.default { "Yes" } else { "No" };
        let question = format!("Yes/No [{}]:", default_label);
        let answer = self.ask(&question, "yes or no", |answer| {
            match answer.to_ascii_lowercase().as_str() {
                "" => Some(prompt.default),
                "y" | "yes" | "true" => Some(true),
                "n" | "no" | "false" => Some(false),
                _ => None,
            }
        })?;

        writeln!(self.output)?;
        Ok(answer)
    }

    fn show_estimate(&mut self, rendered: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", rendered.trim_end())?;
        writeln!(self.output)?;
        self.output.flush()?;
        Ok(())
    }

    fn choose_revision(&mut self) -> Result<Revision, PromptError> {
        let result = self.ask(
            "Change [t]ype, [u]tilities, [h]illside, or [q]uit:",
            "t, u, h, or q",
            |answer| match answer.to_ascii_lowercase().as_str() {
                "t" | "type" => Some(Revision::UnitType),
                "u" | "utilities" => Some(Revision::Utilities),
                "h" | "hillside" => Some(Revision::Hillside),
                "" | "q" | "quit" => Some(Revision::Done),
                _ => None,
            },
        );

        match result {
            Err(PromptError::EndOfInput) => {
                writeln!(self.output)?;
                Ok(Revision::Done)
            }
            other => other,
        }
    }
}
