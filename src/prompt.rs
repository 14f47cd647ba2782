// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Line-oriented prompting for the interactive menu.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{PromptError, ValidationError};
use crate::models::Category;
use crate::utils::{parse_amount, parse_date};

/// Invalid answers tolerated per field before the entry is abandoned.
pub const MAX_ATTEMPTS: usize = 5;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, msg: impl std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{}", msg)?;
        Ok(())
    }

    /// Prints `prompt` and reads one line without its terminator. `None` at end of input.
    pub fn line(&mut self, prompt: &str) -> Result<Option<String>, PromptError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    fn retry<T>(
        &mut self,
        prompt: &str,
        mut parse: impl FnMut(&str) -> Result<T, ValidationError>,
    ) -> Result<T, PromptError> {
        for _ in 0..MAX_ATTEMPTS {
            let answer = self.line(prompt)?.ok_or(PromptError::EndOfInput)?;
            match parse(&answer) {
                Ok(v) => return Ok(v),
                Err(e) => self.say(e)?,
            }
        }
        Err(PromptError::TooManyAttempts(MAX_ATTEMPTS))
    }

    /// A blank answer yields `default` when one is given.
    pub fn date(
        &mut self,
        prompt: &str,
        default: Option<NaiveDate>,
    ) -> Result<NaiveDate, PromptError> {
        self.retry(prompt, |s| match default {
            Some(d) if s.trim().is_empty() => Ok(d),
            _ => parse_date(s),
        })
    }

    pub fn amount(&mut self) -> Result<Decimal, PromptError> {
        self.retry("Enter the amount: ", parse_amount)
    }

    pub fn category(&mut self) -> Result<Category, PromptError> {
        self.retry(
            "Enter the category ('I' for Income or 'E' for Expense): ",
            Category::from_letter,
        )
    }

    pub fn description(&mut self) -> Result<Option<String>, PromptError> {
        let answer = self
            .line("Enter the description (optional): ")?
            .ok_or(PromptError::EndOfInput)?;
        Ok(Some(answer.trim().to_string()).filter(|s| !s.is_empty()))
    }

    /// Anything other than `y`/`Y` is a no, including end of input.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        Ok(self
            .line(prompt)?
            .is_some_and(|s| s.trim().eq_ignore_ascii_case("y")))
    }
}
