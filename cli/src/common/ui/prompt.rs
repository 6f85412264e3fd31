//! # qwikgen Prompts (`common::ui::prompt`)
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! ## Overview
//!
//! Every scaffolding command needs a name. It can be given on the command
//! line; when it is not, the command asks for it through a `Prompt`.
//!
//! A prompt shows a question and a placeholder example, checks each answer
//! with a validator, and asks again until the answer is valid. The user can
//! cancel (end of input), which aborts the command with
//! `QwikgenError::NoInput`.
//!
//! ```text
//! What is the name of the route? (e.g. product/[id]):
//! Route name cannot be empty
//! What is the name of the route? (e.g. product/[id]): blog/post
//! ```
//!
use crate::core::error::{ArtifactKind, QwikgenError, Result};
use crate::core::naming;
use anyhow::{anyhow, Context};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Validator: `Err(message)` rejects the answer and the message is shown.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Question text and placeholder for one prompt.
#[derive(Debug, Clone, Copy)]
pub struct PromptText {
    pub question: &'static str,
    pub placeholder: &'static str,
}

pub const ROUTE_PROMPT: PromptText = PromptText {
    question: "What is the name of the route?",
    placeholder: "product/[id]",
};

pub const COMPONENT_PROMPT: PromptText = PromptText {
    question: "What is the name of the component?",
    placeholder: "my-component",
};

/// Asks the user for a line of text.
pub trait Prompt {
    /// Returns the first answer accepted by `validate`, or `None` if the user
    /// cancelled.
    fn ask(&mut self, text: &PromptText, validate: Validator<'_>) -> Result<Option<String>>;
}

/// A `Prompt` reading answers line by line from `input` and writing the
/// questions and validation messages to `output`.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompts on stderr so stdout stays clean for `--print` output.
    pub fn stdin() -> Self {
        TerminalPrompt::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        TerminalPrompt { input, output }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn ask(&mut self, text: &PromptText, validate: Validator<'_>) -> Result<Option<String>> {
        loop {
            write!(self.output, "{} (e.g. {}): ", text.question, text.placeholder)
                .and_then(|_| self.output.flush())
                .context("Failed to write prompt")?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read answer")?;
            if read == 0 {
                debug!("Prompt cancelled (end of input)");
                return Ok(None);
            }

            let answer = line.trim_end_matches(['\r', '\n']).to_string();
            match validate(&answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(message) => {
                    writeln!(self.output, "{}", message).context("Failed to write prompt")?;
                }
            }
        }
    }
}

/// Returns the name given on the command line, or asks for one.
///
/// Both paths apply `naming::validate_name`. A cancelled prompt becomes
/// `QwikgenError::NoInput`.
pub fn read_name(
    given: Option<String>,
    kind: ArtifactKind,
    prompt: &mut dyn Prompt,
    text: &PromptText,
) -> Result<String> {
    if let Some(name) = given {
        naming::validate_name(kind, &name)?;
        return Ok(name);
    }

    let validate = |value: &str| naming::validate_name(kind, value).map_err(|e| e.to_string());
    match prompt.ask(text, &validate)? {
        Some(name) => {
            naming::validate_name(kind, &name)?;
            Ok(name)
        }
        None => Err(anyhow!(QwikgenError::NoInput { kind })),
    }
}

/// A `Prompt` that replays fixed answers, for tests.
#[cfg(test)]
pub struct ScriptedPrompt {
    answers: std::collections::VecDeque<String>,
    pub rejections: Vec<String>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompt {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            rejections: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn ask(&mut self, _text: &PromptText, validate: Validator<'_>) -> Result<Option<String>> {
        while let Some(answer) = self.answers.pop_front() {
            match validate(&answer) {
                Ok(()) => return Ok(Some(answer)),
                Err(message) => self.rejections.push(message),
            }
        }
        Ok(None)
    }
}
