//! Line-based interactive prompts.
//!
//! Generic over the input and output streams so the conversation can be
//! scripted in tests; the binary wires it to stdin/stderr.

use crate::audit::criteria::CriteriaSet;
use anyhow::{Context, Result};
use serde_json::Value;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask a free-form question. An empty answer (or end of input) yields
    /// `default`, or an empty string without one.
    pub fn ask(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let written = match default {
            Some(d) => write!(self.output, "? {message} ({d}) "),
            None => write!(self.output, "? {message} "),
        };
        written.context("Failed to write prompt")?;
        self.output.flush().ok();

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read answer")?;

        let answer = line.trim();
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer.to_string())
    }

    /// Ask a yes/no question
    pub fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        let answer = self.ask(&format!("{message} {hint}"), None)?;
        Ok(match answer.to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }

    pub fn ask_path(&mut self, default: &str) -> Result<String> {
        self.ask("Where are your CloudTrail logs located?", Some(default))
    }

    /// Collect `key = value` filters until the operator declines or leaves
    /// the key or value blank. Values are kept as strings.
    pub fn collect_criteria(&mut self) -> Result<CriteriaSet> {
        let mut criteria = CriteriaSet::new();

        while self.confirm("Do you want to add a new filter?", false)? {
            let key = self.ask("Which key are you filtering?", None)?;
            if key.is_empty() {
                break;
            }
            let value = self.ask("What value are you expecting?", None)?;
            if value.is_empty() {
                break;
            }
            criteria.insert(key, Value::String(value));
        }

        Ok(criteria)
    }

    pub fn ask_event_id(&mut self) -> Result<Option<String>> {
        let id = self.ask("On which event do you want more details?", None)?;
        Ok(Some(id).filter(|id| !id.is_empty()))
    }
}
