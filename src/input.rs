//! Parsing of interactive answers.
//!
//! Prompts read one line each. An empty answer accepts the default offered for that prompt;
//! numeric answers must be positive.

use std::io::{BufRead, Write};

use crate::foundation::error::{CardError, CardResult};

/// Parse a positive integer size such as a canvas width.
pub fn parse_positive_u32(field: &str, text: &str) -> CardResult<u32> {
    let t = text.trim();
    let v: i64 = t.parse().map_err(|_| {
        CardError::invalid_parameter(format!("{field} must be a whole number (got '{t}')"))
    })?;
    if v <= 0 {
        return Err(CardError::invalid_parameter(format!(
            "{field} must be > 0 (got {v})"
        )));
    }
    u32::try_from(v)
        .map_err(|_| CardError::invalid_parameter(format!("{field} is too large (got {v})")))
}

/// Parse a positive font size. Fractional sizes are accepted.
pub fn parse_font_size(field: &str, text: &str) -> CardResult<f32> {
    let t = text.trim();
    let v: f32 = t.parse().map_err(|_| {
        CardError::invalid_parameter(format!("{field} must be a number (got '{t}')"))
    })?;
    if !v.is_finite() || v <= 0.0 {
        return Err(CardError::invalid_parameter(format!(
            "{field} must be finite and > 0 (got {t})"
        )));
    }
    Ok(v)
}

/// Line-oriented prompter over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `message`, show the default (if any) and read one line.
    ///
    /// Returns the default when the answer is empty. End of input without an answer or a
    /// default is an error.
    pub fn ask(&mut self, message: &str, default: Option<&str>) -> anyhow::Result<String> {
        writeln!(self.output, "{message}")?;
        match default {
            Some(d) => write!(self.output, "[{d}] >> ")?,
            None => write!(self.output, ">> ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        let n = self.input.read_line(&mut line)?;
        let answer = line.trim_end_matches(['\n', '\r']);
        if !answer.is_empty() {
            return Ok(answer.to_string());
        }
        match default {
            Some(d) => Ok(d.to_string()),
            None if n == 0 => anyhow::bail!("input closed before '{message}' was answered"),
            None => Ok(String::new()),
        }
    }

    pub fn say(&mut self, message: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/input.rs"]
mod tests;
