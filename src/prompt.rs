//! Interactive questions for the command line.
//!
//! All string-to-number conversion of user answers happens here, so the rest
//! of the crate only sees typed values.

use crate::error::{QualifierError, Result};
use regex::Regex;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::sync::OnceLock;

static AMOUNT_REGEX: OnceLock<Regex> = OnceLock::new();

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "? {} ", question)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(QualifierError::InvalidInput(format!(
                "no answer given to \"{}\"",
                question
            )));
        }
        Ok(answer.trim().to_string())
    }

    pub fn text(&mut self, question: &str) -> Result<String> {
        self.ask(question)
    }

    /// Yes/no question. An empty answer counts as yes; anything unrecognized
    /// asks again.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            let answer = self.ask(&format!("{} (Y/n)", question))?;
            match answer.to_lowercase().as_str() {
                "" | "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer yes or no.")?,
            }
        }
    }

    pub fn amount(&mut self, question: &str) -> Result<f64> {
        let answer = self.ask(question)?;
        parse_amount(&answer)
    }

    pub fn credit_score(&mut self, question: &str) -> Result<u32> {
        let answer = self.ask(question)?;
        parse_credit_score(&answer)
    }
}

/// Parse a currency amount such as `400000`, `$400,000` or `1_250.50`.
pub fn parse_amount(text: &str) -> Result<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '_') && !c.is_whitespace())
        .collect();

    let amount_regex =
        AMOUNT_REGEX.get_or_init(|| Regex::new(r"^(\d+(\.\d*)?|\.\d+)$").unwrap());
    if !amount_regex.is_match(&cleaned) {
        return Err(QualifierError::InvalidInput(format!(
            "\"{}\" is not an amount",
            text.trim()
        )));
    }

    cleaned
        .parse::<f64>()
        .map_err(|e| QualifierError::InvalidInput(format!("\"{}\": {}", text.trim(), e)))
}

pub fn parse_credit_score(text: &str) -> Result<u32> {
    text.trim().parse::<u32>().map_err(|_| {
        QualifierError::InvalidInput(format!(
            "\"{}\" is not a credit score (expected a whole number)",
            text.trim()
        ))
    })
}
