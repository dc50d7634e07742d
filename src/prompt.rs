use std::io::BufRead;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid numeric input {input:?}")]
    InvalidInput { input: String },
}

/// Reads one line and parses it as a number. The caller prints the prompt
/// text; taking any `BufRead` keeps the pipeline runnable without a
/// terminal.
pub fn read_number(mut reader: impl BufRead) -> Result<f64, PromptError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let raw = line.trim();
    raw.parse::<f64>().map_err(|_| PromptError::InvalidInput {
        input: raw.to_string(),
    })
}
