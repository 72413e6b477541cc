//! Definitions of errors that can occur while exporting a verifier contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur while exporting a verifier contract
#[derive(Debug)]
pub enum ScriptError {
    /// Error reading the generated verifier or the template
    ReadFile(String),
    /// Error writing the output verifier
    WriteFile(String),
    /// The `verifyingKey` declaration was not found in the generated verifier
    BeginAnchorNotFound,
    /// The final `IC` point for the given number of public inputs
    /// was not found in the generated verifier
    EndAnchorNotFound(usize),
    /// The anchors were found, but they delimit an empty or reversed range
    InvalidExtractionWindow(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ReadFile(s) => write!(f, "error reading file: {}", s),
            ScriptError::WriteFile(s) => write!(f, "error writing file: {}", s),
            ScriptError::BeginAnchorNotFound => {
                write!(f, "verifying key declaration not found in source verifier")
            }
            ScriptError::EndAnchorNotFound(n) => {
                write!(f, "no initialization of `vk.IC[{}]` in source verifier", n)
            }
            ScriptError::InvalidExtractionWindow(s) => {
                write!(f, "invalid verifying key extraction window: {}", s)
            }
        }
    }
}

impl Error for ScriptError {}
