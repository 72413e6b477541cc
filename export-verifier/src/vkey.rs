//! Extraction of the verifying key block from a generated verifier contract
//!
//! The generated verifier declares its verifying key in a function of the form
//! ```solidity
//! function verifyingKey() internal pure returns (VerifyingKey memory vk) {
//!     vk.alfa1 = Pairing.G1Point(...);
//!     ...
//!     vk.IC[n] = Pairing.G1Point(
//!         ...,
//!         ...
//!     );
//! }
//! ```
//! The block we extract is the body of this function, up to and including the
//! statement initializing the last `IC` point. Locating it is a plain line scan
//! over two anchors rather than a parse of the contract, so the extracted slice
//! is exactly what the verifier templates expect.

use std::ops::Range;

use tracing::debug;

use crate::{
    constants::{IC_ANCHOR_PREFIX, IC_ANCHOR_SUFFIX, IC_STATEMENT_NUM_LINES, VKEY_FN_ANCHOR},
    errors::ScriptError,
};

/// A half-open range of lines `[start, stop)` in the generated verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionWindow {
    /// The index of the first line of the verifying key block
    pub start: usize,
    /// One past the index of the last line of the verifying key block.
    ///
    /// May point past the end of the document if the final `IC` statement
    /// is truncated.
    pub stop: usize,
}

impl ExtractionWindow {
    /// The window as a range over a document with `num_lines` lines
    pub fn clamped(&self, num_lines: usize) -> Range<usize> {
        self.start.min(num_lines)..self.stop.min(num_lines)
    }
}

/// The anchor identifying the initialization of the final `IC` point for a
/// circuit with `num_public_inputs` public inputs
pub fn ic_anchor(num_public_inputs: usize) -> String {
    format!("{IC_ANCHOR_PREFIX}{num_public_inputs}{IC_ANCHOR_SUFFIX}")
}

/// Scan the lines of a generated verifier for the verifying key block.
///
/// Every line is visited; when an anchor recurs, its last occurrence wins.
pub fn find_extraction_window<S: AsRef<str>>(
    lines: &[S],
    num_public_inputs: usize,
) -> Result<ExtractionWindow, ScriptError> {
    let end_anchor = ic_anchor(num_public_inputs);

    let mut start = None;
    let mut stop = None;
    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if line.contains(VKEY_FN_ANCHOR) {
            debug!(line = i, "found verifying key declaration");
            start = Some(i + 1);
        } else if line.contains(&end_anchor) {
            debug!(line = i, "found final IC point initialization");
            stop = Some(i + IC_STATEMENT_NUM_LINES);
        }
    }

    let start = start.ok_or(ScriptError::BeginAnchorNotFound)?;
    let stop = stop.ok_or(ScriptError::EndAnchorNotFound(num_public_inputs))?;

    // The final `IC` statement always follows the function declaration, so an
    // empty or reversed window means the source is not a verifier we know how
    // to read
    if start >= stop {
        return Err(ScriptError::InvalidExtractionWindow(format!(
            "block starts at line {} but ends at line {}",
            start + 1,
            stop
        )));
    }

    Ok(ExtractionWindow { start, stop })
}

/// Split text into lines, each keeping its terminator.
///
/// `\n`, `\r\n`, and a bare `\r` all end a line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[line_start..=i]);
                line_start = i + 1;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                lines.push(&text[line_start..=i]);
                line_start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if line_start < text.len() {
        lines.push(&text[line_start..]);
    }

    lines
}

/// Extract the verifying key block from the text of a generated verifier.
///
/// Lines are concatenated verbatim, line terminators included.
pub fn extract_verifying_key(
    source: &str,
    num_public_inputs: usize,
) -> Result<String, ScriptError> {
    let lines = split_lines(source);
    let window = find_extraction_window(&lines, num_public_inputs)?;

    let range = window.clamped(lines.len());
    if range.end < window.stop {
        debug!(
            expected = window.stop,
            available = lines.len(),
            "final IC statement runs past the end of the source"
        );
    }

    Ok(lines[range].concat())
}
