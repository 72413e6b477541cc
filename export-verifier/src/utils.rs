//! Utilities for locating, reading, and writing verifier artifacts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{
        OUTPUT_VERIFIER_DIR, SOURCE_VERIFIER_DIR, TEMPLATE_DIR, TEMPLATE_FILE_SUFFIX,
        VERIFIER_FILE_SUFFIX,
    },
    errors::ScriptError,
};

/// The files involved in exporting the verifier for a single target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// The verifier generated by the circuit toolchain
    pub source: PathBuf,
    /// The hand-written verifier template
    pub template: PathBuf,
    /// The exported verifier
    pub output: PathBuf,
}

impl ArtifactPaths {
    /// Lay out the artifact paths for `target` under the project `root`
    pub fn new(root: &Path, target: &str) -> Self {
        let verifier_file = format!("{target}{VERIFIER_FILE_SUFFIX}");
        let template_file = format!("{target}{TEMPLATE_FILE_SUFFIX}");

        Self {
            source: root.join(SOURCE_VERIFIER_DIR).join(&verifier_file),
            template: root.join(TEMPLATE_DIR).join(template_file),
            output: root.join(OUTPUT_VERIFIER_DIR).join(verifier_file),
        }
    }
}

/// Read a file to a string
pub fn read_file(path: &Path) -> Result<String, ScriptError> {
    fs::read_to_string(path)
        .map_err(|e| ScriptError::ReadFile(format!("{}: {}", path.display(), e)))
}

/// Write `contents` to a file, creating it or truncating an existing one.
///
/// Parent directories are not created.
pub fn write_file(path: &Path, contents: &str) -> Result<(), ScriptError> {
    fs::write(path, contents)
        .map_err(|e| ScriptError::WriteFile(format!("{}: {}", path.display(), e)))
}
