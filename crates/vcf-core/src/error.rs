//! Error types for vCard parsing.

use thiserror::Error;

/// Errors that can occur while parsing vCard text.
///
/// Parse errors are localized to the offending block or line: the parser
/// collects them alongside the well-formed contacts instead of aborting,
/// so a single damaged block never loses the rest of the file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VcfError {
    /// A structural or property error at a specific input line.
    /// Includes the 1-based line number where the error was detected.
    #[error("vCard parse error at line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl VcfError {
    /// Shorthand for constructing a [`VcfError::Parse`].
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        VcfError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout vcf-core.
pub type Result<T> = std::result::Result<T, VcfError>;
