//! Errors that abort a compilation run.

use std::io;

use thiserror::Error;

use crate::class::Class;

/// Everything that can go wrong while compiling the tables.
///
/// None of these are recoverable: the same input always produces the same
/// failure, so the caller should fix the input rather than retry.
#[derive(Debug, Error)]
pub enum Error {
    /// A data line that does not follow `CODEPOINT(..CODEPOINT)?;VALUE`.
    #[error("line {line}: malformed entry: {reason}")]
    Malformed { line: usize, reason: String },

    /// A well formed line with a property value we do not know.
    #[error("line {line}: unknown property value `{value}`")]
    UnknownValue { line: usize, value: String },

    /// Two entries of the same data source claim the same codepoint.
    #[error("line {line}: codepoint U+{codepoint:04X} is already assigned")]
    Overlap { codepoint: u32, line: usize },

    /// The resolved ranges leave a codepoint unassigned or assign it twice.
    #[error("codepoint U+{codepoint:04X} is not covered exactly once")]
    Coverage { codepoint: u32 },

    /// A class listed more than once when building an alphabet.
    #[error("class {0} appears twice in the alphabet")]
    DuplicateClass(Class),

    /// The rule cascade transitions to a class the alphabet does not have.
    #[error("{left} x {right} transitions to {target}, which is not in the alphabet")]
    UndeclaredClass {
        left: Class,
        right: Class,
        target: Class,
    },

    /// A synthetic class reached the catch-all rule without being handled.
    #[error("{left} x {right} is not handled by any rule for {left}")]
    IncompleteRow { left: Class, right: Class },

    /// The alphabet has more entries than the `i8` encoding can index.
    #[error("alphabet of {0} classes does not fit the rule table encoding")]
    AlphabetTooLarge(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result type for compilation.
pub type Result<T> = std::result::Result<T, Error>;
