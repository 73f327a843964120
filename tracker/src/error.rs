//! Error types for the grade tracker

use thiserror::Error;

/// Rejection raised by a student record when a grade would break its invariant.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    #[error("Warning: Grade cannot be negative. Not added.")]
    Negative(f64),
}

/// Malformed or out-of-range interactive answers.
///
/// The display text is the message shown to the user before the prompt is
/// repeated, so none of these ever leave the session loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    CountNotANumber(String),

    #[error("Number of grades cannot be negative. Please try again.")]
    NegativeCount(i64),

    #[error("Invalid input. Please enter a number for the grade.")]
    GradeNotANumber(String),

    #[error("Grade cannot be negative. Please enter a valid grade.")]
    NegativeGrade(f64),

    #[error("Invalid input. Please enter a number corresponding to the menu option.")]
    ChoiceNotANumber(String),

    #[error("Invalid choice. Please try again.")]
    UnknownChoice(i64),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("input closed before the session ended")]
    EndOfInput,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
