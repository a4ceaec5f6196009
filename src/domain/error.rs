use std::io;

use thiserror::Error;

/// Failures produced while turning raw arguments into a configuration.
#[derive(Debug, Error)]
pub enum ParseError {
    /// More positional tokens than the active strategy accepts.
    #[error("{}", positional_message(*allowed))]
    TooManyPositionalArguments { allowed: usize },

    /// The repeat count token is not an integer.
    #[error("invalid value \"{token}\" for the repeat count: expected an integer")]
    InvalidNumberFormat { token: String },

    /// Unknown flag, missing flag value, or another flag-level mistake.
    #[error("{message}")]
    InvalidFlag { message: String },

    /// The manual strategy takes exactly one argument.
    #[error("Invalid number of arguments")]
    WrongArgumentCount { found: usize },
}

fn positional_message(allowed: usize) -> &'static str {
    if allowed == 0 {
        "Positional arguments specified"
    } else {
        "More than one positional argument specified"
    }
}

/// Failures of a syntactically valid configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Must specify a number greater than 0")]
    NonPositiveRepeatCount,
}

/// Failures while reading the name from the input stream.
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The line read was empty or only whitespace.
    #[error("You didn't enter your name")]
    EmptyName,

    /// The input stream itself failed.
    #[error(transparent)]
    ReadFailure(#[from] io::Error),
}

/// Every way a single greeter run can fail.
#[derive(Debug, Error)]
pub enum GreeterError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl GreeterError {
    /// Provide an `io::ErrorKind`-like view for callers that only need a coarse category.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            GreeterError::Parse(_) | GreeterError::Validation(_) => io::ErrorKind::InvalidInput,
            GreeterError::Acquisition(AcquisitionError::EmptyName) => io::ErrorKind::InvalidData,
            GreeterError::Acquisition(AcquisitionError::ReadFailure(err))
            | GreeterError::Output(err) => err.kind(),
        }
    }
}
