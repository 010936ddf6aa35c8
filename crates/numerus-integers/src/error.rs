//! Error types for parsing, arithmetic, and stream input.

use thiserror::Error;

/// Errors produced when parsing a decimal numeric string.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The string had no digits: empty input or a lone sign.
    #[error("numeric string has no digits")]
    Empty,

    /// A character outside `0-9` after the optional leading `-`.
    #[error("invalid character {0:?} in numeric string")]
    InvalidDigit(char),

    /// A fraction literal with a zero denominator.
    #[error("fraction literal has a zero denominator")]
    ZeroDenominator,
}

/// Errors produced by arithmetic on invalid operands.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

/// Errors produced when reading a value off an input stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The stream ended before any token was found.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The token was not a valid numeric string.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The underlying reader failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
