//! Error types surfaced by the matrix algebra and the scheme.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// The two failure kinds of the core.
///
/// Cryptographic incorrectness (a wrong decryption caused by accumulated
/// noise) is not an error; it is a probabilistic event bounded by the chosen
/// parameters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A dimensional precondition of a matrix operation was violated.
    #[error("malformed matrix in {op}: shapes {lhs:?} vs {rhs:?}")]
    MalformedMatrix {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Scheme parameters failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl Error {
    pub(crate) fn shape(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Error::MalformedMatrix { op, lhs, rhs }
    }
}
