use thiserror::Error;

/// Errors raised while building an [`OrderedTree`][crate::OrderedTree].
///
/// A missing value on `remove` is not an error; it is reported through the
/// `bool` (or `Option`) return value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A required argument was absent or unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Result alias for fallible tree construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;
