//! Error types for findates.
//!
//! Every fallible operation in the workspace reports one [`Error`]. Rule
//! registration problems surface as [`Error::Configuration`] and never at
//! query time; an unrecognised day-count or roll convention name surfaces as
//! [`Error::UnknownConvention`].

use thiserror::Error;

/// The top-level error type used throughout findates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A holiday rule or calendar definition could not be understood.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A convention name did not match any known alias.
    #[error("unknown convention '{0}'")]
    UnknownConvention(String),

    /// Invalid or unrepresentable date.
    #[error("date error: {0}")]
    Date(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A calendar definition file could not be read.
    #[error("i/o error: {0}")]
    Io(String),
}

/// Shorthand `Result` type used throughout findates.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> fd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert_eq!(
///     positive(-1),
///     Err(Error::Precondition("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            Error::Configuration("unknown month 'Smarch'".into()).to_string(),
            "configuration error: unknown month 'Smarch'"
        );
        assert_eq!(
            Error::UnknownConvention("ACT/999".into()).to_string(),
            "unknown convention 'ACT/999'"
        );
    }
}
