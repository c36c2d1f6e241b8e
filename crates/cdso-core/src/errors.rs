//! Error types for the CDS option pricing workspace.
//!
//! A single `thiserror`-derived enum covers both the generic
//! precondition/runtime failures and the two domain failures the pricing
//! kernel can surface: an unbracketable y* root and an inverted instrument
//! window. Quadrature non-convergence is deliberately *not* an error — the
//! integrators return their best estimate together with a convergence report
//! instead (see `cdso-math::integrals`).

use crate::Time;
use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// No sign change of the y* target function could be found within the
    /// bracketing search. Indicates inconsistent market/model inputs (for
    /// instance negative implied forward rates), not solver weakness.
    #[error("root not bracketed: {0}")]
    RootNotBracketed(String),

    /// The CDS accrual window is empty or inverted.
    #[error("invalid instrument window: cds_start ({start}) >= cds_end ({end})")]
    InvalidInstrumentWindow {
        /// CDS start time (option expiry).
        start: Time,
        /// CDS end time (protection maturity).
        end: Time,
    },

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// General runtime error.
    #[error("{0}")]
    Runtime(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cdso_core::ensure;
/// fn positive(x: f64) -> cdso_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cdso_core::fail;
/// fn always_err() -> cdso_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_error_displays_both_times() {
        let e = Error::InvalidInstrumentWindow {
            start: 2.0,
            end: 1.0,
        };
        let msg = e.to_string();
        assert!(msg.contains('2') && msg.contains('1'), "got {msg}");
    }

    #[test]
    fn ensure_macro_rejects() {
        fn check(x: f64) -> Result<f64> {
            ensure!(x >= 0.0, "x must be non-negative, got {x}");
            Ok(x)
        }
        assert!(check(1.0).is_ok());
        assert!(matches!(check(-1.0), Err(Error::Precondition(_))));
    }
}
