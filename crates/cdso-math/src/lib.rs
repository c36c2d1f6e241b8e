//! # cdso-math
//!
//! Numerical building blocks for the pricing kernel: one-dimensional root
//! solvers, self-refining trapezoid quadrature with convergence reporting,
//! the non-central chi-square distribution (via statrs), and floating-point
//! comparison helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// Probability distributions.
pub mod distributions;

/// Numerical integration.
pub mod integrals;

/// 1D root-finding solvers.
pub mod solvers1d;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use distributions::NonCentralChiSquare;
pub use integrals::{QuadratureReport, TrapezoidIntegral};
pub use solvers1d::{brent, brent_from_guess};
