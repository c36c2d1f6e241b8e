//! Probability distributions.
//!
//! Built on the `statrs` special functions rather than hand-rolled
//! approximations.

pub mod non_central_chi_square;

pub use non_central_chi_square::NonCentralChiSquare;
