//! # cdso-core
//!
//! Core types, aliases, and error definitions shared across the CDS option
//! pricing workspace — the primitive vocabulary (`Real`, `Time`, `Rate`, …),
//! the error hierarchy, and the small enums every other crate needs.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Compounding conventions.
pub mod compounding;

/// Error types and the `ensure!` / `fail!` convenience macros.
pub mod errors;

/// Option type (call/put) enum.
pub mod option_type;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for general-purpose counting.
pub type Integer = i32;

/// Non-negative integer type.
pub type Natural = u32;

/// Alias used for array sizes / indices and iteration counts.
pub type Size = usize;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate (CDS premium spreads in particular).
pub type Spread = Real;

/// A discount factor in (0, 1].
pub type DiscountFactor = Real;

/// A time measurement in years on the curves' continuous time axis.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use compounding::Compounding;
pub use errors::{Error, Result};
pub use option_type::OptionType;
