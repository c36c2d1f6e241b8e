//! `TermStructure` — base trait for all term structures.
//!
//! Every term structure carries its own reference instant — the point at
//! which discount = 1.0 and from which all times are measured. Keeping the
//! anchor on the curve itself (rather than in process-wide settings) keeps
//! pricing runs composable and parallel-safe.

use cdso_core::Time;

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The instant at which discount = 1.0 and from which time is measured,
    /// on the same continuous-year axis as every query time.
    fn reference_time(&self) -> Time;

    /// The latest time for which the curve can be queried without
    /// extrapolating.
    fn max_time(&self) -> Time;

    /// Check whether a time lies within the curve's native range.
    fn check_range(&self, t: Time) -> bool {
        t >= self.reference_time() && t <= self.max_time()
    }
}
