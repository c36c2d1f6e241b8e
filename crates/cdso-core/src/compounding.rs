//! Compounding conventions.

/// How interest is compounded when a rate is quoted over a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compounding {
    /// Simple interest: `1 + r·t`
    Simple,
    /// Annually compounded interest: `(1 + r)^t`
    Compounded,
    /// Continuously compounded: `e^(r·t)`
    Continuous,
}
