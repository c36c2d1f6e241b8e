//! `FlatForward` — a term structure with a constant forward rate.
//!
//! The simplest possible curve: one continuously-compounded rate for all
//! maturities. Used as a flat discount curve or, with a hazard rate, as a
//! flat survival curve.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use cdso_core::{Rate, Time};

/// A flat (constant) forward-rate term structure.
///
/// Discount factors are `P(t) = exp(−r · (t − reference))` where `r` is the
/// continuously-compounded rate.
#[derive(Debug, Clone)]
pub struct FlatForward {
    reference_time: Time,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve anchored at `reference_time` with the given
    /// continuously-compounded rate.
    pub fn new(reference_time: Time, rate: Rate) -> Self {
        Self {
            reference_time,
            rate,
        }
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
    fn reference_time(&self) -> Time {
        self.reference_time
    }

    fn max_time(&self) -> Time {
        f64::INFINITY
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> f64 {
        (-self.rate * (t - self.reference_time)).exp()
    }

    fn zero_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }

    fn forward_rate_impl(&self, _t: Time) -> Rate {
        self.rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cdso_core::Compounding;

    #[test]
    fn discount_is_exponential() {
        let c = FlatForward::new(0.0, 0.05);
        assert_relative_eq!(c.discount(2.0), (-0.1_f64).exp(), max_relative = 1e-15);
        assert_eq!(c.discount(0.0), 1.0);
    }

    #[test]
    fn forwards_are_flat() {
        let c = FlatForward::new(0.0, 0.05);
        assert_eq!(c.instantaneous_forward(3.7), 0.05);
        assert_relative_eq!(
            c.forward_rate(1.0, 2.0, Compounding::Continuous),
            0.05,
            max_relative = 1e-12
        );
    }

    #[test]
    fn non_zero_reference_shifts_the_axis() {
        let c = FlatForward::new(1.0, 0.05);
        assert_eq!(c.discount(1.0), 1.0);
        assert_relative_eq!(c.discount(3.0), (-0.1_f64).exp(), max_relative = 1e-15);
    }
}
