//! `YieldTermStructure` — discount / zero / forward rate term structures.
//!
//! This module defines the `YieldTermStructure` trait together with the
//! three fundamental quantities any curve must provide:
//!
//! * **discount factor** — `P(0,t)` (a survival probability, for hazard
//!   curves)
//! * **zero rate** — the continuously-compounded zero rate for maturity *t*
//! * **forward rate** — the instantaneous or period forward rate between two
//!   times

use crate::term_structure::TermStructure;
use cdso_core::{Compounding, DiscountFactor, Rate, Time};

/// A yield (interest-rate or hazard-rate) term structure.
///
/// Implementors must provide **exactly one** of the three low-level methods:
///
/// * [`discount_impl`](YieldTermStructure::discount_impl)
/// * [`zero_rate_impl`](YieldTermStructure::zero_rate_impl)
/// * [`forward_rate_impl`](YieldTermStructure::forward_rate_impl)
///
/// Default implementations of the other two are provided via the
/// mathematical relationships that connect them.
pub trait YieldTermStructure: TermStructure {
    // ── Low-level impl hooks (override exactly one) ──────────────────────

    /// Return the discount factor for a given time `t`.
    ///
    /// Default: computed from `zero_rate_impl`.
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t == 0.0 {
            return 1.0;
        }
        let r = self.zero_rate_impl(t);
        (-r * t).exp()
    }

    /// Return the continuously-compounded zero rate for time `t`.
    ///
    /// Default: computed from `discount_impl`.
    fn zero_rate_impl(&self, t: Time) -> Rate {
        if t == 0.0 {
            return self.forward_rate_impl(0.0);
        }
        let df = self.discount_impl(t);
        -df.ln() / t
    }

    /// Return the instantaneous forward rate at time `t`.
    ///
    /// Default: central difference approximation of `−∂ ln P / ∂t`.
    fn forward_rate_impl(&self, t: Time) -> Rate {
        let dt = 1.0e-4_f64;
        let t1 = (t - dt / 2.0).max(0.0);
        let t2 = t + dt / 2.0;
        let df1 = self.discount_impl(t1);
        let df2 = self.discount_impl(t2);
        (df1.ln() - df2.ln()) / (t2 - t1)
    }

    // ── Public interface ─────────────────────────────────────────────────

    /// Discount factor (or survival probability) for a time.
    fn discount(&self, t: Time) -> DiscountFactor {
        self.discount_impl(t)
    }

    /// Continuously-compounded zero rate for time `t`.
    fn zero_rate(&self, t: Time) -> Rate {
        self.zero_rate_impl(t)
    }

    /// Instantaneous forward rate at time `t`.
    fn instantaneous_forward(&self, t: Time) -> Rate {
        self.forward_rate_impl(t)
    }

    /// Forward rate between `t1` and `t2` under the given compounding.
    ///
    /// For `t1 == t2` this degenerates to the instantaneous forward rate,
    /// matching the `forwardRate(u, u, Continuous)` idiom the pricing
    /// kernel relies on.
    fn forward_rate(&self, t1: Time, t2: Time, compounding: Compounding) -> Rate {
        if t1 == t2 {
            return self.forward_rate_impl(t1);
        }
        let (t1, t2) = if t1 < t2 { (t1, t2) } else { (t2, t1) };
        let compound = self.discount_impl(t1) / self.discount_impl(t2);
        let dt = t2 - t1;
        match compounding {
            Compounding::Continuous => compound.ln() / dt,
            Compounding::Simple => (compound - 1.0) / dt,
            Compounding::Compounded => compound.powf(1.0 / dt) - 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // A curve defined only through its zero rate, to exercise the default
    // interconversions.
    #[derive(Debug)]
    struct ZeroOnly;

    impl TermStructure for ZeroOnly {
        fn reference_time(&self) -> Time {
            0.0
        }
        fn max_time(&self) -> Time {
            f64::INFINITY
        }
    }

    impl YieldTermStructure for ZeroOnly {
        fn zero_rate_impl(&self, t: Time) -> Rate {
            0.02 + 0.001 * t
        }
    }

    #[test]
    fn discount_from_zero_rate() {
        let c = ZeroOnly;
        let t = 3.0;
        let expected = (-(0.02 + 0.001 * t) * t as f64).exp();
        assert_relative_eq!(c.discount(t), expected, max_relative = 1e-12);
    }

    #[test]
    fn instantaneous_forward_from_discount() {
        // Zero curve r(t) = a + b t  ⇒  f(t) = a + 2 b t.
        let c = ZeroOnly;
        let t = 2.0;
        assert_relative_eq!(
            c.instantaneous_forward(t),
            0.02 + 0.002 * t,
            max_relative = 1e-6
        );
    }

    #[test]
    fn coincident_times_give_instantaneous_forward() {
        let c = ZeroOnly;
        let t = 1.5;
        assert_eq!(
            c.forward_rate(t, t, Compounding::Continuous),
            c.instantaneous_forward(t)
        );
    }

    #[test]
    fn continuous_forward_between_times() {
        let c = ZeroOnly;
        let (t1, t2) = (1.0, 4.0);
        let expected = (c.discount(t1) / c.discount(t2)).ln() / (t2 - t1);
        assert_relative_eq!(
            c.forward_rate(t1, t2, Compounding::Continuous),
            expected,
            max_relative = 1e-12
        );
        // Argument order must not matter.
        assert_eq!(
            c.forward_rate(t1, t2, Compounding::Continuous),
            c.forward_rate(t2, t1, Compounding::Continuous)
        );
    }
}
