//! `InterpolatedDiscountCurve` — log-linear interpolation over discount
//! factors.
//!
//! The canonical representation for externally bootstrapped curves: a set of
//! `(time, discount-factor)` nodes interpolated log-linearly, which makes
//! forward rates piecewise constant between nodes. Survival-probability
//! nodes from a credit bootstrap fit the same mold.
//!
//! Bootstrapping itself (from deposits, swaps, CDS quotes) happens upstream;
//! this type only represents the result.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::YieldTermStructure;
use cdso_core::{ensure, DiscountFactor, Result, Time};

/// A log-linearly interpolated discount (or survival-probability) curve.
///
/// Past the last node the curve extrapolates at the last segment's flat
/// forward rate.
#[derive(Debug, Clone)]
pub struct InterpolatedDiscountCurve {
    times: Vec<Time>,
    log_dfs: Vec<f64>,
}

impl InterpolatedDiscountCurve {
    /// Build a curve from strictly increasing positive node times and the
    /// matching discount factors.
    ///
    /// The curve is implicitly anchored at `(0, 1)`; passing that node
    /// explicitly is not required. Discount factors must be in `(0, 1]` and
    /// non-increasing.
    pub fn new(times: &[Time], discount_factors: &[DiscountFactor]) -> Result<Self> {
        ensure!(
            times.len() == discount_factors.len(),
            "node count mismatch: {} times vs {} discount factors",
            times.len(),
            discount_factors.len()
        );
        ensure!(times.len() >= 2, "at least two curve nodes required");

        let mut full_times = Vec::with_capacity(times.len() + 1);
        let mut log_dfs = Vec::with_capacity(times.len() + 1);
        full_times.push(0.0);
        log_dfs.push(0.0);

        let mut prev_t = 0.0;
        let mut prev_df = 1.0;
        for (&t, &df) in times.iter().zip(discount_factors) {
            ensure!(t > prev_t, "node times must be strictly increasing at t = {t}");
            ensure!(
                df > 0.0 && df <= prev_df,
                "discount factors must be positive and non-increasing at t = {t}"
            );
            full_times.push(t);
            log_dfs.push(df.ln());
            prev_t = t;
            prev_df = df;
        }

        Ok(Self {
            times: full_times,
            log_dfs,
        })
    }

    /// The node times, including the implicit anchor at 0.
    pub fn times(&self) -> &[Time] {
        &self.times
    }
}

impl TermStructure for InterpolatedDiscountCurve {
    fn reference_time(&self) -> Time {
        0.0
    }

    fn max_time(&self) -> Time {
        *self.times.last().unwrap_or(&0.0)
    }
}

impl YieldTermStructure for InterpolatedDiscountCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t <= 0.0 {
            return 1.0;
        }
        let n = self.times.len();
        if t >= self.times[n - 1] {
            // Flat-forward extrapolation from the last segment.
            let fwd = (self.log_dfs[n - 2] - self.log_dfs[n - 1])
                / (self.times[n - 1] - self.times[n - 2]);
            return (self.log_dfs[n - 1] - fwd * (t - self.times[n - 1])).exp();
        }
        let i = self.times.partition_point(|&node| node < t);
        let (t0, t1) = (self.times[i - 1], self.times[i]);
        let w = (t - t0) / (t1 - t0);
        ((1.0 - w) * self.log_dfs[i - 1] + w * self.log_dfs[i]).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cdso_core::Error;

    fn sample() -> InterpolatedDiscountCurve {
        let times: [f64; 3] = [1.0, 2.0, 5.0];
        let dfs: Vec<f64> = [0.03, 0.035, 0.04]
            .iter()
            .zip(&times)
            .map(|(z, t): (&f64, &f64)| (-z * *t).exp())
            .collect();
        InterpolatedDiscountCurve::new(&times, &dfs).unwrap()
    }

    #[test]
    fn reprices_nodes_exactly() {
        let c = sample();
        assert_relative_eq!(c.discount(1.0), (-0.03_f64).exp(), max_relative = 1e-14);
        assert_relative_eq!(c.discount(5.0), (-0.2_f64).exp(), max_relative = 1e-14);
        assert_eq!(c.discount(0.0), 1.0);
    }

    #[test]
    fn interpolates_log_linearly() {
        let c = sample();
        let expected = (0.5 * c.discount(1.0).ln() + 0.5 * c.discount(2.0).ln()).exp();
        assert_relative_eq!(c.discount(1.5), expected, max_relative = 1e-14);
    }

    #[test]
    fn extrapolates_flat_forward() {
        let c = sample();
        // Forward over the last segment: (ln P(2) - ln P(5)) / 3.
        let fwd = (c.discount(2.0).ln() - c.discount(5.0).ln()) / 3.0;
        let expected = c.discount(5.0) * (-fwd * 2.0_f64).exp();
        assert_relative_eq!(c.discount(7.0), expected, max_relative = 1e-14);
    }

    #[test]
    fn forwards_piecewise_constant_between_nodes() {
        let c = sample();
        assert_relative_eq!(
            c.instantaneous_forward(1.3),
            c.instantaneous_forward(1.7),
            max_relative = 1e-9
        );
    }

    #[test]
    fn rejects_bad_nodes() {
        assert!(matches!(
            InterpolatedDiscountCurve::new(&[1.0, 1.0], &[0.9, 0.8]),
            Err(Error::Precondition(_))
        ));
        assert!(InterpolatedDiscountCurve::new(&[1.0, 2.0], &[0.9, 0.95]).is_err());
        assert!(InterpolatedDiscountCurve::new(&[1.0], &[0.9]).is_err());
        assert!(InterpolatedDiscountCurve::new(&[1.0, 2.0], &[0.9]).is_err());
    }
}
