//! Cox–Ingersoll–Ross (CIR) square-root diffusion.
//!
//! ```text
//! dy = a(b − y) dt + σ √y dW
//! ```
//!
//! Discount bond: `P(t,T) = A(t,T) exp(−B(t,T) y(t))`
//! where `γ = √(a² + 2σ²)`.
//!
//! Used here as the driving process of a default intensity rather than a
//! short rate; the curve-fitting shift lives in
//! [`ExtendedCoxIngersollRoss`](crate::ExtendedCoxIngersollRoss).

use cdso_core::{Real, Time};
use cdso_math::comparison::close;

const ZERO_TENOR: Real = 1e-14;

/// The raw Cox–Ingersoll–Ross process and its affine bond coefficients.
#[derive(Debug, Clone, Copy)]
pub struct CoxIngersollRoss {
    /// Mean-reversion speed.
    pub a: Real,
    /// Long-run mean.
    pub b: Real,
    /// Volatility.
    pub sigma: Real,
    /// Initial state.
    pub y0: Real,
}

impl CoxIngersollRoss {
    /// Create a new CIR process.
    ///
    /// Feller condition requires `2ab > σ²` for the state to stay positive.
    pub fn new(a: Real, b: Real, sigma: Real, y0: Real) -> Self {
        Self { a, b, sigma, y0 }
    }

    /// `γ = √(a² + 2σ²)`
    pub fn gamma(&self) -> Real {
        (self.a * self.a + 2.0 * self.sigma * self.sigma).sqrt()
    }

    /// `B(t,T)` affine coefficient.
    pub fn b_function(&self, t: Time, big_t: Time) -> Real {
        let tau = big_t - t;
        let g = self.gamma();
        let e = (g * tau).exp() - 1.0;
        2.0 * e / ((g + self.a) * e + 2.0 * g)
    }

    /// `ln A(t,T)` affine coefficient.
    fn log_a(&self, t: Time, big_t: Time) -> Real {
        let tau = big_t - t;
        if close(tau, 0.0, ZERO_TENOR) {
            return 0.0;
        }
        let g = self.gamma();
        let exponent = 2.0 * self.a * self.b / (self.sigma * self.sigma);
        let numerator = 2.0 * g * (0.5 * (g + self.a) * tau).exp();
        let denominator = (g + self.a) * ((g * tau).exp() - 1.0) + 2.0 * g;
        exponent * (numerator / denominator).ln()
    }

    /// `A(t,T)` affine coefficient.
    pub fn a_function(&self, t: Time, big_t: Time) -> Real {
        self.log_a(t, big_t).exp()
    }

    /// Bond price `A(t,T) exp(−B(t,T) y)` for state `y` at `t`.
    pub fn discount_bond(&self, t: Time, big_t: Time, y: Real) -> Real {
        if close(big_t, t, ZERO_TENOR) {
            return 1.0;
        }
        (self.log_a(t, big_t) - self.b_function(t, big_t) * y).exp()
    }

    /// Check the Feller condition: `2ab > σ²`.
    pub fn feller_satisfied(&self) -> bool {
        2.0 * self.a * self.b > self.sigma * self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn discount_bond_at_zero_tenor() {
        let m = CoxIngersollRoss::new(0.3, 0.05, 0.1, 0.05);
        assert_relative_eq!(m.discount_bond(1.0, 1.0, 0.05), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn discount_bond_in_unit_interval() {
        let m = CoxIngersollRoss::new(0.3, 0.05, 0.1, 0.05);
        let p = m.discount_bond(0.0, 5.0, 0.05);
        assert!(p > 0.0 && p < 1.0, "got {p}");
    }

    #[test]
    fn discount_bond_decreasing_in_state() {
        let m = CoxIngersollRoss::new(0.2, 0.04, 0.08, 0.03);
        assert!(m.discount_bond(0.0, 2.0, 0.02) > m.discount_bond(0.0, 2.0, 0.05));
    }

    #[test]
    fn feller_condition() {
        // 2ab = 0.03 > σ² = 0.01
        assert!(CoxIngersollRoss::new(0.3, 0.05, 0.1, 0.05).feller_satisfied());
        // σ² = 0.25 > 2ab = 0.03
        assert!(!CoxIngersollRoss::new(0.3, 0.05, 0.5, 0.05).feller_satisfied());
    }

    #[test]
    fn b_function_positive_and_increasing_in_tenor() {
        let m = CoxIngersollRoss::new(0.1, 0.2, 0.1, 0.2);
        let b1 = m.b_function(0.0, 1.0);
        let b5 = m.b_function(0.0, 5.0);
        assert!(b1 > 0.0);
        assert!(b5 > b1);
    }
}
