//! Semi-analytic CDS option engine under a CIR++ default intensity.
//!
//! The option on a CDS running over `[t, T]` is decomposed, by
//! integration by parts of the default leg, into a strip of European
//! options on survival bonds. The critical intensity `y*` at which the
//! underlying swap is at the money solves
//!
//! ```text
//! ∫ₜᵀ hu'(u) P(t,u | y*) du  =  (1 − R) (1 − D(T)/D(t) P(t,T | y*))
//! ```
//!
//! where `hu'` collects the protection, accrued-premium and premium
//! flows and `P(t,u | y)` is the model survival bond in state `y`. The
//! price is then a quadrature of `hu'(u)` times bond options struck at
//! `P(t,u | y*)`, plus a closed-form term for the protection payment at
//! maturity.

use cdso_core::{ensure, Compounding, Real, Result, Time};
use cdso_instruments::CdsOptionParams;
use cdso_math::{brent_from_guess, QuadratureReport, TrapezoidIntegral};
use cdso_models::IntensityModel;
use cdso_termstructures::YieldTermStructure;
use std::sync::Arc;

const TOLERANCE: Real = 1.0e-6;
const MAX_REFINEMENTS: usize = 100;
const Y_STAR_STEP: Real = 0.1;

/// Market inputs for CDS option pricing: a risk-free discount curve, a
/// survival-probability (hazard) curve, and the recovery rate.
#[derive(Debug, Clone)]
pub struct CdsOptionMarket {
    /// Risk-free discount curve `D`.
    pub discount_curve: Arc<dyn YieldTermStructure>,
    /// Survival curve the intensity model is fitted to.
    pub hazard_curve: Arc<dyn YieldTermStructure>,
    /// Recovery rate `R` of the reference entity.
    pub recovery_rate: Real,
}

impl CdsOptionMarket {
    /// Bundle market inputs, checking `0 <= R <= 1`.
    pub fn new(
        discount_curve: Arc<dyn YieldTermStructure>,
        hazard_curve: Arc<dyn YieldTermStructure>,
        recovery_rate: Real,
    ) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&recovery_rate),
            "recovery rate must be in [0, 1], got {recovery_rate}"
        );
        Ok(Self {
            discount_curve,
            hazard_curve,
            recovery_rate,
        })
    }
}

/// Pricing result with solver and quadrature diagnostics.
#[derive(Debug, Clone)]
pub struct CdsOptionPricing {
    /// Option price in currency units.
    pub price: Real,
    /// Critical intensity at which the underlying swap is at the money.
    pub y_star: Real,
    /// Convergence of the y* target quadrature, evaluated at the root.
    pub y_star_report: QuadratureReport,
    /// Convergence of the option-strip quadrature.
    pub option_report: QuadratureReport,
}

/// Forward-maturity derivative of the exercise value.
///
/// `hu'(u) = (1 − R) q(u) − K (u − β(u)) q(u) + K D(u)/D(t)` with
/// `q(u) = f(u) D(u)/D(t)`, the forward default density under the
/// assumption that default intensity follows the discount forwards.
fn hu_prime(u: Time, params: &CdsOptionParams, market: &CdsOptionMarket) -> Real {
    let t_beta = params.beta(u);
    let disc = market.discount_curve.discount(u) / market.discount_curve.discount(params.cds_start);
    let density = market
        .discount_curve
        .forward_rate(u, u, Compounding::Continuous)
        * disc;
    (1.0 - market.recovery_rate) * density
        - params.strike * (u - t_beta) * density
        + params.strike * disc
}

/// Semi-analytic pricer for a single CDS option.
#[derive(Debug, Clone)]
pub struct CdsOptionPricer {
    params: CdsOptionParams,
    market: CdsOptionMarket,
    model: Arc<dyn IntensityModel>,
}

impl CdsOptionPricer {
    /// Assemble a pricer from contract terms, market data, and a fitted
    /// intensity model.
    pub fn new(
        params: CdsOptionParams,
        market: CdsOptionMarket,
        model: Arc<dyn IntensityModel>,
    ) -> Self {
        Self {
            params,
            market,
            model,
        }
    }

    /// Residual of the y* equation for a candidate intensity `y`.
    fn y_star_target(&self, y: Real) -> Real {
        self.y_star_target_with_report(y).0
    }

    fn y_star_target_with_report(&self, y: Real) -> (Real, QuadratureReport) {
        let t = self.params.cds_start;
        let big_t = self.params.cds_end;
        let integral = TrapezoidIntegral::new(TOLERANCE, MAX_REFINEMENTS);
        let (lhs, report) = integral.integrate_with_report(
            |u| hu_prime(u, &self.params, &self.market) * self.model.discount_bond_yt(t, u, y),
            t,
            big_t,
        );
        let rhs = (1.0 - self.market.recovery_rate)
            * (1.0
                - self.market.discount_curve.discount(big_t)
                    / self.market.discount_curve.discount(t)
                    * self.model.discount_bond_yt(t, big_t, y));
        (lhs - rhs, report)
    }

    /// Solve for the critical intensity, starting from the forward hazard
    /// rate over the underlying swap's life.
    pub fn find_y_star(&self) -> Result<Real> {
        let guess = self.market.hazard_curve.forward_rate(
            self.params.cds_start,
            self.params.cds_end,
            Compounding::Continuous,
        );
        brent_from_guess(|y| self.y_star_target(y), guess, Y_STAR_STEP, TOLERANCE)
    }

    fn option_integral(&self, y_star: Real) -> (Real, QuadratureReport) {
        let t = self.params.cds_start;
        let big_t = self.params.cds_end;
        let option_type = self.params.calc_option_type();
        let integral = TrapezoidIntegral::new(TOLERANCE, MAX_REFINEMENTS);
        integral.integrate_with_report(
            |u| {
                // The bond option degenerates at zero tenor; the integrand
                // vanishes there.
                if u == t {
                    return 0.0;
                }
                let strike = self.model.discount_bond_yt(t, u, y_star);
                hu_prime(u, &self.params, &self.market)
                    * self.model.discount_bond_option(option_type, strike, t, u)
            },
            t,
            big_t,
        )
    }

    /// Price the option.
    pub fn price(&self) -> Result<Real> {
        Ok(self.price_with_report()?.price)
    }

    /// Price the option, returning y* and quadrature diagnostics alongside.
    pub fn price_with_report(&self) -> Result<CdsOptionPricing> {
        let y_star = self.find_y_star()?;
        let (_, y_star_report) = self.y_star_target_with_report(y_star);

        let t = self.params.cds_start;
        let big_t = self.params.cds_end;
        let (integral, option_report) = self.option_integral(y_star);

        let tail = (1.0 - self.market.recovery_rate)
            * self.market.discount_curve.discount(big_t)
            / self.market.discount_curve.discount(t)
            * self.model.discount_bond_option(
                self.params.calc_option_type(),
                self.model.discount_bond_yt(t, big_t, y_star),
                t,
                big_t,
            );

        let price =
            self.params.notional * self.market.discount_curve.discount(t) * (integral + tail);

        Ok(CdsOptionPricing {
            price,
            y_star,
            y_star_report,
            option_report,
        })
    }
}
