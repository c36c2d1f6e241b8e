//! Extended Cox–Ingersoll–Ross (CIR++) intensity model.
//!
//! The default intensity is `λ(t) = y(t) + φ(t)` where `y` follows a raw
//! CIR process and the deterministic shift `φ` is chosen so the model
//! reprices an observed initial curve exactly (Brigo–Mercurio). Survival
//! "bonds" and European options on them have closed forms; the option
//! price needs two non-central chi-square CDFs.

use crate::cox_ingersoll_ross::CoxIngersollRoss;
use crate::intensity_model::IntensityModel;
use cdso_math::{close, NonCentralChiSquare};
use cdso_core::{OptionType, Rate, Real, Time};
use cdso_termstructures::YieldTermStructure;
use std::sync::Arc;

/// CIR++ model: a raw CIR process plus the deterministic shift fitting an
/// initial term structure.
///
/// The fitted curve may be a hazard (survival) curve or a discount curve;
/// the model only sees its discount factors and instantaneous forwards.
#[derive(Debug, Clone)]
pub struct ExtendedCoxIngersollRoss {
    cir: CoxIngersollRoss,
    term_structure: Arc<dyn YieldTermStructure>,
}

impl ExtendedCoxIngersollRoss {
    /// Create a CIR++ model with mean-reversion speed `a`, long-run mean
    /// `b`, volatility `sigma`, and initial state `y0`, fitted to
    /// `term_structure`.
    pub fn new(
        a: Real,
        b: Real,
        sigma: Real,
        y0: Real,
        term_structure: Arc<dyn YieldTermStructure>,
    ) -> Self {
        Self {
            cir: CoxIngersollRoss::new(a, b, sigma, y0),
            term_structure,
        }
    }

    /// The underlying raw CIR process.
    pub fn cir(&self) -> &CoxIngersollRoss {
        &self.cir
    }

    /// The curve the model is fitted to.
    pub fn term_structure(&self) -> &Arc<dyn YieldTermStructure> {
        &self.term_structure
    }

    /// Fitted affine coefficient `Ā(t,s)` such that
    /// `P(t,s) = Ā(t,s) exp(−B(t,s) y(t))` reprices the initial curve at
    /// `t = 0`, `y = y0`.
    fn a_fitted(&self, t: Time, s: Time) -> Real {
        let cir = &self.cir;
        let pt = self.term_structure.discount(t);
        let ps = self.term_structure.discount(s);
        cir.a_function(t, s) * (ps * cir.a_function(0.0, t))
            / (pt * cir.a_function(0.0, s))
            * ((cir.b_function(0.0, s) - cir.b_function(0.0, t)) * cir.y0).exp()
    }
}

impl IntensityModel for ExtendedCoxIngersollRoss {
    fn discount_bond(&self, t1: Time, t2: Time, rate: Rate) -> Real {
        self.discount_bond_yt(t1, t2, rate - self.phi(t1))
    }

    fn discount_bond_yt(&self, t1: Time, t2: Time, y: Real) -> Real {
        if close(t1, t2, 1e-14) {
            return 1.0;
        }
        self.a_fitted(t1, t2) * (-self.cir.b_function(t1, t2) * y).exp()
    }

    fn discount_bond_option(
        &self,
        option_type: OptionType,
        strike: Real,
        t1: Time,
        t2: Time,
    ) -> Real {
        assert!(strike > 0.0, "strike must be positive");
        let cir = &self.cir;
        let pt = self.term_structure.discount(t1);
        let ps = self.term_structure.discount(t2);

        // Degenerate expiry: intrinsic value of the forward bond.
        if t1 < 1e-12 {
            let intrinsic = ps - strike;
            return match option_type {
                OptionType::Call => intrinsic.max(0.0),
                OptionType::Put => (-intrinsic).max(0.0),
            };
        }

        let sigma2 = cir.sigma * cir.sigma;
        let h = cir.gamma();
        let b = cir.b_function(t1, t2);

        let rho = 2.0 * h / (sigma2 * ((h * t1).exp() - 1.0));
        let psi = (cir.a + h) / sigma2;

        let df = 4.0 * cir.a * cir.b / sigma2;
        let ncps = 2.0 * rho * rho * cir.y0 * (h * t1).exp() / (rho + psi + b);
        let ncpt = 2.0 * rho * rho * cir.y0 * (h * t1).exp() / (rho + psi);

        // Exercise (call) happens when y(t1) falls below the critical state
        // implied by the fitted bond.
        let y_crit = (self.a_fitted(t1, t2) / strike).ln() / b;

        let chi_s = NonCentralChiSquare::new(df, ncps);
        let chi_t = NonCentralChiSquare::new(df, ncpt);

        let call = ps * chi_s.cdf(2.0 * y_crit * (rho + psi + b))
            - strike * pt * chi_t.cdf(2.0 * y_crit * (rho + psi));

        match option_type {
            OptionType::Call => call,
            OptionType::Put => call - ps + strike * pt,
        }
    }

    fn phi(&self, t: Time) -> Real {
        let cir = &self.cir;
        let forward = self.term_structure.instantaneous_forward(t);
        let h = cir.gamma();
        let expth = (t * h).exp();
        let temp = 2.0 * h + (cir.a + h) * (expth - 1.0);
        forward - 2.0 * cir.a * cir.b * (expth - 1.0) / temp
            - cir.y0 * 4.0 * h * h * expth / (temp * temp)
    }
}
