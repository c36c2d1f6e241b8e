//! The intensity-model contract consumed by the pricing kernel.

use cdso_core::{OptionType, Real, Time};

/// A stochastic default-intensity model exposing the zero-bond pricing
/// primitives the CDS option kernel composes.
///
/// "Bond" here means the survival-measure zero-coupon bond generated by the
/// intensity process; for a curve-fitted model, `discount_bond_yt(0, s, y0)`
/// reprices the initial curve.
pub trait IntensityModel: std::fmt::Debug + Send + Sync {
    /// Bond price `P(t1, t2)` conditioned on the full (shifted) intensity
    /// `rate` at `t1`.
    fn discount_bond(&self, t1: Time, t2: Time, rate: Real) -> Real;

    /// Bond price `P(t1, t2)` conditioned on the *state-space* value `y` of
    /// the underlying diffusion at `t1` (the shift applied internally).
    fn discount_bond_yt(&self, t1: Time, t2: Time, y: Real) -> Real;

    /// Analytic price of a European option on the zero-coupon bond maturing
    /// at `t2`, with exercise at `t1` and the given strike bond price.
    fn discount_bond_option(
        &self,
        option_type: OptionType,
        strike: Real,
        t1: Time,
        t2: Time,
    ) -> Real;

    /// The deterministic shift `φ(t)` fitting the model to the initial
    /// curve.
    fn phi(&self, t: Time) -> Real;
}
