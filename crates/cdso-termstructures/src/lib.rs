//! # cdso-termstructures
//!
//! Discount-rate and hazard-rate term structures on a continuous-year time
//! axis. A hazard curve is represented as a yield-type curve whose
//! "discount factors" are survival probabilities, so the same trait serves
//! both roles in the pricing kernel.
//!
//! All curves are immutable once built and `Send + Sync`, so pricing runs
//! against a shared snapshot parallelize freely across instruments.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod flat_forward;
pub mod interpolated_discount_curve;
pub mod term_structure;
pub mod yield_term_structure;

pub use flat_forward::FlatForward;
pub use interpolated_discount_curve::InterpolatedDiscountCurve;
pub use term_structure::TermStructure;
pub use yield_term_structure::YieldTermStructure;
