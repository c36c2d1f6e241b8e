//! # cdsoption
//!
//! Semi-analytic pricing of options on credit default swaps under a CIR++
//! (shifted Cox–Ingersoll–Ross) stochastic default intensity.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `cdso-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use cdsoption::instruments::{CdsOptionParams, CdsOptionSide};
//! use cdsoption::models::ExtendedCoxIngersollRoss;
//! use cdsoption::pricingengines::{CdsOptionMarket, CdsOptionPricer};
//! use cdsoption::termstructures::FlatForward;
//!
//! # fn main() -> cdsoption::core::Result<()> {
//! let discount = Arc::new(FlatForward::new(0.0, 0.10));
//! let hazard = Arc::new(FlatForward::new(0.0, 0.20));
//! let market = CdsOptionMarket::new(discount, hazard.clone(), 0.7)?;
//! let model = Arc::new(ExtendedCoxIngersollRoss::new(0.1, 0.20, 0.1, 0.20, hazard));
//!
//! // Payer option expiring in one year on a one-year CDS struck at 600 bp.
//! let params = CdsOptionParams::new(1.0, 2.0, 0.06, 1.0, CdsOptionSide::Payer)?;
//! let price = CdsOptionPricer::new(params, market, model).price()?;
//! assert!(price > 0.0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use cdso_core as core;

/// Mathematical utilities: quadrature, root finding, distributions.
pub use cdso_math as math;

/// Discount and survival term structures.
pub use cdso_termstructures as termstructures;

/// Stochastic default intensity models.
pub use cdso_models as models;

/// CDS option instrument definitions.
pub use cdso_instruments as instruments;

/// Pricing engines.
pub use cdso_pricingengines as pricingengines;
