//! Pricing engines for CDS options.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cds_option_engine;

pub use cds_option_engine::{CdsOptionMarket, CdsOptionPricer, CdsOptionPricing};
