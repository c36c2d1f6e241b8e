//! Instrument definitions for CDS options.
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cds_option;

pub use cds_option::{CdsOptionParams, CdsOptionSide};
