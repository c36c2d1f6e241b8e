//! # cdso-models
//!
//! Stochastic default-intensity models.
//!
//! ```text
//! IntensityModel (trait)
//! └── ExtendedCoxIngersollRoss  — CIR++ fitted to an initial curve
//!     └── CoxIngersollRoss     — the raw square-root diffusion
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cox_ingersoll_ross;
pub mod extended_cox_ingersoll_ross;
pub mod intensity_model;

pub use cox_ingersoll_ross::CoxIngersollRoss;
pub use extended_cox_ingersoll_ross::ExtendedCoxIngersollRoss;
pub use intensity_model::IntensityModel;
