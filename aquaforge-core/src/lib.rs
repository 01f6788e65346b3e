//! Performance metrics for aquaculture ponds.
//!
//! Raw records (feed logs, samplings, mortalities) are reduced to a handful of
//! scalar variables per pond ([`derivation`]), fed through the standard
//! formulas ([`formulas`]), classified ([`interpretation`]) and explained as
//! formula traces ([`display`]).

pub mod derivation;
pub mod display;
pub mod error;
pub mod formulas;
pub mod interpretation;
pub mod logger;
pub mod series;
pub mod state;

pub use derivation::{derive_for, derive_pond_variables, PondMetrics, PondRecords, PondVariables};
pub use display::{BiomassMode, FormulaDisplay, MetricInputs};
pub use error::AquaforgeError;
