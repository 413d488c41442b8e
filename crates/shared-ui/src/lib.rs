//! Presentational components for the hospital portal.
//!
//! `components` holds the generic building blocks; `records` turns backend
//! records into cards and table rows.

pub mod components;
pub mod records;

pub use components::*;
pub use records::*;
