//! Data models for the form builder.
//!
//! These models match the editor's wire format exactly so schemas round-trip
//! through JSON without transformation.

mod field;
mod form;

pub use field::*;
pub use form::*;
