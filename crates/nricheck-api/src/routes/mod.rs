//! Route modules, one per API surface.

pub mod assessments;
pub mod calendar;
