//! Domain models and operation parameter types.
//!
//! Parameter types carry validated command input into the repository layer;
//! string-backed enums (`QuestionType`, `ApplicationStatus`) give the
//! free-text columns a typed surface in the service layer.

pub mod application;
pub mod job;
pub mod raid;
pub mod welcome;
