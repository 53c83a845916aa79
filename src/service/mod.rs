//! Business rules sitting between the command layer and the repositories.

pub mod application;
pub mod welcome;
