//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and take parameter models from the command layer. All
//! database queries, inserts, updates, and deletes are performed through
//! these repositories.

pub mod application;
pub mod form;
pub mod guild;
pub mod raid_trigger;
pub mod scheduled_job;
pub mod welcome;

#[cfg(test)]
mod test;
