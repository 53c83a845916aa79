//! Scheduled-job re-materialization loop.
//!
//! Active job rows are loaded from storage and turned into one in-process
//! cron trigger each. A firing dispatches to one of two side effects: create
//! a dated text channel under a category, or post a raid-creation command
//! string into a channel. The scheduling itself is delegated to
//! `tokio_cron_scheduler`; this module owns the row-to-trigger mapping, the
//! per-firing dispatch, and nothing else.
//!
//! Failure posture: a failed load/refresh query propagates to the caller; a
//! failed firing is caught and logged so one job's failure never stops
//! others. Flipping a job's active flag takes effect at the next refresh,
//! not immediately.

pub mod dispatch;
pub mod expression;
pub mod format;
pub mod registry;
