//! Scheduled job parameter types and channel-name formatting options.

use serde::{Deserialize, Serialize};

/// Parameters for creating a new scheduled job.
#[derive(Debug, Clone)]
pub struct CreateScheduledJobParams {
    pub guild_instance_id: i32,
    pub name: String,
    /// Free text; channel jobs may carry serialized [`ChannelNameOptions`].
    pub description: Option<String>,
    /// 5-field cron expression (minute hour day-of-month month day-of-week).
    pub schedule: String,
    /// Discord category channel snowflake for channel-creation jobs.
    pub category_id: Option<i64>,
}

/// Formatting options a channel-creation job stores serialized inside its
/// description column. Malformed stored metadata is caught at read time and
/// the executor falls back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelNameOptions {
    /// Date pattern in `yyyy-MM-dd` style; `None` selects the default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}
