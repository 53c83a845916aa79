//! Raid trigger extension parameter types.

/// Parameters for attaching a raid-posting extension to a scheduled job.
#[derive(Debug, Clone)]
pub struct CreateRaidTriggerParams {
    pub scheduled_job_id: i32,
    pub title: String,
    pub description: Option<String>,
    /// "HH:MM"; the command composer falls back to 20:00 when unset.
    pub raid_time: Option<String>,
    pub participant_cap: Option<i32>,
    /// Target text channel snowflake the command string is posted into.
    pub channel_id: i64,
    pub template_id: Option<String>,
}
