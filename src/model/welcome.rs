//! Welcome message parameter types.

/// Parameters for setting a guild's welcome message template.
#[derive(Debug, Clone)]
pub struct UpsertWelcomeParams {
    pub guild_instance_id: i32,
    pub template: String,
}
