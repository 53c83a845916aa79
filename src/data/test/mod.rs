mod application;
mod form;
mod guild;
mod raid_trigger;
mod scheduled_job;
