use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::data::scheduled_job::ScheduledJobRepository;
use crate::model::job::CreateScheduledJobParams;

mod create;
mod delete;
mod get_all_active;
mod set_active;
