//! Trigger registry: one live cron trigger per active job record.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex as StdMutex};

use chrono_tz::Tz;
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};
use uuid::Uuid;

use crate::data::scheduled_job::ScheduledJobRepository;
use crate::error::AppError;
use crate::scheduler::{dispatch, expression};

/// Owns the mapping from job record id to live trigger handle.
///
/// The map and the scheduler handle sit behind one async mutex so a refresh
/// (stop-and-reload) is exclusive against concurrent registry mutation. All
/// triggers run on the configured named time zone. A shared in-flight set
/// guards each job: a firing that begins while the previous firing of the
/// same job is still executing is skipped.
pub struct JobRegistry {
    db: DatabaseConnection,
    http: Arc<Http>,
    timezone: Tz,
    inner: Mutex<Inner>,
    in_flight: Arc<StdMutex<HashSet<i32>>>,
}

struct Inner {
    scheduler: Option<JobScheduler>,
    started: bool,
    triggers: HashMap<i32, Uuid>,
}

impl JobRegistry {
    pub fn new(db: DatabaseConnection, http: Arc<Http>, timezone: Tz) -> Self {
        Self {
            db,
            http,
            timezone,
            inner: Mutex::new(Inner {
                scheduler: None,
                started: false,
                triggers: HashMap::new(),
            }),
            in_flight: Arc::new(StdMutex::new(HashSet::new())),
        }
    }

    /// Creates and starts the underlying scheduler on first call, then
    /// performs the initial load of all active job records. Called from the
    /// ready handler once the gateway connection is up; later calls (gateway
    /// reconnects) are no-ops; use [`Self::refresh`] to re-materialize
    /// explicitly.
    pub async fn ensure_started(&self) -> Result<(), AppError> {
        {
            let mut inner = self.inner.lock().await;
            if inner.started {
                tracing::debug!("Job scheduler already running, skipping start");
                return Ok(());
            }

            let scheduler = match &inner.scheduler {
                Some(scheduler) => scheduler.clone(),
                None => {
                    let scheduler = JobScheduler::new().await?;
                    inner.scheduler = Some(scheduler.clone());
                    scheduler
                }
            };

            scheduler.start().await?;
            inner.started = true;
        }

        let count = self.refresh().await?;
        tracing::info!("Job scheduler started with {} active jobs", count);

        Ok(())
    }

    /// Stops and discards all currently-registered triggers, re-queries all
    /// job records flagged active and registers one trigger per record.
    ///
    /// The registry lock is held across the whole stop-and-reload, so a
    /// refresh is exclusive. An error from the query (or from trigger
    /// registration) aborts the refresh and propagates; there is no
    /// partial-failure isolation at load time.
    pub async fn refresh(&self) -> Result<usize, AppError> {
        let mut inner = self.inner.lock().await;

        let scheduler = match &inner.scheduler {
            Some(scheduler) => scheduler.clone(),
            None => {
                let scheduler = JobScheduler::new().await?;
                inner.scheduler = Some(scheduler.clone());
                scheduler
            }
        };

        let stale: Vec<(i32, Uuid)> = inner.triggers.drain().collect();
        for (job_id, uuid) in stale {
            if let Err(e) = scheduler.remove(&uuid).await {
                tracing::warn!("Failed to remove trigger for job {}: {}", job_id, e);
            }
        }

        let jobs = ScheduledJobRepository::new(&self.db).get_all_active().await?;

        for job in jobs {
            let job_id = job.id;
            let uuid = self.register_trigger(&scheduler, job).await?;
            inner.triggers.insert(job_id, uuid);
        }

        Ok(inner.triggers.len())
    }

    /// Bulk stop-and-clear of every registered trigger.
    pub async fn stop_all(&self) -> Result<(), AppError> {
        let mut inner = self.inner.lock().await;

        let Some(scheduler) = inner.scheduler.clone() else {
            return Ok(());
        };

        let stale: Vec<(i32, Uuid)> = inner.triggers.drain().collect();
        for (job_id, uuid) in stale {
            if let Err(e) = scheduler.remove(&uuid).await {
                tracing::warn!("Failed to remove trigger for job {}: {}", job_id, e);
            }
        }

        Ok(())
    }

    /// Record ids with a live trigger, sorted for stable display.
    pub async fn registered_job_ids(&self) -> Vec<i32> {
        let inner = self.inner.lock().await;
        let mut ids: Vec<i32> = inner.triggers.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Builds and adds one trigger for a job record. The record as loaded is
    /// captured by the trigger; row changes are only picked up by the next
    /// refresh.
    async fn register_trigger(
        &self,
        scheduler: &JobScheduler,
        job: entity::scheduled_job::Model,
    ) -> Result<Uuid, AppError> {
        let schedule = expression::to_scheduler_expression(&job.schedule);

        let db = self.db.clone();
        let http = self.http.clone();
        let timezone = self.timezone;
        let in_flight = self.in_flight.clone();

        let trigger = Job::new_async_tz(schedule.as_str(), self.timezone, move |_uuid, _lock| {
            let db = db.clone();
            let http = http.clone();
            let in_flight = in_flight.clone();
            let record = job.clone();

            Box::pin(async move {
                let Some(_guard) = InFlightGuard::acquire(in_flight, record.id) else {
                    tracing::warn!(
                        "Job {} ({}) is still executing, skipping this firing",
                        record.id,
                        record.name
                    );
                    return;
                };

                if let Err(e) = dispatch::run(&db, http, timezone, &record).await {
                    tracing::error!("Error executing job {} ({}): {}", record.id, record.name, e);
                }
            })
        })?;

        let uuid = scheduler.add(trigger).await?;

        Ok(uuid)
    }
}

/// Marks a job as executing for the lifetime of the guard; acquisition fails
/// while a previous firing of the same job still holds it.
struct InFlightGuard {
    set: Arc<StdMutex<HashSet<i32>>>,
    id: i32,
}

impl InFlightGuard {
    fn acquire(set: Arc<StdMutex<HashSet<i32>>>, id: i32) -> Option<Self> {
        let inserted = match set.lock() {
            Ok(mut guard) => guard.insert(id),
            Err(_) => return None,
        };

        inserted.then_some(Self { set, id })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if let Ok(mut guard) = self.set.lock() {
            guard.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn test_registry(db: &DatabaseConnection) -> JobRegistry {
        JobRegistry::new(
            db.clone(),
            Arc::new(Http::new("test-token")),
            chrono_tz::Europe::Berlin,
        )
    }

    #[tokio::test]
    async fn registers_one_trigger_per_active_record() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let first = factory::scheduled_job::create_job(db, guild.id).await?;
        let second = factory::scheduled_job::create_job(db, guild.id).await?;
        factory::scheduled_job::ScheduledJobFactory::new(db, guild.id)
            .is_active(false)
            .build()
            .await?;

        let registry = test_registry(db);
        let count = registry.refresh().await?;

        assert_eq!(count, 2);
        assert_eq!(registry.registered_job_ids().await, vec![first.id, second.id]);

        Ok(())
    }

    #[tokio::test]
    async fn refresh_without_record_changes_is_stable() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        factory::scheduled_job::create_job(db, guild.id).await?;
        factory::scheduled_job::create_job(db, guild.id).await?;

        let registry = test_registry(db);
        registry.refresh().await?;
        let first_ids = registry.registered_job_ids().await;

        registry.refresh().await?;
        let second_ids = registry.registered_job_ids().await;

        assert_eq!(first_ids, second_ids);

        Ok(())
    }

    #[tokio::test]
    async fn deactivation_takes_effect_only_after_refresh() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        let job = factory::scheduled_job::create_job(db, guild.id).await?;

        let registry = test_registry(db);
        registry.refresh().await?;
        assert_eq!(registry.registered_job_ids().await, vec![job.id]);

        ScheduledJobRepository::new(db).set_active(job.id, false).await?;
        assert_eq!(registry.registered_job_ids().await, vec![job.id]);

        registry.refresh().await?;
        assert!(registry.registered_job_ids().await.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn stop_all_clears_every_trigger() -> Result<(), AppError> {
        let test = TestBuilder::new().with_scheduler_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = factory::guild_instance::create_guild(db).await?;
        factory::scheduled_job::create_job(db, guild.id).await?;
        factory::scheduled_job::create_job(db, guild.id).await?;

        let registry = test_registry(db);
        registry.refresh().await?;

        registry.stop_all().await?;

        assert!(registry.registered_job_ids().await.is_empty());

        Ok(())
    }

    #[test]
    fn in_flight_guard_blocks_second_acquisition() {
        let set = Arc::new(StdMutex::new(HashSet::new()));

        let guard = InFlightGuard::acquire(set.clone(), 7);
        assert!(guard.is_some());
        assert!(InFlightGuard::acquire(set.clone(), 7).is_none());
        assert!(InFlightGuard::acquire(set.clone(), 8).is_some());

        drop(guard);
        assert!(InFlightGuard::acquire(set, 7).is_some());
    }
}
