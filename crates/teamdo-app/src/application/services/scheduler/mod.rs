use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use teamdo_domain::carry_over::{CarryOverProcessor, CarryOverReport};
use teamdo_domain::shared::DomainError;
use teamdo_domain::task::TaskRepository;

mod task_spawner;

/// Runs the carry-over processor once a day at a fixed local time.
pub struct CarryOverScheduler {
    processor: Arc<CarryOverProcessor>,
    hour: u32,
    minute: u32,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl CarryOverScheduler {
    pub fn new(task_repo: Arc<dyn TaskRepository>, hour: u32, minute: u32) -> Self {
        Self {
            processor: Arc::new(CarryOverProcessor::new(task_repo)),
            hour,
            minute,
            handle: Mutex::new(None),
        }
    }

    /// Carry yesterday's unfinished tasks into today, using the local date.
    pub async fn run_once(&self) -> Result<CarryOverReport, DomainError> {
        let today = Local::now().date_naive();
        run_carry_over(&self.processor, today - Duration::days(1), today).await
    }

    /// Start the daily loop. A running loop is replaced.
    pub async fn start(&self) {
        let handle = self.spawn_daily_task();
        if let Some(previous) = self.handle.lock().await.replace(handle) {
            warn!("Replacing running carry-over loop");
            previous.abort();
        }
    }

    pub async fn stop(&self) {
        if let Some(handle) = self.handle.lock().await.take() {
            handle.abort();
            info!("🛑 Carry-over scheduler stopped");
        }
    }
}

/// One processor run with every per-task failure logged.
pub(crate) async fn run_carry_over(
    processor: &CarryOverProcessor,
    yesterday: NaiveDate,
    today: NaiveDate,
) -> Result<CarryOverReport, DomainError> {
    info!("🔄 [CARRY-OVER] Processing {} -> {}", yesterday, today);

    let report = processor.run(yesterday, today, Utc::now()).await?;

    for failure in &report.failures {
        error!(
            "❌ [CARRY-OVER] Task {} failed: {}",
            failure.task_id, failure.error
        );
    }
    info!(
        "✅ [CARRY-OVER] Done for {}: carried={}, skipped={}, failed={}",
        yesterday, report.carried_count, report.skipped_count, report.failed_count
    );

    Ok(report)
}

/// First `hour:minute` strictly after `now`, in `now`'s time zone.
///
/// A time repeated by a DST fall-back resolves to its first occurrence. `None`
/// when the wall-clock time does not exist, either because it is out of range
/// or because a DST gap skips it on both candidate days.
pub(crate) fn next_run_after<Tz: TimeZone>(
    now: &DateTime<Tz>,
    hour: u32,
    minute: u32,
) -> Option<DateTime<Tz>> {
    let today = now.date_naive();
    let at = |day: NaiveDate| {
        day.and_hms_opt(hour, minute, 0)
            .and_then(|local| first_occurrence(local.and_local_timezone(now.timezone())))
    };

    match at(today) {
        Some(next) if next > *now => Some(next),
        _ => today.succ_opt().and_then(at),
    }
}

/// Earliest instant for a local time; `None` only for a gap.
fn first_occurrence<T>(local: LocalResult<T>) -> Option<T> {
    local.earliest()
}
