use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::shared::{DomainError, TaskId};
use crate::task::{CarryOverCommit, Task, TaskRepository};

/// A task whose carry-over could not be committed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarryOverFailure {
    pub task_id: TaskId,
    pub error: String,
}

/// Outcome of one carry-over run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarryOverReport {
    /// Tasks copied forward into today
    pub carried_count: u32,
    /// Sources closed without a copy because today already had the same content
    pub skipped_count: u32,
    pub failed_count: u32,
    /// The day whose unfinished tasks were processed
    pub processed_date: Option<NaiveDate>,
    pub failures: Vec<CarryOverFailure>,
}

/// Moves every unfinished task of one day into the next.
///
/// Each source row is closed in the same store transaction that inserts its
/// replacement, so a second run over the same day finds nothing to do.
pub struct CarryOverProcessor {
    tasks: Arc<dyn TaskRepository>,
}

impl CarryOverProcessor {
    pub fn new(tasks: Arc<dyn TaskRepository>) -> Self {
        Self { tasks }
    }

    pub async fn run(
        &self,
        yesterday: NaiveDate,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<CarryOverReport, DomainError> {
        if today != yesterday + Duration::days(1) {
            return Err(DomainError::InvalidInput(format!(
                "Carry-over must target the next day: {yesterday} -> {today}"
            )));
        }

        let candidates = self.tasks.find_incomplete_on(yesterday).await?;
        let mut report = CarryOverReport {
            processed_date: Some(yesterday),
            ..Default::default()
        };

        for task in candidates
            .iter()
            .filter(|t| t.is_carry_over_candidate(yesterday))
        {
            match self.carry_one(task, today, now).await {
                Ok(CarryOverCommit::Carried) => report.carried_count += 1,
                Ok(CarryOverCommit::ClosedAsDuplicate) => report.skipped_count += 1,
                Ok(CarryOverCommit::AlreadyClosed) => {}
                Err(e) => {
                    report.failed_count += 1;
                    report.failures.push(CarryOverFailure {
                        task_id: task.id().clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(report)
    }

    async fn carry_one(
        &self,
        task: &Task,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<CarryOverCommit, DomainError> {
        // exact, case-sensitive match
        let duplicate = self
            .tasks
            .exists_with_content(task.user_id(), task.content(), today)
            .await?;

        let mut closed = task.clone();
        closed.close_as_carried(now);

        let replacement = if duplicate {
            None
        } else {
            Some(task.carried_forward(today)?)
        };

        self.tasks
            .commit_carry_over(&closed, replacement.as_ref())
            .await
    }
}
