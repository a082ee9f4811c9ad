use crate::application::dtos::{CarriedTaskDto, InsightsDto};
use teamdo_domain::analytics::PeriodTotals;
use teamdo_domain::shared::UserId;
use teamdo_domain::task::Task;

/// Carry count at which a task counts as chronically delayed.
const CHRONIC_CARRY_OVER: u32 = 2;

impl From<&Task> for CarriedTaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().as_str().to_string(),
            content: task.content().to_string(),
            carry_over_count: task.carry_over_count(),
        }
    }
}

/// `week_tasks` covers the whole team for Monday..=today.
pub(super) fn viewer_insights(
    viewer: &UserId,
    week_tasks: &[Task],
    today_tasks: &[Task],
    streak: u32,
) -> InsightsDto {
    let mine = PeriodTotals::from_tasks(week_tasks.iter().filter(|t| t.is_owned_by(viewer)));
    let team = PeriodTotals::from_tasks(week_tasks);

    InsightsDto {
        weekly_total: mine.total,
        weekly_completed: mine.completed,
        weekly_rate: mine.completion_rate,
        team_weekly_rate: team.completion_rate,
        streak,
        most_carried_todo: most_carried(viewer, week_tasks).map(CarriedTaskDto::from),
        carried_todos_today: chronically_delayed(viewer, today_tasks)
            .into_iter()
            .map(CarriedTaskDto::from)
            .collect(),
    }
}

/// Highest carry count above zero; the first such task in query order wins ties.
fn most_carried<'a>(viewer: &UserId, tasks: &'a [Task]) -> Option<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.is_owned_by(viewer) && t.carry_over_count() > 0)
        .fold(None, |best: Option<&Task>, task| match best {
            Some(b) if task.carry_over_count() <= b.carry_over_count() => Some(b),
            _ => Some(task),
        })
}

fn chronically_delayed<'a>(viewer: &UserId, today_tasks: &'a [Task]) -> Vec<&'a Task> {
    let mut delayed: Vec<&Task> = today_tasks
        .iter()
        .filter(|t| {
            t.is_owned_by(viewer)
                && !t.is_completed()
                && t.carry_over_count() >= CHRONIC_CARRY_OVER
        })
        .collect();
    delayed.sort_by(|a, b| b.carry_over_count().cmp(&a.carry_over_count()));
    delayed
}
