use chrono::NaiveDate;
use std::collections::HashMap;

use crate::application::dtos::{MemberDayDto, TaskDto};
use teamdo_domain::analytics::{completion_rate, group_by_date, StreakCalculator};
use teamdo_domain::day_start::DayStart;
use teamdo_domain::shared::UserId;
use teamdo_domain::task::Task;
use teamdo_domain::user::User;

/// Streak per task owner. Members without past tasks are absent.
pub(super) fn streaks_by_member(
    calculator: &StreakCalculator,
    past_tasks: &[Task],
    today: NaiveDate,
) -> HashMap<UserId, u32> {
    let mut by_owner: HashMap<&UserId, Vec<&Task>> = HashMap::new();
    for task in past_tasks {
        by_owner.entry(task.user_id()).or_default().push(task);
    }

    by_owner
        .into_iter()
        .map(|(owner, tasks)| {
            let days = group_by_date(tasks);
            (owner.clone(), calculator.compute(&days, today))
        })
        .collect()
}

/// One view per member in `members` order. `streaks` is `None` on history views.
pub(super) fn member_boards(
    members: &[User],
    day_tasks: &[Task],
    day_starts: &[DayStart],
    streaks: Option<&HashMap<UserId, u32>>,
) -> Vec<MemberDayDto> {
    members
        .iter()
        .map(|member| {
            let mut todos: Vec<&Task> = day_tasks
                .iter()
                .filter(|t| t.is_owned_by(member.id()))
                .collect();
            sort_for_board(&mut todos);

            let total = todos.len() as u32;
            let completed = todos.iter().filter(|t| t.is_completed()).count() as u32;
            let started_at = day_starts
                .iter()
                .find(|d| d.user_id() == member.id())
                .map(|d| d.started_at().to_rfc3339());

            MemberDayDto {
                id: member.id().as_str().to_string(),
                name: member.name().map(str::to_string),
                email: member.email().to_string(),
                todos: todos.into_iter().map(TaskDto::from).collect(),
                total_count: total,
                completed_count: completed,
                progress: completion_rate(completed, total),
                started: started_at.is_some(),
                started_at,
                streak: streaks.map(|s| s.get(member.id()).copied().unwrap_or(0)),
            }
        })
        .collect()
}

/// Incomplete before complete, then priority descending. Stable otherwise.
pub(super) fn sort_for_board(tasks: &mut [&Task]) {
    tasks.sort_by(|a, b| {
        a.is_completed()
            .cmp(&b.is_completed())
            .then_with(|| b.priority().cmp(&a.priority()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use teamdo_domain::shared::TeamId;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn task(owner: &User, content: &str, date: NaiveDate, completed: bool, priority: i32) -> Task {
        let mut task = Task::new(
            owner.id().clone(),
            TeamId::from_string("team-1"),
            content.to_string(),
            Some(date),
        )
        .unwrap();
        task.set_completed(completed, Utc::now());
        task.set_priority(priority);
        task
    }

    fn member(email: &str, name: Option<&str>) -> User {
        User::new(email.to_string(), name.map(str::to_string)).unwrap()
    }

    #[test]
    fn test_board_orders_incomplete_first_then_priority() {
        let alice = member("alice@example.com", Some("Alice"));
        let tasks = vec![
            task(&alice, "done high", day(15), true, 5),
            task(&alice, "open low", day(15), false, 0),
            task(&alice, "open high", day(15), false, 3),
            task(&alice, "open low second", day(15), false, 0),
        ];

        let boards = member_boards(std::slice::from_ref(&alice), &tasks, &[], None);
        let contents: Vec<&str> = boards[0].todos.iter().map(|t| t.content.as_str()).collect();

        assert_eq!(
            contents,
            vec!["open high", "open low", "open low second", "done high"]
        );
        assert_eq!(boards[0].total_count, 4);
        assert_eq!(boards[0].completed_count, 1);
        assert_eq!(boards[0].progress, 25);
        assert!(!boards[0].started);
        assert!(boards[0].streak.is_none());
    }

    #[test]
    fn test_board_marks_started_members_and_empty_days() {
        let alice = member("alice@example.com", Some("Alice"));
        let bob = member("bob@example.com", None);
        let started = DayStart::new(bob.id().clone(), day(15), Utc::now());

        let mut streaks = HashMap::new();
        streaks.insert(bob.id().clone(), 2);

        let boards = member_boards(&[alice, bob], &[], &[started], Some(&streaks));

        assert!(!boards[0].started);
        assert_eq!(boards[0].streak, Some(0));
        assert_eq!(boards[0].progress, 0);
        assert!(boards[1].started);
        assert!(boards[1].started_at.is_some());
        assert_eq!(boards[1].streak, Some(2));
        assert!(boards[1].name.is_none());
    }

    #[test]
    fn test_streaks_by_member_are_independent() {
        let alice = member("alice@example.com", None);
        let bob = member("bob@example.com", None);
        let today = day(15);

        let mut past = Vec::new();
        for back in 1..=3 {
            past.push(task(&alice, "daily", today - Duration::days(back), true, 0));
        }
        past.push(task(&bob, "daily", today - Duration::days(1), true, 0));
        past.push(task(&bob, "left over", today - Duration::days(2), false, 0));

        let streaks = streaks_by_member(&StreakCalculator::default(), &past, today);

        assert_eq!(streaks.get(alice.id()), Some(&3));
        assert_eq!(streaks.get(bob.id()), Some(&1));
    }
}
