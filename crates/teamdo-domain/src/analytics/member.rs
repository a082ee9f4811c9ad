use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::rate::completion_rate;
use crate::shared::UserId;
use crate::task::Task;
use crate::user::User;

/// Label for members whose profile has no name.
pub const UNNAMED_MEMBER: &str = "Unnamed";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberStats {
    pub user_id: UserId,
    pub name: String,
    pub email: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
    /// `completion_rate * 0.7 + completed * 0.3`, zero for a member without tasks.
    /// Computed from integer tenths so equal weighted sums compare equal.
    pub score: f64,
}

impl MemberStats {
    fn new(user_id: UserId, member: Option<&User>) -> Self {
        let (name, email) = match member {
            Some(user) => (
                user.name().unwrap_or(UNNAMED_MEMBER).to_string(),
                user.email().to_string(),
            ),
            None => (UNNAMED_MEMBER.to_string(), String::new()),
        };
        Self {
            user_id,
            name,
            email,
            total: 0,
            completed: 0,
            completion_rate: 0,
            score: 0.0,
        }
    }

    fn finish(&mut self) {
        self.completion_rate = completion_rate(self.completed, self.total);
        self.score = if self.total > 0 {
            f64::from(7 * self.completion_rate + 3 * self.completed) / 10.0
        } else {
            0.0
        };
    }
}

/// Per-owner totals in first-encounter order of `tasks`.
pub fn by_member(tasks: &[Task], members: &[User]) -> Vec<MemberStats> {
    let profiles: HashMap<&UserId, &User> = members.iter().map(|u| (u.id(), u)).collect();
    let mut index: HashMap<&UserId, usize> = HashMap::new();
    let mut stats: Vec<MemberStats> = Vec::new();

    for task in tasks {
        let slot = *index.entry(task.user_id()).or_insert_with(|| {
            stats.push(MemberStats::new(
                task.user_id().clone(),
                profiles.get(task.user_id()).copied(),
            ));
            stats.len() - 1
        });
        let entry = &mut stats[slot];
        entry.total += 1;
        if task.is_completed() {
            entry.completed += 1;
        }
    }

    for entry in &mut stats {
        entry.finish();
    }
    stats
}

/// Highest score wins. A later member must beat the leader strictly to replace it.
pub fn select_mvp(members: &[MemberStats]) -> Option<&MemberStats> {
    let mut iter = members.iter();
    let first = iter.next()?;
    Some(iter.fold(first, |leader, current| {
        if current.score > leader.score {
            current
        } else {
            leader
        }
    }))
}

/// Stable sort by completion rate, highest first.
pub fn sort_by_rate(members: &mut [MemberStats]) {
    members.sort_by(|a, b| b.completion_rate.cmp(&a.completion_rate));
}
