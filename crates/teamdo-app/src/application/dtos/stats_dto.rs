use serde::{Deserialize, Serialize};

use crate::application::utils::format_date;
use teamdo_domain::analytics::{DailyCompletion, DayOfWeekStats, MemberStats, WeekBucket};
use teamdo_domain::carry_over::CarryOverReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodDto {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverallDto {
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
    /// Monthly only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_productive_day: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyStatDto {
    pub date: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

impl From<&DailyCompletion> for DailyStatDto {
    fn from(day: &DailyCompletion) -> Self {
        Self {
            date: format_date(day.date),
            total: day.total,
            completed: day.completed,
            completion_rate: day.completion_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekStatDto {
    pub week: String, // "M/D - M/D"
    pub start: String,
    pub end: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

impl From<&WeekBucket> for WeekStatDto {
    fn from(bucket: &WeekBucket) -> Self {
        Self {
            week: bucket.week.clone(),
            start: format_date(bucket.start),
            end: format_date(bucket.end),
            total: bucket.total,
            completed: bucket.completed,
            completion_rate: bucket.completion_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfWeekStatDto {
    pub day: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
}

impl From<&DayOfWeekStats> for DayOfWeekStatDto {
    fn from(bucket: &DayOfWeekStats) -> Self {
        Self {
            day: bucket.day.clone(),
            total: bucket.total,
            completed: bucket.completed,
            completion_rate: bucket.completion_rate,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberStatDto {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub total: u32,
    pub completed: u32,
    pub completion_rate: u32,
    pub score: f64,
}

impl From<&MemberStats> for MemberStatDto {
    fn from(stats: &MemberStats) -> Self {
        Self {
            user_id: stats.user_id.as_str().to_string(),
            name: stats.name.clone(),
            email: stats.email.clone(),
            total: stats.total,
            completed: stats.completed,
            completion_rate: stats.completion_rate,
            score: stats.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyStatsDto {
    pub period: PeriodDto,
    pub overall: OverallDto,
    pub daily: Vec<DailyStatDto>,
    pub by_member: Vec<MemberStatDto>,
    pub mvp: Option<MemberStatDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyStatsDto {
    pub period: PeriodDto,
    pub overall: OverallDto,
    pub by_week: Vec<WeekStatDto>,
    pub by_day_of_week: Vec<DayOfWeekStatDto>,
    pub by_member: Vec<MemberStatDto>,
}

// ============================================================
// Carry-Over DTOs
// ============================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarryOverResultDto {
    pub carried_count: u32,
    pub skipped_count: u32,
    pub failed_count: u32,
    pub processed_date: Option<String>,
}

impl From<&CarryOverReport> for CarryOverResultDto {
    fn from(report: &CarryOverReport) -> Self {
        Self {
            carried_count: report.carried_count,
            skipped_count: report.skipped_count,
            failed_count: report.failed_count,
            processed_date: report.processed_date.map(format_date),
        }
    }
}
