//! Aggregates already-fetched projects and messages into the figures and
//! chart series shown on the dashboard.

use chrono::{Days, NaiveDate};
use itertools::Itertools;

use super::backend::{Message, Project, ProjectType};

/// Length of the trailing message activity window.
pub const ACTIVITY_DAYS: u64 = 7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub mobile: usize,
    pub web: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let counts = projects.iter().counts_by(|p| p.kind);

        Self {
            total: projects.len(),
            mobile: counts.get(&ProjectType::Mobile).copied().unwrap_or(0),
            web: counts.get(&ProjectType::Web).copied().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageStats {
    pub total: usize,
    pub unread: usize,
}

impl MessageStats {
    pub fn from_messages(messages: &[Message]) -> Self {
        Self {
            total: messages.len(),
            unread: messages.iter().filter(|m| !m.is_read).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub label: &'static str,
    pub value: usize,
    pub color: &'static str,
}

/// Mobile vs web split for the proportion chart.
pub fn proportion_view(stats: &ProjectStats) -> [Share; 2] {
    [
        Share {
            label: "Mobile Apps",
            value: stats.mobile,
            color: "#3B82F6",
        },
        Share {
            label: "Web Apps",
            value: stats.web,
            color: "#F97316",
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket {
    pub day: NaiveDate,
    /// Short weekday, e.g. `Mon`.
    pub label: String,
    pub count: usize,
}

/// Message counts for the [`ACTIVITY_DAYS`] calendar days ending at `today`,
/// oldest first. A message lands in a day when its `createdAt` starts with
/// that day's `YYYY-MM-DD`.
pub fn daily_activity(messages: &[Message], today: NaiveDate) -> Vec<DayBucket> {
    (0..ACTIVITY_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|day| {
            let key = day.format("%Y-%m-%d").to_string();
            let count = messages
                .iter()
                .filter_map(|m| m.created_at.as_deref())
                .filter(|created| created.starts_with(&key))
                .count();

            DayBucket {
                day,
                label: day.format("%a").to_string(),
                count,
            }
        })
        .collect()
}

/// Today's date in UTC, which is the calendar the backend timestamps use.
pub fn today_utc() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
