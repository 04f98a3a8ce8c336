//! Progress process entity.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Server-assigned identifier of a process record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessId(pub u64);

impl ProcessId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProcessId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Server-assigned identifier of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A task belonging to a process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    days: u32,
    completed: bool,
}

impl Task {
    /// Creates a pending task.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, name: impl Into<String>, days: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            days,
            completed: false,
        }
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Planned duration in days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.days
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }
}

/// A tracked process with its ordered tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    id: ProcessId,
    process_name: String,
    category: String,
    start_date: String,
    tasks: Vec<Task>,
}

impl ProcessRecord {
    /// Creates a record without tasks.
    ///
    /// `start_date` is kept exactly as the server sent it.
    #[must_use]
    pub fn new(
        id: impl Into<ProcessId>,
        process_name: impl Into<String>,
        category: impl Into<String>,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            process_name: process_name.into(),
            category: category.into(),
            start_date: start_date.into(),
            tasks: Vec::new(),
        }
    }

    /// Sets the tasks, keeping their order.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    #[must_use]
    pub const fn id(&self) -> ProcessId {
        self.id
    }

    #[must_use]
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Raw start date as received.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of completed tasks.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    /// Parses the start date as a calendar day.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339 date-times and naive
    /// `YYYY-MM-DDTHH:MM:SS` timestamps.
    #[must_use]
    pub fn start_day(&self) -> Option<NaiveDate> {
        let raw = self.start_date.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
            return Some(datetime.date_naive());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.date())
    }

    /// Formats the start date with a chrono format string.
    ///
    /// Falls back to the raw value when the date cannot be parsed or the
    /// format does not apply to a plain date (e.g. `%H`, or an unknown
    /// specifier).
    #[must_use]
    pub fn formatted_start_date(&self, format: &str) -> String {
        let Some(date) = self.start_day() else {
            return self.start_date.clone();
        };

        let mut out = String::new();
        match write!(out, "{}", date.format(format)) {
            Ok(()) => out,
            Err(_) => self.start_date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(start_date: &str) -> ProcessRecord {
        ProcessRecord::new(1_u64, "Onboarding", "HR", start_date)
    }

    #[test]
    fn test_time_or_unknown_specifier_renders_raw_date() {
        let r = record("2024-05-01");
        assert_eq!(r.formatted_start_date("%Y-%m-%d %H:%M"), "2024-05-01");
        assert_eq!(r.formatted_start_date("%Q"), "2024-05-01");
    }

    #[test]
    fn test_plain_date() {
        let r = record("2024-05-01");
        assert_eq!(r.start_day(), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(r.formatted_start_date("%-m/%-d/%Y"), "5/1/2024");
    }

    #[test]
    fn test_rfc3339_date() {
        let r = record("2024-05-01T10:30:00Z");
        assert_eq!(r.start_day(), NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_naive_datetime() {
        let r = record("2024-12-24T08:00:00.000");
        assert_eq!(r.formatted_start_date("%Y/%m/%d"), "2024/12/24");
    }

    #[test]
    fn test_unparseable_date_is_shown_verbatim() {
        let r = record("next monday");
        assert_eq!(r.start_day(), None);
        assert_eq!(r.formatted_start_date("%Y"), "next monday");
    }

    #[test]
    fn test_completed_count() {
        let r = record("2024-05-01").with_tasks(vec![
            Task::new(1_u64, "Laptop", 1).with_completed(true),
            Task::new(2_u64, "Accounts", 2),
            Task::new(3_u64, "Intro", 1).with_completed(true),
        ]);
        assert_eq!(r.completed_count(), 2);
        assert_eq!(r.tasks()[1].name(), "Accounts");
    }
}
