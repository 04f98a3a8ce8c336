//! Editable draft of a process before it is submitted.
//!
//! All transitions are plain methods so the form logic can be exercised
//! without a terminal. The draft always holds at least one task entry.

use chrono::NaiveDate;

use crate::domain::errors::DraftError;
use crate::domain::ports::{NewProcess, NewTask};

/// Format the start date field must use.
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Editable field of a task draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum TaskField {
    Name,
    Days,
}

/// One task entry as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    /// Task name as typed.
    pub name: String,
    /// Duration in days, parsed on submit.
    pub days: String,
}

impl TaskDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, days: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            days: days.into(),
        }
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: TaskField) -> &str {
        match field {
            TaskField::Name => &self.name,
            TaskField::Days => &self.days,
        }
    }
}

/// Client-side draft of a new process.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct ProcessDraft {
    pub process_name: String,
    pub category: String,
    pub start_date: String,
    tasks: Vec<TaskDraft>,
}

impl ProcessDraft {
    /// Creates an empty draft with a single empty task.
    #[must_use]
    pub fn new() -> Self {
        Self {
            process_name: String::new(),
            category: String::new(),
            start_date: String::new(),
            tasks: vec![TaskDraft::default()],
        }
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskDraft] {
        &self.tasks
    }

    /// Appends an empty task entry.
    pub fn add_task(&mut self) {
        self.tasks.push(TaskDraft::default());
    }

    /// Removes the task at `index` unless it is the last one left.
    ///
    /// Returns whether anything was removed.
    pub fn remove_task(&mut self, index: usize) -> bool {
        if self.tasks.len() <= 1 || index >= self.tasks.len() {
            return false;
        }
        self.tasks.remove(index);
        true
    }

    /// Replaces one field of the task at `index`.
    ///
    /// Returns `false` when the index is out of range.
    pub fn update_task(&mut self, index: usize, field: TaskField, value: impl Into<String>) -> bool {
        let Some(task) = self.tasks.get_mut(index) else {
            return false;
        };
        match field {
            TaskField::Name => task.name = value.into(),
            TaskField::Days => task.days = value.into(),
        }
        true
    }

    /// Clears every field back to the initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Whether the draft is still in its initial state.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        *self == Self::new()
    }

    /// Validates the draft and converts it into a creation request.
    ///
    /// Text fields are sent as typed; `days` is trimmed and parsed as a
    /// non-negative integer.
    ///
    /// # Errors
    /// Returns the first problem found, scanning fields in form order.
    pub fn to_new_process(&self) -> Result<NewProcess, DraftError> {
        require(&self.process_name, "process name")?;
        require(&self.category, "category")?;
        require(&self.start_date, "start date")?;

        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), START_DATE_FORMAT)
            .map_err(|_| DraftError::InvalidStartDate {
                value: self.start_date.clone(),
            })?;

        let tasks = self
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| {
                if task.name.trim().is_empty() {
                    return Err(DraftError::missing_task_field(index, "name"));
                }
                let days = task.days.trim();
                if days.is_empty() {
                    return Err(DraftError::missing_task_field(index, "days"));
                }
                let days = days
                    .parse::<u32>()
                    .map_err(|_| DraftError::invalid_days(index, task.days.clone()))?;
                Ok(NewTask::new(task.name.clone(), days))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(
            NewProcess::new(self.process_name.clone(), self.category.clone(), start_date)
                .with_tasks(tasks),
        )
    }
}

impl Default for ProcessDraft {
    fn default() -> Self {
        Self::new()
    }
}

fn require(value: &str, field: &'static str) -> Result<(), DraftError> {
    if value.trim().is_empty() {
        Err(DraftError::missing(field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProcessDraft {
        let mut draft = ProcessDraft::new();
        draft.process_name = "Onboarding".to_string();
        draft.category = "HR".to_string();
        draft.start_date = "2024-05-01".to_string();
        draft.update_task(0, TaskField::Name, "Laptop");
        draft.update_task(0, TaskField::Days, "5");
        draft
    }

    #[test]
    fn test_initial_state_has_one_empty_task() {
        let draft = ProcessDraft::new();
        assert_eq!(draft.tasks(), &[TaskDraft::default()]);
        assert!(draft.is_pristine());
    }

    #[test]
    fn test_remove_last_task_is_noop() {
        let mut draft = ProcessDraft::new();
        assert!(!draft.remove_task(0));
        assert_eq!(draft.tasks().len(), 1);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut draft = ProcessDraft::new();
        draft.add_task();
        assert!(!draft.remove_task(7));
        assert_eq!(draft.tasks().len(), 2);
    }

    #[test]
    fn test_add_twice_then_remove_middle() {
        let mut draft = ProcessDraft::new();
        draft.update_task(0, TaskField::Name, "first");
        draft.add_task();
        draft.update_task(1, TaskField::Name, "second");
        draft.add_task();
        draft.update_task(2, TaskField::Name, "third");
        assert_eq!(draft.tasks().len(), 3);

        assert!(draft.remove_task(1));

        let names: Vec<&str> = draft.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "third"]);
    }

    #[test]
    fn test_add_n_remove_m_preserves_order() {
        let mut draft = ProcessDraft::new();
        for i in 1..6 {
            draft.add_task();
            draft.update_task(i, TaskField::Name, i.to_string());
        }
        assert_eq!(draft.tasks().len(), 6);

        draft.remove_task(4);
        draft.remove_task(0);
        draft.remove_task(1);

        let names: Vec<&str> = draft.tasks().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_update_days_touches_only_target() {
        let mut draft = ProcessDraft::new();
        draft.add_task();
        draft.add_task();
        draft.update_task(0, TaskField::Days, "1");
        draft.update_task(2, TaskField::Days, "3");

        assert!(draft.update_task(1, TaskField::Days, "42"));

        assert_eq!(draft.tasks()[0], TaskDraft::new("", "1"));
        assert_eq!(draft.tasks()[1], TaskDraft::new("", "42"));
        assert_eq!(draft.tasks()[2], TaskDraft::new("", "3"));
    }

    #[test]
    fn test_update_out_of_range_fails() {
        let mut draft = ProcessDraft::new();
        assert!(!draft.update_task(3, TaskField::Name, "x"));
        assert!(draft.is_pristine());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut draft = filled_draft();
        draft.add_task();
        draft.reset();

        assert!(draft.process_name.is_empty());
        assert!(draft.category.is_empty());
        assert!(draft.start_date.is_empty());
        assert_eq!(draft.tasks().len(), 1);
        assert!(draft.is_pristine());
    }

    #[test]
    fn test_days_are_parsed_into_request() {
        let mut draft = filled_draft();
        draft.add_task();
        draft.update_task(1, TaskField::Name, "Accounts");
        draft.update_task(1, TaskField::Days, " 12 ");

        let request = draft.to_new_process().unwrap();

        assert_eq!(request.process_name, "Onboarding");
        assert_eq!(request.category, "HR");
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(
            request.tasks,
            vec![NewTask::new("Laptop", 5), NewTask::new("Accounts", 12)]
        );
    }

    #[test]
    fn test_non_numeric_days_rejected() {
        let mut draft = filled_draft();
        draft.update_task(0, TaskField::Days, "five");

        assert_eq!(
            draft.to_new_process(),
            Err(DraftError::InvalidDays {
                position: 1,
                value: "five".to_string()
            })
        );
    }

    #[test]
    fn test_negative_days_rejected() {
        let mut draft = filled_draft();
        draft.update_task(0, TaskField::Days, "-2");
        assert!(matches!(
            draft.to_new_process(),
            Err(DraftError::InvalidDays { .. })
        ));
    }

    #[test]
    fn test_required_fields() {
        let mut draft = filled_draft();
        draft.category = "  ".to_string();
        assert_eq!(draft.to_new_process(), Err(DraftError::missing("category")));

        let mut draft = filled_draft();
        draft.add_task();
        assert_eq!(
            draft.to_new_process(),
            Err(DraftError::missing_task_field(1, "name"))
        );
    }

    #[test]
    fn test_bad_start_date_rejected() {
        let mut draft = filled_draft();
        draft.start_date = "01/05/2024".to_string();
        assert!(matches!(
            draft.to_new_process(),
            Err(DraftError::InvalidStartDate { .. })
        ));
    }

    #[test]
    fn test_error_message_reads_well() {
        let err = DraftError::invalid_days(1, "x");
        assert_eq!(err.to_string(), "task 2: days must be a whole number, got \"x\"");
    }
}
