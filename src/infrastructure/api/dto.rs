//! Wire types of the `/progress` endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{ProcessRecord, Task};
use crate::domain::ports::{NewProcess, NewTask};

/// One element of `GET /progress`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    pub id: u64,
    pub process_name: String,
    pub category: String,
    pub start_date: String,
    pub tasks: Vec<TaskResponse>,
}

/// Task nested in [`ProgressResponse`].
#[derive(Debug, Deserialize)]
pub struct TaskResponse {
    pub id: u64,
    pub name: String,
    pub days: u32,
    pub completed: bool,
}

impl From<TaskResponse> for Task {
    fn from(task: TaskResponse) -> Self {
        Self::new(task.id, task.name, task.days).with_completed(task.completed)
    }
}

impl From<ProgressResponse> for ProcessRecord {
    fn from(progress: ProgressResponse) -> Self {
        Self::new(
            progress.id,
            progress.process_name,
            progress.category,
            progress.start_date,
        )
        .with_tasks(progress.tasks.into_iter().map(Task::from).collect())
    }
}

/// Body of `POST /progress`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProgressBody {
    pub process_name: String,
    pub category: String,
    pub start_date: NaiveDate,
    pub tasks: Vec<CreateTaskBody>,
}

/// Task entry of [`CreateProgressBody`].
#[derive(Debug, Serialize)]
pub struct CreateTaskBody {
    pub name: String,
    pub days: u32,
}

impl From<NewTask> for CreateTaskBody {
    fn from(task: NewTask) -> Self {
        Self {
            name: task.name,
            days: task.days,
        }
    }
}

impl From<NewProcess> for CreateProgressBody {
    fn from(process: NewProcess) -> Self {
        Self {
            process_name: process.process_name,
            category: process.category,
            start_date: process.start_date,
            tasks: process.tasks.into_iter().map(CreateTaskBody::from).collect(),
        }
    }
}

/// Error body returned by the backend, when it sends one.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best human-readable message of the body.
    #[must_use]
    pub fn into_message(self) -> Option<String> {
        self.message
            .filter(|m| !m.trim().is_empty())
            .or(self.error.filter(|e| !e.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_progress_list() {
        let body = json!([{
            "id": 7,
            "processName": "Onboarding",
            "category": "HR",
            "startDate": "2024-05-01",
            "tasks": [
                {"id": 1, "name": "Laptop", "days": 2, "completed": true},
                {"id": 2, "name": "Accounts", "days": 1, "completed": false}
            ]
        }]);

        let decoded: Vec<ProgressResponse> = serde_json::from_value(body).unwrap();
        let record = ProcessRecord::from(decoded.into_iter().next().unwrap());

        assert_eq!(record.id().as_u64(), 7);
        assert_eq!(record.category(), "HR");
        assert_eq!(record.tasks()[0].name(), "Laptop");
        assert!(record.tasks()[0].is_completed());
        assert!(!record.tasks()[1].is_completed());
    }

    #[test]
    fn test_missing_tasks_is_rejected() {
        let body = json!({
            "id": 7,
            "processName": "Onboarding",
            "category": "HR",
            "startDate": "2024-05-01"
        });
        assert!(serde_json::from_value::<ProgressResponse>(body).is_err());
    }

    #[test]
    fn test_string_days_is_rejected() {
        let body = json!({"id": 1, "name": "Laptop", "days": "2", "completed": false});
        assert!(serde_json::from_value::<TaskResponse>(body).is_err());
    }

    #[test]
    fn test_encode_create_body() {
        let process = NewProcess::new(
            "Onboarding",
            "HR",
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
        .with_tasks(vec![NewTask::new("Laptop", 5)]);

        let value = serde_json::to_value(CreateProgressBody::from(process)).unwrap();

        assert_eq!(
            value,
            json!({
                "processName": "Onboarding",
                "category": "HR",
                "startDate": "2024-05-01",
                "tasks": [{"name": "Laptop", "days": 5}]
            })
        );
    }

    #[test]
    fn test_error_message_preference() {
        let body: ErrorResponse =
            serde_json::from_value(json!({"error": "Conflict", "message": "duplicate"})).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("duplicate"));

        let body: ErrorResponse =
            serde_json::from_value(json!({"error": "Bad Request", "message": ""})).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad Request"));
    }
}
