use chrono::{DateTime, NaiveDate, Utc};

use crate::enums::Status;
use crate::validation::rules::{
    max_length, not_in_past, required, starts_with_uppercase, with_message,
};
use crate::validation::{Validate, ValidationErrors};

/// A unit of campaign work carried out for a client, optionally assigned
/// to a team member.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TaskItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    start_date: DateTime<Utc>,
    completed_date: Option<DateTime<Utc>>,
    status: Status,
    pub client_id: i32,
    pub team_member_id: Option<String>,
}

impl TaskItem {
    /// Create a new active task for a client. The start date is stamped
    /// here and never changes afterwards.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: NaiveDate,
        client_id: i32,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            due_date,
            start_date: Utc::now(),
            completed_date: None,
            status: Status::Active,
            client_id,
            team_member_id: None,
        }
    }

    /// When work on the task was registered.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// When the task reached Closed, if it has.
    pub fn completed_date(&self) -> Option<DateTime<Utc>> {
        self.completed_date
    }

    /// Request a status change. A closed task ignores the request: its
    /// status and completion date never move again. Reaching Closed
    /// stamps the completion date.
    pub fn set_status(&mut self, status: Status) {
        if self.status.is_closed() {
            return;
        }
        self.status = status;
        if self.status.is_closed() {
            self.completed_date = Some(Utc::now());
        }
    }

    /// Finish the task. Idempotent: the first call stamps the completion
    /// date, later calls change nothing.
    pub fn close(&mut self) {
        self.set_status(Status::Closed);
    }
}

impl Validate for TaskItem {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.field(
            "title",
            self.title.as_str(),
            &[
                &with_message("Title is required.", required),
                &with_message("Title can have a maximum of 200 characters.", max_length(200)),
                &with_message("Title must start with an uppercase letter.", starts_with_uppercase),
            ],
        );

        errors.field(
            "description",
            self.description.as_str(),
            &[
                &with_message("Description is required.", required),
                &with_message(
                    "Description can have a maximum of 1000 characters.",
                    max_length(1000),
                ),
                &with_message(
                    "Description must start with an uppercase letter.",
                    starts_with_uppercase,
                ),
            ],
        );

        errors.field(
            "due_date",
            &self.due_date,
            &[&with_message("Due date cannot be in the past.", not_in_past)],
        );

        errors.into_result()
    }
}
