use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;

use crate::auth::UserAccount;
use crate::enums::{SkillLevel, WorkPosition};
use crate::validation::rules::{
    max_length, minimum_age, pattern, required, starts_with_uppercase, with_message,
};
use crate::validation::{Validate, ValidationErrors};

/// Letters (including accented), with single spaces, hyphens or
/// apostrophes between name parts.
static PERSON_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Zá-žÁ-Ž]+([ '-][a-zA-Zá-žÁ-Ž]+)*$").expect("person name pattern")
});

/// An agency employee. Wraps the sign-in account rather than extending
/// it; the identity fields are reached through `account` or the
/// delegating accessors below.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct TeamMember {
    #[sqlx(flatten)]
    pub account: UserAccount,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub work_position: WorkPosition,
    pub skill_level: SkillLevel,
    registration_date: DateTime<Utc>,
}

impl TeamMember {
    /// Create a new team member around an existing account. The
    /// registration date is stamped here and never changes afterwards.
    pub fn new(
        account: UserAccount,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Self {
        Self {
            account,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            work_position: WorkPosition::default(),
            skill_level: SkillLevel::default(),
            registration_date: Utc::now(),
        }
    }

    /// Account id of the member.
    pub fn id(&self) -> &str {
        &self.account.id
    }

    /// Sign-in name of the member.
    pub fn user_name(&self) -> &str {
        &self.account.user_name
    }

    /// Account email of the member.
    pub fn email(&self) -> &str {
        &self.account.email
    }

    /// When the member joined the agency.
    pub fn registration_date(&self) -> DateTime<Utc> {
        self.registration_date
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Validate for TeamMember {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.field(
            "first_name",
            self.first_name.as_str(),
            &[
                &with_message("First name is required.", required),
                &with_message(
                    "First name can have a maximum of 100 characters.",
                    max_length(100),
                ),
                &with_message(
                    "First name contains invalid characters.",
                    pattern(&PERSON_NAME_RE),
                ),
                &with_message(
                    "First name must start with an uppercase letter.",
                    starts_with_uppercase,
                ),
            ],
        );

        errors.field(
            "last_name",
            self.last_name.as_str(),
            &[
                &with_message("Last name is required.", required),
                &with_message(
                    "Last name can have a maximum of 100 characters.",
                    max_length(100),
                ),
                &with_message(
                    "Last name contains invalid characters.",
                    pattern(&PERSON_NAME_RE),
                ),
                &with_message(
                    "Last name must start with an uppercase letter.",
                    starts_with_uppercase,
                ),
            ],
        );

        errors.field(
            "birth_date",
            &self.birth_date,
            &[&with_message(
                "Team member must be at least 18 years old.",
                minimum_age(18),
            )],
        );

        errors.into_result()
    }
}
