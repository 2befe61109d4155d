use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::enums::Industry;
use crate::validation::rules::{
    email, max_length, pattern, phone, required, starts_with_uppercase, with_message,
};
use crate::validation::{Validate, ValidationErrors};

/// Letters (including accented), with single spaces, hyphens or
/// apostrophes between name parts.
static CONTACT_PERSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Zá-žÁ-Ž]+([ '-][a-zA-Zá-žÁ-Ž]+)*$").expect("contact person pattern")
});

/// A client company the agency runs campaigns for.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub industry: Industry,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    start_date: DateTime<Utc>,
    pub project_manager_id: Option<String>,
}

impl Client {
    /// Create a new client. The cooperation start date is stamped here
    /// and never changes afterwards.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        contact_person: impl Into<String>,
        contact_email: impl Into<String>,
        contact_phone: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            industry: Industry::default(),
            contact_person: contact_person.into(),
            contact_email: contact_email.into(),
            contact_phone: contact_phone.into(),
            start_date: Utc::now(),
            project_manager_id: None,
        }
    }

    /// When the cooperation with this client began.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }
}

impl Validate for Client {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.field(
            "name",
            self.name.as_str(),
            &[
                &with_message("Client name is required.", required),
                &with_message(
                    "Client name can have a maximum of 200 characters.",
                    max_length(200),
                ),
                &with_message(
                    "Client name must start with an uppercase letter.",
                    starts_with_uppercase,
                ),
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
            ],
        );

        errors.field(
            "contact_person",
            self.contact_person.as_str(),
            &[
                &with_message("Contact person is required.", required),
                &with_message(
                    "Contact person name can have a maximum of 100 characters.",
                    max_length(100),
                ),
                &with_message(
                    "Contact person name contains invalid characters.",
                    pattern(&CONTACT_PERSON_RE),
                ),
                &with_message(
                    "Contact person name must start with an uppercase letter.",
                    starts_with_uppercase,
                ),
            ],
        );

        errors.field(
            "contact_email",
            self.contact_email.as_str(),
            &[
                &with_message("Contact email is required.", required),
                &with_message("Invalid email address.", email),
            ],
        );

        errors.field(
            "contact_phone",
            self.contact_phone.as_str(),
            &[
                &with_message("Contact phone is required.", required),
                &with_message("Enter the phone number in the correct format.", phone),
            ],
        );

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_client() -> Client {
        Client::new(
            "Northwind Media",
            "Full-service campaigns for a retail chain.",
            "Anna Svoboda",
            "anna.svoboda@northwind.example",
            "+420 601 234 567",
        )
    }

    #[test]
    fn valid_client_passes_validation() {
        assert!(sample_client().validate().is_ok());
    }

    #[test]
    fn new_client_defaults() {
        let client = sample_client();
        assert_eq!(client.industry, Industry::Technology);
        assert!(client.project_manager_id.is_none());
        let age = Utc::now() - client.start_date();
        assert!(age.num_seconds() < 5);
    }

    #[test]
    fn lowercase_name_is_rejected_with_the_field_message() {
        let mut client = sample_client();
        client.name = "northwind Media".into();

        let errors = client.validate().unwrap_err();
        assert_eq!(
            errors.messages_for("name").collect::<Vec<_>>(),
            vec!["Client name must start with an uppercase letter."]
        );
    }

    #[test]
    fn blank_fields_are_all_reported_at_once() {
        let client = Client::new("", "", "", "", "");
        let errors = client.validate().unwrap_err();

        for field in [
            "name",
            "description",
            "contact_person",
            "contact_email",
            "contact_phone",
        ] {
            assert!(errors.contains(field), "expected an error for {field}");
        }
    }

    #[test]
    fn contact_person_rejects_digits() {
        let mut client = sample_client();
        client.contact_person = "Anna 2".into();

        let errors = client.validate().unwrap_err();
        assert!(
            errors
                .messages_for("contact_person")
                .any(|m| m == "Contact person name contains invalid characters.")
        );
    }

    #[test]
    fn contact_person_allows_hyphens_and_apostrophes() {
        let mut client = sample_client();
        client.contact_person = "Marie-Anne O'Brien".into();
        assert!(client.validate().is_ok());
    }

    #[test]
    fn malformed_email_and_phone_are_rejected() {
        let mut client = sample_client();
        client.contact_email = "not-an-email".into();
        client.contact_phone = "call me".into();

        let errors = client.validate().unwrap_err();
        assert_eq!(
            errors.messages_for("contact_email").collect::<Vec<_>>(),
            vec!["Invalid email address."]
        );
        assert_eq!(
            errors.messages_for("contact_phone").collect::<Vec<_>>(),
            vec!["Enter the phone number in the correct format."]
        );
    }

    #[test]
    fn name_length_is_capped_at_200() {
        let mut client = sample_client();
        client.name = format!("A{}", "b".repeat(200));

        let errors = client.validate().unwrap_err();
        assert_eq!(
            errors.messages_for("name").collect::<Vec<_>>(),
            vec!["Client name can have a maximum of 200 characters."]
        );
    }
}
