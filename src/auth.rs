//! Identity plumbing for the embedding application: the sign-in account a
//! team member wraps, the session handed in by the web layer, and the
//! accessor that turns a session into a loaded [`TeamMember`] or a
//! redirect.

use tracing::warn;
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::TeamMember;

/// Where the accessor sends a request whose user cannot be loaded.
pub const INVALID_USER_REDIRECT: &str = "account/invalid-user";

/// A sign-in account. Credential handling (password hashing, email
/// confirmation flows) belongs to the identity framework around this
/// crate; only the stored shape lives here.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserAccount {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub email_confirmed: bool,
    pub password_hash: Option<String>,
}

impl UserAccount {
    /// A fresh, unconfirmed account with a generated id.
    pub fn new(user_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_name: user_name.into(),
            email: email.into(),
            email_confirmed: false,
            password_hash: None,
        }
    }
}

/// What the session layer knows about the current request.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub user_id: Option<String>,
}

impl AuthSession {
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }
}

/// A redirect target plus the status message to show after following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRedirect {
    pub target: String,
    pub message: String,
}

impl StatusRedirect {
    pub fn invalid_user(user_id: &str) -> Self {
        Self {
            target: INVALID_USER_REDIRECT.to_string(),
            message: format!("Unable to load user with ID '{user_id}'."),
        }
    }
}

/// Resolves a sign-in account id to the team member behind it.
#[allow(async_fn_in_trait)]
pub trait TeamMemberLookup {
    async fn team_member_by_id(&self, id: &str) -> Result<Option<TeamMember>>;
}

/// Loads the team member behind the current session. A session that is
/// anonymous, or whose id no longer resolves, becomes a redirect for the
/// web layer to follow rather than an error page.
pub struct UserAccessor<S> {
    source: S,
}

impl<S: TeamMemberLookup> UserAccessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The team member for the current session, or [`Error::Redirect`]
    /// pointing at the invalid-user page.
    pub async fn require_user(&self, session: &AuthSession) -> Result<TeamMember> {
        let user_id = session.user_id.as_deref().unwrap_or_default();
        let member = if user_id.is_empty() {
            None
        } else {
            self.source.team_member_by_id(user_id).await?
        };

        member.ok_or_else(|| {
            warn!(user_id, "session user could not be loaded");
            Error::Redirect(StatusRedirect::invalid_user(user_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    struct FixedDirectory {
        members: HashMap<String, TeamMember>,
    }

    impl FixedDirectory {
        fn with(member: TeamMember) -> Self {
            let mut members = HashMap::new();
            members.insert(member.id().to_string(), member);
            Self { members }
        }
    }

    impl TeamMemberLookup for FixedDirectory {
        async fn team_member_by_id(&self, id: &str) -> Result<Option<TeamMember>> {
            Ok(self.members.get(id).cloned())
        }
    }

    fn sample_member() -> TeamMember {
        TeamMember::new(
            UserAccount::new("kdvorak", "klara.dvorak@agency.example"),
            "Klára",
            "Dvořák",
            NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        )
    }

    #[tokio::test]
    async fn require_user_returns_the_member_behind_the_session() {
        let member = sample_member();
        let id = member.id().to_string();
        let accessor = UserAccessor::new(FixedDirectory::with(member));

        let loaded = accessor
            .require_user(&AuthSession::authenticated(&id))
            .await
            .unwrap();

        assert_eq!(loaded.id(), id);
        assert_eq!(loaded.user_name(), "kdvorak");
    }

    #[tokio::test]
    async fn anonymous_session_redirects_to_the_invalid_user_page() {
        let accessor = UserAccessor::new(FixedDirectory::with(sample_member()));

        let err = accessor
            .require_user(&AuthSession::anonymous())
            .await
            .unwrap_err();

        match err {
            Error::Redirect(redirect) => {
                assert_eq!(redirect.target, INVALID_USER_REDIRECT);
                assert_eq!(redirect.message, "Unable to load user with ID ''.");
            }
            other => panic!("expected a redirect, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_id_redirects_with_the_id_in_the_message() {
        let accessor = UserAccessor::new(FixedDirectory::with(sample_member()));

        let err = accessor
            .require_user(&AuthSession::authenticated("missing-id"))
            .await
            .unwrap_err();

        match err {
            Error::Redirect(redirect) => {
                assert_eq!(redirect.target, INVALID_USER_REDIRECT);
                assert_eq!(
                    redirect.message,
                    "Unable to load user with ID 'missing-id'."
                );
            }
            other => panic!("expected a redirect, got {other:?}"),
        }
    }
}
