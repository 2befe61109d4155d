//! Core domain for an advertising agency's task manager: the clients the
//! agency works for, the tasks run for them, and the team members the
//! tasks are assigned to.
//!
//! Records validate themselves through per-field validator lists (see
//! [`validation`]) and every failure is reported at once. Task status is
//! a one-way street: an active task can close, a closed task never
//! reopens. Deleting a client takes its tasks with it; deleting a team
//! member only releases their assignments.
//!
//! Persistence lives in [`db::Database`] over a Postgres pool. The web,
//! identity and mail surfaces around this crate plug in through
//! [`auth::UserAccessor`] and [`mailer::EmailSender`].

pub mod auth;
pub mod config;
pub mod db;
pub mod enums;
pub mod error;
pub mod mailer;
pub mod models;
pub mod validation;

pub use enums::{EnumMeta, Industry, SkillLevel, Status, WorkPosition};
pub use error::{Error, Result};
pub use models::{Client, TaskItem, TeamMember};
pub use validation::{Validate, ValidationErrors};
