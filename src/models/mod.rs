mod client;
mod task_item;
mod team_member;

pub use client::Client;
pub use task_item::TaskItem;
pub use team_member::TeamMember;
