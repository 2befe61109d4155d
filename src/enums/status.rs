use std::fmt;

use super::EnumMeta;

/// Lifecycle status of a task. `Closed` is terminal: once a task reaches
/// it, no further status change is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum Status {
    Active = 1,
    Closed = 2,
}

impl Status {
    pub const ALL: [Status; 2] = [Status::Active, Status::Closed];

    pub fn is_closed(&self) -> bool {
        matches!(self, Status::Closed)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Active
    }
}

impl EnumMeta for Status {
    fn variant_name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Closed => "Closed",
        }
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.variant_name())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_active() {
        assert_eq!(Status::default(), Status::Active);
    }

    #[test]
    fn closed_is_the_terminal_state() {
        assert!(!Status::Active.is_closed());
        assert!(Status::Closed.is_closed());
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(Status::Active as i32, 1);
        assert_eq!(Status::Closed as i32, 2);
    }
}
