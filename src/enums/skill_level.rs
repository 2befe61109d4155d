use std::fmt;

use super::EnumMeta;

/// Experience level of an agency team member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum SkillLevel {
    Junior = 1,
    Intermediate = 2,
    Senior = 3,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Junior,
        SkillLevel::Intermediate,
        SkillLevel::Senior,
    ];
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Junior
    }
}

impl EnumMeta for SkillLevel {
    fn variant_name(&self) -> &'static str {
        match self {
            SkillLevel::Junior => "Junior",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Senior => "Senior",
        }
    }

    fn label(&self) -> Option<&'static str> {
        Some(self.variant_name())
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_junior() {
        assert_eq!(SkillLevel::default(), SkillLevel::Junior);
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(SkillLevel::Junior as i32, 1);
        assert_eq!(SkillLevel::Intermediate as i32, 2);
        assert_eq!(SkillLevel::Senior as i32, 3);
    }

    #[test]
    fn label_matches_identifier() {
        assert_eq!(SkillLevel::Senior.display_name(), "Senior");
    }
}
