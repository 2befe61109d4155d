use std::fmt;

use super::EnumMeta;

/// Job position of an agency team member. The only enum that carries a
/// prose description per variant, used by the team directory views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[repr(i32)]
pub enum WorkPosition {
    ProjectManager = 1,
    AccountManager = 2,
    MarketingStrategist = 3,
    GraphicDesigner = 4,
    Copywriter = 5,
    MarketingSpecialist = 6,
}

impl WorkPosition {
    pub const ALL: [WorkPosition; 6] = [
        WorkPosition::ProjectManager,
        WorkPosition::AccountManager,
        WorkPosition::MarketingStrategist,
        WorkPosition::GraphicDesigner,
        WorkPosition::Copywriter,
        WorkPosition::MarketingSpecialist,
    ];
}

impl Default for WorkPosition {
    fn default() -> Self {
        WorkPosition::ProjectManager
    }
}

impl EnumMeta for WorkPosition {
    fn variant_name(&self) -> &'static str {
        match self {
            WorkPosition::ProjectManager => "ProjectManager",
            WorkPosition::AccountManager => "AccountManager",
            WorkPosition::MarketingStrategist => "MarketingStrategist",
            WorkPosition::GraphicDesigner => "GraphicDesigner",
            WorkPosition::Copywriter => "Copywriter",
            WorkPosition::MarketingSpecialist => "MarketingSpecialist",
        }
    }

    fn label(&self) -> Option<&'static str> {
        Some(match self {
            WorkPosition::ProjectManager => "Project Manager",
            WorkPosition::AccountManager => "Account Manager",
            WorkPosition::MarketingStrategist => "Marketing Strategist",
            WorkPosition::GraphicDesigner => "Graphic Designer",
            WorkPosition::Copywriter => "Copywriter",
            WorkPosition::MarketingSpecialist => "Marketing Specialist",
        })
    }

    fn description(&self) -> &'static str {
        match self {
            WorkPosition::ProjectManager => {
                "Manages and coordinates all aspects of the project. Ensures the team \
                 meets deadlines, allocates resources, and communicates with management \
                 and clients to ensure successful project execution."
            }
            WorkPosition::AccountManager => {
                "Builds and maintains relationships with clients. Listens to their \
                 needs, provides regular updates on project progress, and ensures the \
                 team meets the client's expectations and goals."
            }
            WorkPosition::MarketingStrategist => {
                "Develops marketing strategies for campaigns based on market analysis \
                 and client needs. Defines goals, target segments, and key tactics to \
                 achieve campaign results."
            }
            WorkPosition::GraphicDesigner => {
                "Creates visual elements of the campaign, including graphics for social \
                 media, advertisements, and other materials. Works according to team \
                 assignments and follows the client's visual identity."
            }
            WorkPosition::Copywriter => {
                "Writes texts for campaigns, including slogans, advertising copy, and \
                 social media posts. Collaborates with designers and strategists to \
                 ensure the campaign content is consistent and persuasive."
            }
            WorkPosition::MarketingSpecialist => {
                "Carries out specific marketing tasks according to the strategist's \
                 instructions. May specialize in individual channels such as social \
                 media, SEO, PPC campaigns, and contributes to the overall \
                 effectiveness of the campaign."
            }
        }
    }
}

impl fmt::Display for WorkPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_project_manager() {
        assert_eq!(WorkPosition::default(), WorkPosition::ProjectManager);
    }

    #[test]
    fn tags_are_stable() {
        assert_eq!(WorkPosition::ProjectManager as i32, 1);
        assert_eq!(WorkPosition::MarketingSpecialist as i32, 6);
    }

    #[test]
    fn every_position_has_a_label_and_description() {
        for position in WorkPosition::ALL {
            assert!(position.label().is_some());
            assert!(!position.description().is_empty());
        }
    }

    #[test]
    fn labels_split_camel_case_identifiers() {
        assert_eq!(WorkPosition::ProjectManager.display_name(), "Project Manager");
        assert_eq!(WorkPosition::GraphicDesigner.to_string(), "Graphic Designer");
    }
}
