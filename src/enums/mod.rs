//! Closed vocabularies used by the entities, each carrying a stable
//! integer tag and display metadata.

mod industry;
mod skill_level;
mod status;
mod work_position;

pub use industry::Industry;
pub use skill_level::SkillLevel;
pub use status::Status;
pub use work_position::WorkPosition;

/// Display metadata shared by every entity enum.
///
/// `display_name` falls back to the bare variant identifier when no label
/// is registered; `description` falls back to the empty string.
pub trait EnumMeta {
    /// The bare variant identifier, e.g. `"RealEstate"`.
    fn variant_name(&self) -> &'static str;

    /// Human-readable label, if one is registered for the variant.
    fn label(&self) -> Option<&'static str> {
        None
    }

    /// Longer prose describing the variant. Empty unless registered.
    fn description(&self) -> &'static str {
        ""
    }

    /// The label, or the bare identifier when no label is registered.
    fn display_name(&self) -> &'static str {
        self.label().unwrap_or_else(|| self.variant_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Bare {
        Unlabeled,
    }

    impl EnumMeta for Bare {
        fn variant_name(&self) -> &'static str {
            "Unlabeled"
        }
    }

    #[test]
    fn display_name_falls_back_to_variant_name() {
        assert_eq!(Bare::Unlabeled.display_name(), "Unlabeled");
    }

    #[test]
    fn description_defaults_to_empty() {
        assert_eq!(Bare::Unlabeled.description(), "");
    }
}
