//! Descriptions for the well-known delivery phases.

const REQUIREMENT_ANALYSIS: &str = "Detailed analysis of project requirements, stakeholder interviews, and technical feasibility study.";
const UI_UX_DESIGN: &str = "User interface design, user experience optimization, wireframing, and prototype development.";
const DEVELOPMENT: &str =
    "Core application development, feature implementation, and integration of all components.";
const TESTING: &str = "Comprehensive testing including unit tests, integration tests, and user acceptance testing.";
const DEPLOYMENT: &str = "Production deployment, final configuration, and go-live activities.";
const FALLBACK: &str = "Project phase execution and deliverable completion.";

/// Resolve a phase name to its descriptive sentence.
///
/// The match is exact and case-sensitive; any unrecognized name resolves to
/// the generic fallback.
pub fn phase_description(name: &str) -> &'static str {
    match name {
        "Requirement Analysis" => REQUIREMENT_ANALYSIS,
        "UI/UX Design" => UI_UX_DESIGN,
        "Development" => DEVELOPMENT,
        "Testing" => TESTING,
        "Deployment" => DEPLOYMENT,
        _ => FALLBACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_phases_resolve_to_fixed_descriptions() {
        assert_eq!(phase_description("Testing"), TESTING);
        assert_eq!(phase_description("Deployment"), DEPLOYMENT);
        assert_eq!(phase_description("Requirement Analysis"), REQUIREMENT_ANALYSIS);
    }

    #[test]
    fn unknown_phase_falls_back_to_generic_description() {
        assert_eq!(phase_description("Prototyping"), FALLBACK);
        assert_eq!(phase_description(""), FALLBACK);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(phase_description("testing"), FALLBACK);
        assert_eq!(phase_description("TESTING"), FALLBACK);
    }
}
