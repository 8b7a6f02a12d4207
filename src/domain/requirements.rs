//! Intake records for the requirements questionnaire.
//!
//! Both records arrive fully populated from the collecting frontend; this
//! crate performs no validation beyond deserialization. Wire field names are
//! camelCase to match the questionnaire payload.

use serde::{Deserialize, Serialize};

/// The full intake payload: both records exactly as the collecting frontend
/// submits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intake {
    pub client: ClientInfo,
    pub requirements: ProjectRequirements,
}

/// Contact information of the person requesting the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

/// The full structured questionnaire describing a software project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequirements {
    pub title: String,
    pub problem_to_solve: String,
    pub description: String,
    pub target_users: String,
    pub goals: String,
    pub core_features: Vec<String>,
    pub data_fields: Vec<String>,
    pub admin_access: String,
    pub file_uploads: String,
    pub ui_preferences: UiPreferences,
    pub technical_details: TechnicalDetails,
    pub timeline: Timeline,
    pub phases: Vec<ProjectPhase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiPreferences {
    pub design_inspiration: String,
    pub theme_mode: String,
    pub animations: String,
    pub must_have_components: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicalDetails {
    pub hosting: String,
    pub database: String,
    pub admin_dashboard: bool,
    pub payments: bool,
    /// Meaningful only when `payments` is true; consumers must branch on the
    /// flag before reading this.
    #[serde(default)]
    pub payment_gateway: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub deadline: String,
    pub budget: String,
    pub mvp_first: bool,
}

/// A named stage of project delivery with its estimated duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPhase {
    pub name: String,
    pub duration: String,
}
