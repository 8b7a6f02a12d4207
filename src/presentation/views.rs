//! View models and templates for the rendered requirements report.
//!
//! All conditional phrasing (payments, dashboard, development approach) is
//! resolved by the application layer while assembling `ReportContext`; the
//! template itself only interpolates and iterates.

use askama::{Error as AskamaError, Template};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{origin}: {public_message}")]
pub struct TemplateRenderError {
    pub(crate) origin: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(origin: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            origin,
            public_message,
            error,
        }
    }
}

pub fn render_template<T: Template>(template: T) -> Result<String, TemplateRenderError> {
    template.render().map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
    })
}

#[derive(Clone)]
pub struct ClientCard {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
}

#[derive(Clone)]
pub struct PhaseRow {
    pub name: String,
    pub duration: String,
    pub description: &'static str,
}

#[derive(Clone)]
pub struct ReportContext {
    pub generated_on: String,
    pub client: ClientCard,
    pub title: String,
    pub problem_to_solve: String,
    pub target_users: String,
    pub description: String,
    pub goals: String,
    pub core_features: Vec<String>,
    pub data_fields: Vec<String>,
    pub admin_access: String,
    pub file_uploads: String,
    pub design_inspiration: String,
    pub theme_mode: String,
    pub animations: String,
    pub must_have_components: Vec<String>,
    pub hosting: String,
    pub database: String,
    pub admin_dashboard: String,
    pub payment_processing: String,
    pub deadline: String,
    pub development_approach: String,
    pub budget: String,
    pub phases: Vec<PhaseRow>,
    pub auto_print: bool,
}

#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate {
    pub view: ReportContext,
}
