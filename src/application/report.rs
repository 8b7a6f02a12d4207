//! Document renderer: questionnaire records in, a styled HTML report out.

use std::sync::Arc;

use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description};

use crate::domain::{
    filename::report_filename,
    phases::phase_description,
    requirements::{ClientInfo, ProjectRequirements},
};
use crate::infra::clock::Clock;
use crate::presentation::views::{
    ClientCard, PhaseRow, ReportContext, ReportTemplate, TemplateRenderError, render_template,
};

pub const HUMAN_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Template(#[from] TemplateRenderError),
    #[error("failed to format report date: {0}")]
    DateFormat(#[from] time::error::Format),
}

/// A rendered report together with its derived download filename.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub html: String,
    pub filename: String,
}

/// Renders requirements questionnaires into self-contained HTML documents.
///
/// The service is pure apart from the injected clock: identical records and
/// an identical clock reading produce byte-identical output.
#[derive(Clone)]
pub struct ReportService {
    clock: Arc<dyn Clock>,
}

impl ReportService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Render the report for saving or display.
    pub fn generate(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<RenderedReport, ReportError> {
        self.render(client, requirements, false)
    }

    /// Render the report with the auto-print hook appended, for handing to a
    /// display surface whose print facility fires on load.
    pub fn generate_printable(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<RenderedReport, ReportError> {
        self.render(client, requirements, true)
    }

    fn render(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
        auto_print: bool,
    ) -> Result<RenderedReport, ReportError> {
        let generated_on = self.clock.now().date().format(HUMAN_DATE_FORMAT)?;
        let view = build_view(client, requirements, generated_on, auto_print);
        let html = render_template(ReportTemplate { view })?;

        Ok(RenderedReport {
            html,
            filename: report_filename(&requirements.title),
        })
    }
}

fn build_view(
    client: &ClientInfo,
    requirements: &ProjectRequirements,
    generated_on: String,
    auto_print: bool,
) -> ReportContext {
    let technical = &requirements.technical_details;
    let timeline = &requirements.timeline;
    let ui = &requirements.ui_preferences;

    // The gateway is only meaningful when payments are requested; never read
    // it otherwise.
    let payment_processing = if technical.payments {
        match technical.payment_gateway.as_deref() {
            Some(gateway) => format!("Yes - {gateway}"),
            None => "Yes".to_string(),
        }
    } else {
        "Not Required".to_string()
    };

    let admin_dashboard = if technical.admin_dashboard {
        "Required"
    } else {
        "Not Required"
    };

    let development_approach = if timeline.mvp_first {
        "MVP First, then scale"
    } else {
        "Full development"
    };

    let phases = requirements
        .phases
        .iter()
        .map(|phase| PhaseRow {
            name: phase.name.clone(),
            duration: phase.duration.clone(),
            description: phase_description(&phase.name),
        })
        .collect();

    ReportContext {
        generated_on,
        client: ClientCard {
            name: client.name.clone(),
            company: client.company.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
        },
        title: requirements.title.clone(),
        problem_to_solve: requirements.problem_to_solve.clone(),
        target_users: requirements.target_users.clone(),
        description: requirements.description.clone(),
        goals: requirements.goals.clone(),
        core_features: requirements.core_features.clone(),
        data_fields: requirements.data_fields.clone(),
        admin_access: requirements.admin_access.clone(),
        file_uploads: requirements.file_uploads.clone(),
        design_inspiration: ui.design_inspiration.clone(),
        theme_mode: ui.theme_mode.clone(),
        animations: ui.animations.clone(),
        must_have_components: ui.must_have_components.clone(),
        hosting: technical.hosting.clone(),
        database: technical.database.clone(),
        admin_dashboard: admin_dashboard.to_string(),
        payment_processing,
        deadline: timeline.deadline.clone(),
        development_approach: development_approach.to_string(),
        budget: timeline.budget.clone(),
        phases,
        auto_print,
    }
}
