//! Export dispatcher: one-shot print and file-save actions over rendered
//! reports.
//!
//! Both operations are best-effort: the underlying failure is logged in full
//! and the caller sees a single per-path message. A caller observing a
//! failure should assume no artifact was produced (or, for print, that the
//! surface may remain open) and decide itself whether to retry.

use std::{path::PathBuf, sync::Arc, time::Duration};

use thiserror::Error;
use tokio::fs;
use tracing::{error, info};

use crate::application::report::{ReportError, ReportService};
use crate::config::ExportSettings;
use crate::domain::requirements::{ClientInfo, ProjectRequirements};
use crate::infra::surface::{SurfaceError, SurfaceOpener};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to generate PDF report")]
    Print,
    #[error("Failed to download HTML report")]
    Save,
}

#[derive(Debug, Error)]
enum ExportFlowError {
    #[error(transparent)]
    Render(#[from] ReportError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub struct ExportService {
    report: ReportService,
    opener: Arc<dyn SurfaceOpener>,
    output_dir: PathBuf,
    load_delay: Duration,
    dismiss_delay: Duration,
}

impl ExportService {
    pub fn new(
        report: ReportService,
        opener: Arc<dyn SurfaceOpener>,
        settings: &ExportSettings,
    ) -> Self {
        Self {
            report,
            opener,
            output_dir: settings.output_dir.clone(),
            load_delay: settings.load_delay,
            dismiss_delay: settings.dismiss_delay,
        }
    }

    /// Render the report and push it through the host's print facility.
    pub async fn print_report(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<(), ExportError> {
        self.print_flow(client, requirements).await.map_err(|err| {
            error!(target = "capitolato::export", error = %err, "print export failed");
            ExportError::Print
        })
    }

    /// Render the report and save it under its derived filename in the
    /// configured output directory.
    pub async fn save_report(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<PathBuf, ExportError> {
        self.save_flow(client, requirements).await.map_err(|err| {
            error!(target = "capitolato::export", error = %err, "html export failed");
            ExportError::Save
        })
    }

    async fn print_flow(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<(), ExportFlowError> {
        let report = self.report.generate_printable(client, requirements)?;

        let mut surface = self.opener.open(&report.html).await?;
        surface.wait_loaded(self.load_delay).await?;
        surface.print().await?;
        surface.wait_dismissed(self.dismiss_delay).await?;
        surface.close().await?;

        info!(
            target = "capitolato::export",
            filename = %report.filename,
            "print flow completed"
        );
        Ok(())
    }

    async fn save_flow(
        &self,
        client: &ClientInfo,
        requirements: &ProjectRequirements,
    ) -> Result<PathBuf, ExportFlowError> {
        let report = self.report.generate(client, requirements)?;

        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ExportFlowError::Write {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(&report.filename);
        fs::write(&path, report.html.as_bytes())
            .await
            .map_err(|source| ExportFlowError::Write {
                path: path.clone(),
                source,
            })?;

        info!(
            target = "capitolato::export",
            path = %path.display(),
            "wrote HTML report"
        );
        Ok(path)
    }
}
