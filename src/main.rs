use std::{path::Path, process, sync::Arc};

use capitolato::{
    application::{error::AppError, export::ExportService, report::ReportService},
    config,
    domain::requirements::Intake,
    infra::{clock::SystemClock, error::InfraError, surface::SystemViewer, telemetry},
};
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match cli_args.command {
        config::Command::Render(args) => run_render(args).await,
        config::Command::Export(args) => run_export(settings, args).await,
        config::Command::Print(args) => run_print(settings, args).await,
    }
}

async fn run_render(args: config::RenderArgs) -> Result<(), AppError> {
    let intake = load_intake(&args.intake).await?;
    let report = ReportService::new(Arc::new(SystemClock));

    let rendered = report.generate(&intake.client, &intake.requirements)?;
    println!("{}", rendered.html);
    Ok(())
}

async fn run_export(settings: config::Settings, args: config::ExportArgs) -> Result<(), AppError> {
    let intake = load_intake(&args.intake).await?;
    let exports = build_export_service(&settings);

    info!(
        target = "capitolato::export",
        intake = %args.intake.display(),
        "Starting HTML export"
    );

    let path = exports
        .save_report(&intake.client, &intake.requirements)
        .await?;
    info!(
        target = "capitolato::export",
        path = %path.display(),
        "Export completed"
    );
    Ok(())
}

async fn run_print(settings: config::Settings, args: config::PrintArgs) -> Result<(), AppError> {
    let intake = load_intake(&args.intake).await?;
    let exports = build_export_service(&settings);

    info!(
        target = "capitolato::print",
        intake = %args.intake.display(),
        "Starting print export"
    );

    exports
        .print_report(&intake.client, &intake.requirements)
        .await?;
    info!(target = "capitolato::print", "Print export completed");
    Ok(())
}

fn build_export_service(settings: &config::Settings) -> ExportService {
    let report = ReportService::new(Arc::new(SystemClock));
    let viewer = Arc::new(SystemViewer::new(settings.export.viewer_command.clone()));
    ExportService::new(report, viewer, &settings.export)
}

async fn load_intake(path: &Path) -> Result<Intake, AppError> {
    let raw = tokio::fs::read(path)
        .await
        .map_err(|err| AppError::from(InfraError::Io(err)))?;

    serde_json::from_slice(&raw).map_err(|err| {
        AppError::validation(format!(
            "invalid intake file `{}`: {err}",
            path.display()
        ))
    })
}
