//! Display-surface seam for the print export.
//!
//! The dispatcher drives a surface through open → loaded → print →
//! dismissed → close without knowing what the host actually is. The shipped
//! implementation hands the document to the platform's default HTML viewer;
//! tests substitute their own surface.

use std::{io::Write as _, path::PathBuf, time::Duration};

use async_trait::async_trait;
use tempfile::TempPath;
use thiserror::Error;
use tokio::process::{Child, Command};
use tracing::debug;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to open display surface: {message}")]
    Open { message: String },
    #[error("display surface rejected the document: {message}")]
    Print { message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl SurfaceError {
    pub fn open(message: impl Into<String>) -> Self {
        Self::Open {
            message: message.into(),
        }
    }

    pub fn print(message: impl Into<String>) -> Self {
        Self::Print {
            message: message.into(),
        }
    }
}

/// A display surface holding one rendered document.
#[async_trait]
pub trait PrintSurface: Send {
    /// Wait until the surface has finished loading the document.
    ///
    /// Hosts that expose no load-completion signal sleep `fallback` as a
    /// last resort; the delay is a heuristic, not synchronization.
    async fn wait_loaded(&mut self, fallback: Duration) -> Result<(), SurfaceError>;

    /// Invoke the host's print facility on the loaded document.
    async fn print(&mut self) -> Result<(), SurfaceError>;

    /// Wait for the print dialog to be dismissed. Same fallback contract as
    /// [`PrintSurface::wait_loaded`].
    async fn wait_dismissed(&mut self, fallback: Duration) -> Result<(), SurfaceError>;

    /// Close the surface and release any document handed to the host.
    async fn close(self: Box<Self>) -> Result<(), SurfaceError>;
}

/// Opens display surfaces for rendered documents.
#[async_trait]
pub trait SurfaceOpener: Send + Sync {
    async fn open(&self, html: &str) -> Result<Box<dyn PrintSurface>, SurfaceError>;
}

/// Hands documents to the platform's default HTML viewer.
///
/// The document is written to a temporary file and opened with the platform
/// launcher, or with a configured viewer command. A detached viewer exposes
/// no external print control, so the print dialog itself is driven by the
/// document's load hook; [`PrintSurface::print`] verifies the handoff took.
pub struct SystemViewer {
    command: Option<PathBuf>,
}

impl SystemViewer {
    pub fn new(command: Option<PathBuf>) -> Self {
        Self { command }
    }

    fn launcher(&self) -> Command {
        match &self.command {
            Some(path) => Command::new(path),
            None => default_launcher(),
        }
    }
}

#[cfg(target_os = "macos")]
fn default_launcher() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn default_launcher() -> Command {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("start").arg("");
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn default_launcher() -> Command {
    Command::new("xdg-open")
}

#[async_trait]
impl SurfaceOpener for SystemViewer {
    async fn open(&self, html: &str) -> Result<Box<dyn PrintSurface>, SurfaceError> {
        let mut file = tempfile::Builder::new()
            .prefix("capitolato-report-")
            .suffix(".html")
            .tempfile()?;
        file.write_all(html.as_bytes())?;
        file.flush()?;
        let document = file.into_temp_path();

        let child = self
            .launcher()
            .arg(document.as_os_str())
            .spawn()
            .map_err(|err| SurfaceError::open(format!("failed to launch viewer: {err}")))?;

        Ok(Box::new(SystemViewerSurface {
            child,
            document: Some(document),
        }))
    }
}

struct SystemViewerSurface {
    child: Child,
    document: Option<TempPath>,
}

#[async_trait]
impl PrintSurface for SystemViewerSurface {
    async fn wait_loaded(&mut self, fallback: Duration) -> Result<(), SurfaceError> {
        // A detached launcher reports nothing back once it hands off.
        tokio::time::sleep(fallback).await;
        Ok(())
    }

    async fn print(&mut self) -> Result<(), SurfaceError> {
        if let Some(status) = self.child.try_wait()? {
            if !status.success() {
                return Err(SurfaceError::print(format!(
                    "viewer exited with {status} before printing"
                )));
            }
        }
        debug!(target = "capitolato::surface", "print handoff confirmed");
        Ok(())
    }

    async fn wait_dismissed(&mut self, fallback: Duration) -> Result<(), SurfaceError> {
        tokio::time::sleep(fallback).await;
        Ok(())
    }

    async fn close(mut self: Box<Self>) -> Result<(), SurfaceError> {
        if let Some(document) = self.document.take() {
            document.close()?;
        }
        Ok(())
    }
}
