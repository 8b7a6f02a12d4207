//! Capitolato renders project-requirements questionnaires into styled,
//! self-contained HTML reports and exports them through the host's print or
//! file-save facilities.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
pub mod presentation;
