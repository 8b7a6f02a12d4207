//! Infrastructure adapters and host seams.

pub mod clock;
pub mod error;
pub mod surface;
pub mod telemetry;
