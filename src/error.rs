//! Error types for report generation.
//!
//! A missing image asset is deliberately not represented here: the
//! renderer omits the image and carries on (see [`crate::assets`]).

use thiserror::Error;

/// Errors surfaced when a report is requested.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The trip does not describe a positive billable mass; nothing is rendered.
    #[error("net weight must be greater than 0 to generate the report (got {net_weight:.3} t)")]
    Validation { net_weight: f64 },

    /// The PDF backend rejected the document.  The buffer is discarded.
    #[error("failed to render the report: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
