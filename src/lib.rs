//! Core entry point for the trip-report crate.
//!
//! A [`model::TripRecord`] describes one weighbridge trip.  The
//! [`metrics`] module derives the net weight and the estimated
//! environmental savings from it, and [`render::ReportRenderer`] turns
//! both into a fixed-layout PDF document.

pub mod assets;
pub mod error;
pub mod format;
pub mod layout;
pub mod metrics;
pub mod model;
pub mod render;

pub use error::ReportError;
pub use model::TripRecord;
pub use render::{RenderedReport, ReportRenderer};
