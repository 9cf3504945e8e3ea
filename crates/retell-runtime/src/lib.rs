//! Reconstruction pipeline runtime.
//!
//! The orchestrator sequences validation, generative reconstruction,
//! and contextual search over the backend capability traits; the
//! report module renders the assembled result for console output.

pub mod orchestrator;
pub mod report;
pub mod types;

pub use orchestrator::Orchestrator;
pub use report::{format_report, format_report_at};
pub use types::ReconstructionResult;
