//! Report generation modules for the project listing
//!
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::SlnDepsError;
use crate::solution::Solution;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report describing the projects of a loaded solution
    fn generate_report(&self, solution: &Solution) -> Result<String, SlnDepsError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
