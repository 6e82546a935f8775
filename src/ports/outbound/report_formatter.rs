use crate::application::read_models::GraphReport;
use crate::graph_analysis::domain::ReportMetadata;
use crate::shared::Result;

/// ReportFormatter port for rendering analysis output
///
/// This port abstracts the rendering of a populated analysis report into a
/// concrete output format (Markdown, JSON, etc.).
pub trait ReportFormatter {
    /// Formats the analysis report
    ///
    /// # Arguments
    /// * `report` - The populated analysis report read model
    /// * `metadata` - Run metadata (timestamp, tool info, serial number)
    ///
    /// # Returns
    /// Formatted report content as a string
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, report: &GraphReport, metadata: &ReportMetadata) -> Result<String>;
}
