use crate::application::read_models::GraphReport;
use crate::graph_analysis::domain::ReportMetadata;

/// AnalysisResponse - Internal response DTO from the analysis use case
///
/// This DTO contains the populated report read model, which adapters can
/// then format into the appropriate output format.
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    /// The populated analysis report
    pub report: GraphReport,
    /// Run metadata (timestamp, tool info, serial number)
    pub metadata: ReportMetadata,
    /// Whether the graph contains a dependency cycle
    /// Used to determine exit code for CI integration
    pub cycle_detected: bool,
}

impl AnalysisResponse {
    pub fn new(report: GraphReport, metadata: ReportMetadata, cycle_detected: bool) -> Self {
        Self {
            report,
            metadata,
            cycle_detected,
        }
    }
}
