use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::shared::Result;

/// GraphAnalysisPort - Inbound port for the dependency analysis use case
///
/// This port defines the interface that external adapters (CLI, API, etc.)
/// use to trigger an analysis run. It represents the application's public
/// API.
pub trait GraphAnalysisPort {
    /// Runs the analysis selected by the request against the dependency
    /// list it names
    ///
    /// # Arguments
    /// * `request` - Request parameters containing the input path and query
    ///
    /// # Returns
    /// A response carrying the populated report, run metadata, and the
    /// cycle flag
    ///
    /// # Errors
    /// Returns an error if:
    /// - The dependency list cannot be read or contains invalid names
    /// - An install order is requested for a cyclic graph
    fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse>;
}
