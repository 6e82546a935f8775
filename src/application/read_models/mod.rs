/// Read models - query-optimized views of analysis results
mod graph_report;

pub use graph_report::{
    CriticalitySection, GraphReport, InstallOrderSection, PackageQuerySection,
};
