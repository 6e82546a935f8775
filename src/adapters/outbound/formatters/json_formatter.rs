use crate::application::read_models::{
    CriticalitySection, GraphReport, InstallOrderSection, PackageQuerySection,
};
use crate::graph_analysis::domain::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport {
    #[serde(rename = "serialNumber")]
    serial_number: String,
    metadata: Metadata,
    summary: Summary,
    #[serde(rename = "cycleDetected", skip_serializing_if = "Option::is_none")]
    cycle_detected: Option<bool>,
    #[serde(
        rename = "stronglyConnectedComponents",
        skip_serializing_if = "Option::is_none"
    )]
    strongly_connected_components: Option<Vec<Vec<String>>>,
    #[serde(rename = "installOrder", skip_serializing_if = "Option::is_none")]
    install_order: Option<InstallOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    criticality: Option<Criticality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<PackageQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    impact: Option<PackageQuery>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    timestamp: String,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Tool {
    name: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct Summary {
    #[serde(rename = "packageCount")]
    package_count: usize,
    #[serde(rename = "edgeCount")]
    edge_count: usize,
}

#[derive(Debug, Serialize)]
struct InstallOrder {
    resolvable: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    order: Vec<String>,
}

#[derive(Debug, Serialize)]
struct Criticality {
    critical: Vec<String>,
    #[serde(rename = "maxInDegree")]
    max_in_degree: usize,
    #[serde(rename = "inDegree")]
    in_degree: Vec<InDegreeEntry>,
}

#[derive(Debug, Serialize)]
struct InDegreeEntry {
    package: String,
    dependents: usize,
}

#[derive(Debug, Serialize)]
struct PackageQuery {
    package: String,
    known: bool,
    packages: Vec<String>,
}

/// JsonFormatter adapter for generating machine-readable analysis reports
///
/// This adapter implements the ReportFormatter port for JSON format.
/// Absent sections are omitted from the output rather than serialized as
/// null, so consumers can test for key presence.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &GraphReport, metadata: &ReportMetadata) -> Result<String> {
        let json_report = JsonReport {
            serial_number: metadata.serial_number().to_string(),
            metadata: self.build_metadata(metadata),
            summary: Summary {
                package_count: report.package_count,
                edge_count: report.edge_count,
            },
            cycle_detected: report.cycle_detected,
            strongly_connected_components: report.sccs.clone(),
            install_order: report.install_order.as_ref().map(Self::build_install_order),
            criticality: report.criticality.as_ref().map(Self::build_criticality),
            dependencies: report.dependencies.as_ref().map(Self::build_package_query),
            impact: report.impact.as_ref().map(Self::build_package_query),
        };

        serde_json::to_string_pretty(&json_report).map_err(Into::into)
    }
}

impl JsonFormatter {
    fn build_metadata(&self, metadata: &ReportMetadata) -> Metadata {
        Metadata {
            timestamp: metadata.generated_at().to_string(),
            tools: vec![Tool {
                name: metadata.tool_name().to_string(),
                version: metadata.tool_version().to_string(),
            }],
        }
    }

    fn build_install_order(section: &InstallOrderSection) -> InstallOrder {
        match section {
            InstallOrderSection::Ordered(order) => InstallOrder {
                resolvable: true,
                order: order.clone(),
            },
            InstallOrderSection::Unresolvable => InstallOrder {
                resolvable: false,
                order: Vec::new(),
            },
        }
    }

    fn build_criticality(section: &CriticalitySection) -> Criticality {
        Criticality {
            critical: section.critical.clone(),
            max_in_degree: section.max_in_degree,
            in_degree: section
                .in_degree
                .iter()
                .map(|(package, dependents)| InDegreeEntry {
                    package: package.clone(),
                    dependents: *dependents,
                })
                .collect(),
        }
    }

    fn build_package_query(section: &PackageQuerySection) -> PackageQuery {
        PackageQuery {
            package: section.package.clone(),
            known: section.known,
            packages: section.packages.clone(),
        }
    }
}
