use crate::application::dto::{AnalysisQuery, AnalysisRequest, AnalysisResponse};
use crate::application::read_models::{
    CriticalitySection, GraphReport, InstallOrderSection, PackageQuerySection,
};
use crate::graph_analysis::domain::{DependencyGraph, PackageName, ReportMetadata};
use crate::graph_analysis::services::{
    CriticalityAnalyzer, CycleDetector, DependencyQuery, ImpactSimulator, InstallSequencer,
    SccFinder,
};
use crate::ports::inbound::GraphAnalysisPort;
use crate::ports::outbound::{DependencySource, ProgressReporter};
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

/// AnalyzeGraphUseCase - Core use case for dependency graph analysis
///
/// This use case orchestrates the analysis workflow using generic
/// dependency injection for all infrastructure dependencies: load the
/// dependency list, build the immutable graph, run the analyses selected
/// by the request, and assemble the report read model.
///
/// # Type Parameters
/// * `DS` - DependencySource implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeGraphUseCase<DS, PR> {
    dependency_source: DS,
    progress_reporter: PR,
}

impl<DS, PR> AnalyzeGraphUseCase<DS, PR>
where
    DS: DependencySource,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeGraphUseCase with injected dependencies
    pub fn new(dependency_source: DS, progress_reporter: PR) -> Self {
        Self {
            dependency_source,
            progress_reporter,
        }
    }

    /// Executes the analysis use case
    ///
    /// # Arguments
    /// * `request` - Analysis request containing the input path and query
    ///
    /// # Returns
    /// AnalysisResponse containing the populated report, run metadata, and
    /// the cycle flag
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading dependency list from: {}",
            request.input_path.display()
        ));

        let records = self
            .dependency_source
            .read_dependency_list(&request.input_path)?;
        let graph = DependencyGraph::from_records(&records)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} package(s) and {} dependency edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));

        // Always computed: cheap, and CI callers key the exit code off it.
        let cycle_detected = CycleDetector::has_cycle(&graph);
        if cycle_detected {
            self.progress_reporter
                .report_error("⚠️  Warning: the dependency graph contains a cycle");
        }

        let report = self.build_report(&graph, &request.query, cycle_detected)?;
        let metadata = Self::build_metadata();

        self.progress_reporter
            .report_completion("✅ Analysis complete");

        Ok(AnalysisResponse::new(report, metadata, cycle_detected))
    }

    /// Populates the report sections the query asked for
    fn build_report(
        &self,
        graph: &DependencyGraph,
        query: &AnalysisQuery,
        cycle_detected: bool,
    ) -> Result<GraphReport> {
        let mut report = GraphReport::new(graph.package_count(), graph.edge_count());

        match query {
            AnalysisQuery::Check => {
                report.cycle_detected = Some(cycle_detected);
            }
            AnalysisQuery::InstallOrder => {
                let order = InstallSequencer::install_order(graph)?;
                report.install_order = Some(InstallOrderSection::Ordered(names(&order)));
            }
            AnalysisQuery::Sccs => {
                report.sccs = Some(scc_names(&SccFinder::find_sccs(graph)));
            }
            AnalysisQuery::Critical => {
                report.criticality = Some(criticality_section(graph));
            }
            AnalysisQuery::Dependencies(package) => {
                report.dependencies = Some(package_query(graph, package, |g, p| {
                    DependencyQuery::dependencies_of(g, p)
                }));
            }
            AnalysisQuery::Impact(package) => {
                report.impact = Some(package_query(graph, package, |g, p| {
                    ImpactSimulator::simulate_removal(g, p)
                }));
            }
            AnalysisQuery::Full => {
                report.cycle_detected = Some(cycle_detected);
                report.sccs = Some(scc_names(&SccFinder::find_sccs(graph)));
                report.install_order = Some(match InstallSequencer::install_order(graph) {
                    Ok(order) => InstallOrderSection::Ordered(names(&order)),
                    Err(_) => InstallOrderSection::Unresolvable,
                });
                report.criticality = Some(criticality_section(graph));
            }
        }

        Ok(report)
    }

    fn build_metadata() -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            format!("urn:uuid:{}", Uuid::new_v4()),
        )
    }
}

impl<DS, PR> GraphAnalysisPort for AnalyzeGraphUseCase<DS, PR>
where
    DS: DependencySource,
    PR: ProgressReporter,
{
    fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        AnalyzeGraphUseCase::execute(self, request)
    }
}

fn names(packages: &[PackageName]) -> Vec<String> {
    packages.iter().map(|p| p.as_str().to_string()).collect()
}

fn scc_names(components: &[Vec<PackageName>]) -> Vec<Vec<String>> {
    components.iter().map(|c| names(c)).collect()
}

fn criticality_section(graph: &DependencyGraph) -> CriticalitySection {
    let report = CriticalityAnalyzer::critical_packages(graph);
    CriticalitySection {
        critical: names(report.critical()),
        max_in_degree: report.max_in_degree(),
        in_degree: report
            .in_degree()
            .iter()
            .map(|(name, count)| (name.as_str().to_string(), *count))
            .collect(),
    }
}

/// Runs a per-package reachability query. A name that fails validation can
/// never appear in a graph, so it is treated the same as an unknown
/// package: an empty result, not an error.
fn package_query(
    graph: &DependencyGraph,
    package: &str,
    query: impl Fn(&DependencyGraph, &PackageName) -> Vec<PackageName>,
) -> PackageQuerySection {
    match PackageName::new(package.to_string()) {
        Ok(name) => PackageQuerySection {
            package: package.to_string(),
            known: graph.contains(&name),
            packages: names(&query(graph, &name)),
        },
        Err(_) => PackageQuerySection {
            package: package.to_string(),
            known: false,
            packages: Vec::new(),
        },
    }
}
