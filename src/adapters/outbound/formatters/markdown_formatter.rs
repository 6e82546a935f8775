use crate::application::read_models::{
    CriticalitySection, GraphReport, InstallOrderSection, PackageQuerySection,
};
use crate::graph_analysis::domain::ReportMetadata;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for the in-degree table
const IN_DEGREE_TABLE_HEADER: &str = "| Package | Dependents |\n";

/// Markdown table separator line
const IN_DEGREE_TABLE_SEPARATOR: &str = "|---------|------------|\n";

/// MarkdownFormatter adapter for generating human-readable analysis reports
///
/// This adapter implements the ReportFormatter port for Markdown format.
/// Only the sections the report actually carries are rendered.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    /// Renders the header and summary section
    fn render_header(&self, output: &mut String, report: &GraphReport, metadata: &ReportMetadata) {
        output.push_str("# Dependency Graph Report\n\n");
        output.push_str(&format!(
            "Generated at {} by {} {}.\n\n",
            metadata.generated_at(),
            metadata.tool_name(),
            metadata.tool_version()
        ));
        output.push_str(&format!(
            "**{} {}, {} {}.**\n\n",
            report.package_count,
            if report.package_count == 1 {
                "package"
            } else {
                "packages"
            },
            report.edge_count,
            if report.edge_count == 1 {
                "dependency edge"
            } else {
                "dependency edges"
            }
        ));
    }

    /// Renders the cycle check section
    fn render_cycle_check(&self, output: &mut String, cycle_detected: bool) {
        output.push_str("## Cycle Check\n\n");
        if cycle_detected {
            output.push_str("⚠️ The dependency graph contains at least one cycle.\n\n");
        } else {
            output.push_str("✅ No cycles detected.\n\n");
        }
    }

    /// Renders the strongly connected components section
    fn render_sccs(&self, output: &mut String, sccs: &[Vec<String>]) {
        output.push_str("## Strongly Connected Components\n\n");

        let cyclic: Vec<&Vec<String>> = sccs.iter().filter(|c| c.len() > 1).collect();
        if cyclic.is_empty() {
            output.push_str("All components are singletons; no mutual dependencies exist.\n\n");
        } else {
            output.push_str(&format!(
                "Found {} {} with mutually dependent packages:\n\n",
                cyclic.len(),
                if cyclic.len() == 1 {
                    "component"
                } else {
                    "components"
                }
            ));
            for component in &cyclic {
                output.push_str(&format!(
                    "- {}\n",
                    component
                        .iter()
                        .map(|n| Self::escape_markdown_table_cell(n))
                        .collect::<Vec<_>>()
                        .join(", ")
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!(
            "Total components (singletons included): {}\n\n",
            sccs.len()
        ));
    }

    /// Renders the install order section
    fn render_install_order(&self, output: &mut String, section: &InstallOrderSection) {
        output.push_str("## Install Order\n\n");
        match section {
            InstallOrderSection::Ordered(order) => {
                if order.is_empty() {
                    output.push_str("*The graph is empty; nothing to install.*\n\n");
                } else {
                    output.push_str("Dependencies first:\n\n");
                    for (position, package) in order.iter().enumerate() {
                        output.push_str(&format!(
                            "{}. {}\n",
                            position + 1,
                            Self::escape_markdown_table_cell(package)
                        ));
                    }
                    output.push('\n');
                }
            }
            InstallOrderSection::Unresolvable => {
                output.push_str(
                    "⚠️ No valid install order exists: the graph contains a cycle.\n\n",
                );
            }
        }
    }

    /// Renders the critical packages section
    fn render_criticality(&self, output: &mut String, section: &CriticalitySection) {
        output.push_str("## Critical Packages\n\n");
        output.push_str(&format!(
            "Maximum number of direct dependents: {}\n\n",
            section.max_in_degree
        ));

        if section.critical.is_empty() {
            output.push_str("*The graph is empty; no packages to rank.*\n\n");
            return;
        }

        output.push_str("Most depended-upon packages:\n\n");
        for package in &section.critical {
            output.push_str(&format!("- {}\n", Self::escape_markdown_table_cell(package)));
        }
        output.push('\n');

        output.push_str(IN_DEGREE_TABLE_HEADER);
        output.push_str(IN_DEGREE_TABLE_SEPARATOR);
        for (package, in_degree) in &section.in_degree {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(package),
                in_degree
            ));
        }
        output.push('\n');
    }

    /// Renders a per-package query section (dependencies or impact)
    fn render_package_query(
        &self,
        output: &mut String,
        title: &str,
        empty_message: &str,
        section: &PackageQuerySection,
    ) {
        output.push_str(&format!(
            "## {} of {}\n\n",
            title,
            Self::escape_markdown_table_cell(&section.package)
        ));

        if !section.known {
            output.push_str(&format!(
                "*Package \"{}\" is not present in the graph.*\n\n",
                Self::escape_markdown_table_cell(&section.package)
            ));
            return;
        }

        if section.packages.is_empty() {
            output.push_str(&format!("*{}*\n\n", empty_message));
            return;
        }

        for package in &section.packages {
            output.push_str(&format!("- {}\n", Self::escape_markdown_table_cell(package)));
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &GraphReport, metadata: &ReportMetadata) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report, metadata);

        if let Some(cycle_detected) = report.cycle_detected {
            self.render_cycle_check(&mut output, cycle_detected);
        }

        if let Some(sccs) = &report.sccs {
            self.render_sccs(&mut output, sccs);
        }

        if let Some(install_order) = &report.install_order {
            self.render_install_order(&mut output, install_order);
        }

        if let Some(criticality) = &report.criticality {
            self.render_criticality(&mut output, criticality);
        }

        if let Some(dependencies) = &report.dependencies {
            self.render_package_query(
                &mut output,
                "Transitive Dependencies",
                "No dependencies; this package is a leaf.",
                dependencies,
            );
        }

        if let Some(impact) = &report.impact {
            self.render_package_query(
                &mut output,
                "Removal Impact",
                "No package depends on it; removal is safe.",
                impact,
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ReportMetadata {
        ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "depgraph".to_string(),
            "1.1.0".to_string(),
            "urn:uuid:test-123".to_string(),
        )
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        let input = "name with | pipe and\nnewline";
        let escaped = MarkdownFormatter::escape_markdown_table_cell(input);
        assert_eq!(escaped, "name with \\| pipe and newline");
    }

    #[test]
    fn test_format_summary_only() {
        let report = GraphReport::new(3, 2);
        let formatter = MarkdownFormatter::new();

        let markdown = formatter.format(&report, &metadata()).unwrap();

        assert!(markdown.starts_with("# Dependency Graph Report"));
        assert!(markdown.contains("**3 packages, 2 dependency edges.**"));
        assert!(markdown.contains("2024-01-01T00:00:00Z"));
        assert!(!markdown.contains("## Cycle Check"));
    }

    #[test]
    fn test_format_singular_counts() {
        let report = GraphReport::new(1, 1);
        let formatter = MarkdownFormatter::new();

        let markdown = formatter.format(&report, &metadata()).unwrap();
        assert!(markdown.contains("**1 package, 1 dependency edge.**"));
    }

    #[test]
    fn test_format_cycle_check_positive() {
        let mut report = GraphReport::new(2, 2);
        report.cycle_detected = Some(true);

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Cycle Check"));
        assert!(markdown.contains("⚠️ The dependency graph contains at least one cycle."));
    }

    #[test]
    fn test_format_cycle_check_negative() {
        let mut report = GraphReport::new(2, 1);
        report.cycle_detected = Some(false);

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();
        assert!(markdown.contains("✅ No cycles detected."));
    }

    #[test]
    fn test_format_sccs_with_cycle() {
        let mut report = GraphReport::new(3, 3);
        report.sccs = Some(vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ]);

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Strongly Connected Components"));
        assert!(markdown.contains("Found 1 component with mutually dependent packages:"));
        assert!(markdown.contains("- a, b"));
        assert!(markdown.contains("Total components (singletons included): 2"));
    }

    #[test]
    fn test_format_sccs_all_singletons() {
        let mut report = GraphReport::new(2, 1);
        report.sccs = Some(vec![vec!["a".to_string()], vec!["b".to_string()]]);

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();
        assert!(markdown.contains("All components are singletons"));
    }

    #[test]
    fn test_format_install_order() {
        let mut report = GraphReport::new(2, 1);
        report.install_order = Some(InstallOrderSection::Ordered(vec![
            "urllib3".to_string(),
            "requests".to_string(),
        ]));

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Install Order"));
        assert!(markdown.contains("1. urllib3"));
        assert!(markdown.contains("2. requests"));
    }

    #[test]
    fn test_format_install_order_unresolvable() {
        let mut report = GraphReport::new(2, 2);
        report.install_order = Some(InstallOrderSection::Unresolvable);

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();
        assert!(markdown.contains("No valid install order exists"));
    }

    #[test]
    fn test_format_criticality() {
        let mut report = GraphReport::new(3, 2);
        report.criticality = Some(CriticalitySection {
            critical: vec!["numpy".to_string()],
            max_in_degree: 2,
            in_degree: vec![
                ("numpy".to_string(), 2),
                ("scipy".to_string(), 0),
                ("pandas".to_string(), 0),
            ],
        });

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Critical Packages"));
        assert!(markdown.contains("Maximum number of direct dependents: 2"));
        assert!(markdown.contains("- numpy"));
        assert!(markdown.contains("| numpy | 2 |"));
        assert!(markdown.contains("| scipy | 0 |"));
    }

    #[test]
    fn test_format_dependencies_query() {
        let mut report = GraphReport::new(3, 2);
        report.dependencies = Some(PackageQuerySection {
            package: "requests".to_string(),
            known: true,
            packages: vec!["urllib3".to_string(), "certifi".to_string()],
        });

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Transitive Dependencies of requests"));
        assert!(markdown.contains("- urllib3"));
        assert!(markdown.contains("- certifi"));
    }

    #[test]
    fn test_format_dependencies_query_unknown_package() {
        let mut report = GraphReport::new(1, 0);
        report.dependencies = Some(PackageQuerySection {
            package: "ghost".to_string(),
            known: false,
            packages: vec![],
        });

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();
        assert!(markdown.contains("is not present in the graph"));
    }

    #[test]
    fn test_format_impact_query_leaf_package() {
        let mut report = GraphReport::new(2, 1);
        report.impact = Some(PackageQuerySection {
            package: "requests".to_string(),
            known: true,
            packages: vec![],
        });

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        assert!(markdown.contains("## Removal Impact of requests"));
        assert!(markdown.contains("removal is safe"));
    }

    #[test]
    fn test_format_section_ordering() {
        let mut report = GraphReport::new(2, 2);
        report.cycle_detected = Some(true);
        report.sccs = Some(vec![vec!["a".to_string(), "b".to_string()]]);
        report.install_order = Some(InstallOrderSection::Unresolvable);
        report.criticality = Some(CriticalitySection {
            critical: vec!["a".to_string(), "b".to_string()],
            max_in_degree: 1,
            in_degree: vec![("a".to_string(), 1), ("b".to_string(), 1)],
        });

        let markdown = MarkdownFormatter::new().format(&report, &metadata()).unwrap();

        let cycle_pos = markdown.find("## Cycle Check");
        let scc_pos = markdown.find("## Strongly Connected Components");
        let order_pos = markdown.find("## Install Order");
        let critical_pos = markdown.find("## Critical Packages");

        assert!(cycle_pos.is_some());
        assert!(scc_pos.is_some());
        assert!(order_pos.is_some());
        assert!(critical_pos.is_some());

        assert!(cycle_pos.unwrap() < scc_pos.unwrap());
        assert!(scc_pos.unwrap() < order_pos.unwrap());
        assert!(order_pos.unwrap() < critical_pos.unwrap());
    }
}
