/// ReportMetadata value object describing one analysis run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    serial_number: String,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        serial_number: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            serial_number,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_metadata_new() {
        let metadata = ReportMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "depgraph".to_string(),
            "1.1.0".to_string(),
            "urn:uuid:12345".to_string(),
        );

        assert_eq!(metadata.generated_at(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "depgraph");
        assert_eq!(metadata.tool_version(), "1.1.0");
        assert_eq!(metadata.serial_number(), "urn:uuid:12345");
    }
}
