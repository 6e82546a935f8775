use crate::shared::error::DepGraphError;
use crate::shared::Result;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// NewType wrapper for package name with validation
///
/// A package is identified solely by its name; names are case-sensitive
/// and validated once at the loader boundary, so every name flowing through
/// the analyzers is known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            return Err(DepGraphError::InvalidPackageName {
                name,
                reason: "package name cannot be empty".to_string(),
            }
            .into());
        }

        // Security: Length limit to prevent DoS
        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            return Err(DepGraphError::InvalidPackageName {
                reason: format!(
                    "package name is too long ({} bytes). Maximum allowed: {} bytes",
                    name.len(),
                    MAX_PACKAGE_NAME_LENGTH
                ),
                name,
            }
            .into());
        }

        // Security: Validate characters (allow alphanumeric, hyphens, underscores, and dots)
        // This prevents injection attacks and special characters that could cause issues
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(DepGraphError::InvalidPackageName {
                name,
                reason: "package name contains invalid characters".to_string(),
            }
            .into());
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_name_valid() {
        let name = PackageName::new("requests".to_string()).unwrap();
        assert_eq!(name.as_str(), "requests");
    }

    #[test]
    fn test_package_name_allows_common_separators() {
        assert!(PackageName::new("python-dateutil".to_string()).is_ok());
        assert!(PackageName::new("typing_extensions".to_string()).is_ok());
        assert!(PackageName::new("zope.interface".to_string()).is_ok());
    }

    #[test]
    fn test_package_name_is_case_sensitive() {
        let lower = PackageName::new("numpy".to_string()).unwrap();
        let upper = PackageName::new("Numpy".to_string()).unwrap();
        assert_ne!(lower, upper);
    }

    #[test]
    fn test_package_name_empty_rejected() {
        let result = PackageName::new(String::new());
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("cannot be empty"));
    }

    #[test]
    fn test_package_name_too_long_rejected() {
        let result = PackageName::new("a".repeat(256));
        assert!(result.is_err());
        let display = format!("{}", result.unwrap_err());
        assert!(display.contains("too long"));
    }

    #[test]
    fn test_package_name_invalid_characters_rejected() {
        assert!(PackageName::new("pkg name".to_string()).is_err());
        assert!(PackageName::new("pkg;rm".to_string()).is_err());
        assert!(PackageName::new("pkg/../etc".to_string()).is_err());
    }

    #[test]
    fn test_package_name_display() {
        let name = PackageName::new("urllib3".to_string()).unwrap();
        assert_eq!(format!("{}", name), "urllib3");
    }
}
