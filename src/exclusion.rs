//! Project exclusion by display name

use glob::{MatchOptions, Pattern};

use crate::constants::cmake;
use crate::error::SlnDepsError;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Decides which projects are left out of the emitted graph
///
/// Names are compared case-insensitively after trimming surrounding
/// whitespace on both sides. An excluded project is dropped as a node and as
/// either end of an edge.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    names: Vec<String>,
    patterns: Vec<Pattern>,
}

impl ExclusionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude projects whose display name equals `name`
    pub fn with_name(mut self, name: &str) -> Self {
        let name = normalize(name);
        if !name.is_empty() && !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    pub fn with_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .fold(self, |filter, name| filter.with_name(name.as_ref()))
    }

    /// Exclude projects whose display name matches a glob pattern
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, SlnDepsError> {
        let compiled = Pattern::new(pattern.trim()).map_err(|source| SlnDepsError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.patterns.push(compiled);
        Ok(self)
    }

    /// Exclude the helper targets CMake adds to every generated solution
    pub fn with_cmake_targets(self) -> Self {
        self.with_names(cmake::HELPER_TARGETS)
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        let name = normalize(name);
        self.names.contains(&name)
            || self
                .patterns
                .iter()
                .any(|pattern| pattern.matches_with(&name, MATCH_OPTIONS))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.patterns.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_ignore_case_and_whitespace() {
        let filter = ExclusionFilter::new().with_names([" Tests ", "tools"]);
        assert!(filter.is_excluded("tests"));
        assert!(filter.is_excluded("  TESTS"));
        assert!(filter.is_excluded("Tools "));
        assert!(!filter.is_excluded("Tests2"));
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let filter = ExclusionFilter::new().with_name("   ");
        assert!(filter.is_empty());
        assert!(!filter.is_excluded(""));
    }

    #[test]
    fn test_patterns_match_case_insensitively() {
        let filter = ExclusionFilter::new().with_pattern("*tests").unwrap();
        assert!(filter.is_excluded("CoreTests"));
        assert!(filter.is_excluded("ui.TESTS"));
        assert!(!filter.is_excluded("TestsCore"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = ExclusionFilter::new().with_pattern("[abc").unwrap_err();
        assert!(matches!(err, SlnDepsError::InvalidPattern { .. }));
    }

    #[test]
    fn test_cmake_targets() {
        let filter = ExclusionFilter::new().with_cmake_targets();
        assert!(filter.is_excluded("ALL_BUILD"));
        assert!(filter.is_excluded("zero_check"));
        assert!(filter.is_excluded("NightlyMemoryCheck"));
        assert!(!filter.is_excluded("App"));
    }
}
