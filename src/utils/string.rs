//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("project", 0), "projects");
        assert_eq!(pluralize("project", 1), "project");
        assert_eq!(pluralize("edge", 5), "edges");
    }
}
