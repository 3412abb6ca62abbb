//! Guide identifier derivation.

use std::fmt;

use serde::Serialize;

/// Canonical identifier for a guide document, derived from its relative path.
///
/// The same identifier is used as the navigation link target, the content
/// lookup key, and the section anchor in the emitted page, so the three
/// always agree. Derivation is pure and stable: the same path always yields
/// the same identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct GuideId(String);

impl GuideId {
    /// Derive an identifier from a relative path.
    ///
    /// Leading `../` and `./` segments are stripped, the `.md` extension is
    /// removed, path separators become `-`, and the result is lowercased.
    /// No other characters are sanitized.
    pub fn from_path(path: &str) -> Self {
        GuideId(normalize(path))
    }

    /// Derive an identifier, rewriting a leading directory prefix after
    /// normalization.
    ///
    /// Used for category directories whose normalized prefix differs from
    /// the anchor prefix (e.g. `feature_tests-` links as `feature-`).
    pub fn from_path_with_rewrite(path: &str, from: &str, to: &str) -> Self {
        let id = normalize(path);
        match id.strip_prefix(from) {
            Some(rest) => GuideId(format!("{to}{rest}")),
            None => GuideId(id),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(path: &str) -> String {
    let mut p = path;
    loop {
        if let Some(rest) = p.strip_prefix("../") {
            p = rest;
        } else if let Some(rest) = p.strip_prefix("./") {
            p = rest;
        } else {
            break;
        }
    }

    let p = if p.len() >= 3 && p[p.len() - 3..].eq_ignore_ascii_case(".md") {
        &p[..p.len() - 3]
    } else {
        p
    };

    p.replace('/', "-").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalizes_plain_filename() {
        assert_eq!(GuideId::from_path("README.md").as_str(), "readme");
    }

    #[test]
    fn normalizes_nested_path() {
        let id = GuideId::from_path("FEATURE_TESTS/01_TAB_ARCHITECTURE.md");
        assert_eq!(id.as_str(), "feature_tests-01_tab_architecture");
    }

    #[test]
    fn rewrites_category_prefix() {
        let id = GuideId::from_path_with_rewrite(
            "FEATURE_TESTS/01_TAB_ARCHITECTURE.md",
            "feature_tests-",
            "feature-",
        );
        assert_eq!(id.as_str(), "feature-01_tab_architecture");
    }

    #[test]
    fn strips_relative_segments() {
        let id = GuideId::from_path("../PSBT_WORKFLOW_TESTING_GUIDE.md");
        assert_eq!(id.as_str(), "psbt_workflow_testing_guide");

        let id = GuideId::from_path("./docs/SETUP.md");
        assert_eq!(id.as_str(), "docs-setup");
    }

    #[test]
    fn identifier_is_fragment_safe() {
        let id = GuideId::from_path("FEATURE_TESTS/09_SECURITY_FEATURES.md");
        assert!(!id.as_str().contains('/'));
        assert_eq!(id.as_str(), id.as_str().to_lowercase());
    }

    #[test]
    fn derivation_is_stable() {
        let a = GuideId::from_path("FEATURE_TESTS/02_WALLET_SETUP.md");
        let b = GuideId::from_path("FEATURE_TESTS/02_WALLET_SETUP.md");
        assert_eq!(a, b);
    }
}
