//! Static catalog of guide documents.

use std::collections::HashMap;

use crate::ident::GuideId;

/// The named groups guides are presented under, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Core,
    FeatureTests,
    Workflows,
}

impl CategoryKind {
    /// Sidebar heading for this category.
    pub fn heading(&self) -> &'static str {
        match self {
            CategoryKind::Core => "Core Guides",
            CategoryKind::FeatureTests => "Feature Tests",
            CategoryKind::Workflows => "Workflows",
        }
    }

    /// Derive the identifier for a path registered under this category.
    ///
    /// Feature tests live in a `FEATURE_TESTS/` directory but anchor as
    /// `feature-*`; the other categories use the plain normalization.
    pub fn guide_id(&self, path: &str) -> GuideId {
        match self {
            CategoryKind::FeatureTests => {
                GuideId::from_path_with_rewrite(path, "feature_tests-", "feature-")
            }
            _ => GuideId::from_path(path),
        }
    }
}

/// One registered source document with display metadata.
#[derive(Debug, Clone)]
pub struct GuideEntry {
    /// Path relative to the guides base directory
    pub relative_path: String,

    /// Display title shown in navigation
    pub title: String,

    /// Emoji icon shown before the title
    pub icon: String,
}

impl GuideEntry {
    pub fn new(relative_path: &str, title: &str, icon: &str) -> Self {
        Self {
            relative_path: relative_path.to_string(),
            title: title.to_string(),
            icon: icon.to_string(),
        }
    }
}

/// An ordered group of guide entries under one heading.
#[derive(Debug, Clone)]
pub struct GuideCategory {
    pub kind: CategoryKind,
    pub entries: Vec<GuideEntry>,
}

/// Immutable, ordered catalog of all registered guides.
///
/// Order is display order in the navigation sidebar and processing order
/// for content assembly; it has no other semantic weight.
#[derive(Debug, Clone)]
pub struct GuideRegistry {
    categories: Vec<GuideCategory>,
}

/// Errors reported by registry validation.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("guides `{first}` and `{second}` both normalize to id `{id}`")]
    DuplicateId {
        id: String,
        first: String,
        second: String,
    },
}

impl GuideRegistry {
    pub fn new(categories: Vec<GuideCategory>) -> Self {
        Self { categories }
    }

    /// The shipped catalog of testing guides.
    pub fn builtin() -> Self {
        let core = [
            ("README.md", "Overview", "📋"),
            ("MASTER_TESTING_GUIDE.md", "Master Testing Guide", "🎯"),
            ("TESTNET_SETUP_GUIDE.md", "Testnet Setup", "⚙️"),
            ("PRIORITY_TEST_EXECUTION_GUIDE.md", "Priority Tests (P0)", "🚀"),
            ("BUG_REPORTING_GUIDE.md", "Bug Reporting", "🐛"),
            ("TEST_RESULTS_TRACKER.md", "Results Tracker", "📊"),
            ("VISUAL_TESTING_REFERENCE.md", "Visual Testing", "🎨"),
            ("BITCOIN_SPECIFIC_TESTING.md", "Bitcoin Testing", "₿"),
            ("EXTENSION_INSTALLATION_GUIDE.md", "Extension Install", "📦"),
            ("DISTRIBUTION_GUIDE.md", "Distribution", "🌐"),
        ];

        let feature_tests = [
            ("FEATURE_TESTS/01_TAB_ARCHITECTURE.md", "01. Tab Architecture", "🪟"),
            ("FEATURE_TESTS/02_WALLET_SETUP.md", "02. Wallet Setup", "💼"),
            ("FEATURE_TESTS/03_AUTHENTICATION.md", "03. Authentication", "🔐"),
            ("FEATURE_TESTS/04_ACCOUNT_MANAGEMENT.md", "04. Account Management", "👤"),
            ("FEATURE_TESTS/05_SEND_TRANSACTIONS.md", "05. Send Transactions", "📤"),
            ("FEATURE_TESTS/06_RECEIVE_TRANSACTIONS.md", "06. Receive Transactions", "📥"),
            ("FEATURE_TESTS/07_TRANSACTION_HISTORY.md", "07. Transaction History", "📜"),
            ("FEATURE_TESTS/08_MULTISIG_WALLETS.md", "08. Multisig Wallets", "🔑"),
            ("FEATURE_TESTS/09_SECURITY_FEATURES.md", "09. Security Features", "🛡️"),
            ("FEATURE_TESTS/10_SETTINGS_PREFERENCES.md", "10. Settings", "⚙️"),
            ("FEATURE_TESTS/10_CONTACT_MANAGEMENT.md", "10. Contact Management", "📇"),
            ("FEATURE_TESTS/11_ACCESSIBILITY_PERFORMANCE.md", "11. Accessibility", "♿"),
            ("FEATURE_TESTS/11_TRANSACTION_FILTERING.md", "11. Transaction Filtering", "🔍"),
            ("FEATURE_TESTS/12_TRANSACTION_METADATA.md", "12. Transaction Metadata", "🏷️"),
            ("FEATURE_TESTS/13_ENCRYPTED_BACKUP.md", "13. Encrypted Backup", "💾"),
        ];

        let workflows = [("PSBT_WORKFLOW_TESTING_GUIDE.md", "PSBT Workflow", "🔄")];

        fn category(kind: CategoryKind, entries: &[(&str, &str, &str)]) -> GuideCategory {
            GuideCategory {
                kind,
                entries: entries
                    .iter()
                    .map(|(path, title, icon)| GuideEntry::new(path, title, icon))
                    .collect(),
            }
        }

        Self::new(vec![
            category(CategoryKind::Core, &core),
            category(CategoryKind::FeatureTests, &feature_tests),
            category(CategoryKind::Workflows, &workflows),
        ])
    }

    pub fn categories(&self) -> &[GuideCategory] {
        &self.categories
    }

    /// Iterate all entries in declared order, paired with their category.
    pub fn entries(&self) -> impl Iterator<Item = (CategoryKind, &GuideEntry)> {
        self.categories
            .iter()
            .flat_map(|c| c.entries.iter().map(move |e| (c.kind, e)))
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every entry derives a distinct identifier.
    ///
    /// Two paths that normalize to the same id would be indistinguishable
    /// downstream (one's content would shadow the other's), so the registry
    /// rejects the configuration up front instead.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen: HashMap<GuideId, &str> = HashMap::new();

        for (kind, entry) in self.entries() {
            let id = kind.guide_id(&entry.relative_path);
            if let Some(first) = seen.get(&id) {
                return Err(RegistryError::DuplicateId {
                    id: id.to_string(),
                    first: first.to_string(),
                    second: entry.relative_path.clone(),
                });
            }
            seen.insert(id, &entry.relative_path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_catalog_is_complete() {
        let registry = GuideRegistry::builtin();
        assert_eq!(registry.categories().len(), 3);
        assert_eq!(registry.len(), 26);
    }

    #[test]
    fn builtin_catalog_validates() {
        GuideRegistry::builtin().validate().unwrap();
    }

    #[test]
    fn entries_iterate_in_declared_order() {
        let registry = GuideRegistry::builtin();
        let first = registry.entries().next().unwrap();
        assert_eq!(first.1.relative_path, "README.md");

        let last = registry.entries().last().unwrap();
        assert_eq!(last.0, CategoryKind::Workflows);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let registry = GuideRegistry::new(vec![GuideCategory {
            kind: CategoryKind::Core,
            entries: vec![
                GuideEntry::new("SETUP.md", "Setup", "⚙️"),
                GuideEntry::new("setup.md", "Setup (old)", "⚙️"),
            ],
        }]);

        let err = registry.validate().unwrap_err();
        let RegistryError::DuplicateId { id, first, second } = err;
        assert_eq!(id, "setup");
        assert_eq!(first, "SETUP.md");
        assert_eq!(second, "setup.md");
    }

    #[test]
    fn feature_category_rewrites_anchor_prefix() {
        let id = CategoryKind::FeatureTests.guide_id("FEATURE_TESTS/03_AUTHENTICATION.md");
        assert_eq!(id.as_str(), "feature-03_authentication");
    }
}
