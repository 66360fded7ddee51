//! Accessibility scanning.
//!
//! The scan injects the axe-core audit script into the loaded page and runs
//! it there; the adapter's job is scoping (explicit rules or WCAG tag sets),
//! deserializing the violation list, and writing the JSON artifact. The
//! axe-core script itself ships with the deployment and is pointed at via
//! [`SuiteConfig::axe_script_path`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::browser::Session;
use crate::config::SuiteConfig;
use crate::result::{HarnessError, HarnessResult};

/// WCAG 2.0/2.1 A and AA tag set
pub const WCAG_AA_TAGS: [&str; 4] = ["wcag2a", "wcag2aa", "wcag21a", "wcag21aa"];

/// Structural rules the suite checks on every page
pub const COMMON_RULES: [&str; 24] = [
    "accesskeys",
    "aria-allowed-role",
    "aria-text",
    "aria-treeitem-name",
    "empty-heading",
    "empty-table-header",
    "frame-tested",
    "heading-order",
    "label-title-only",
    "image-redundant-alt",
    "landmark-banner-is-top-level",
    "landmark-complementary-is-top-level",
    "landmark-contentinfo-is-top-level",
    "landmark-main-is-top-level",
    "landmark-no-duplicate-banner",
    "landmark-no-duplicate-contentinfo",
    "landmark-no-duplicate-main",
    "landmark-unique",
    "meta-viewport-large",
    "presentation-role-conflict",
    "scope-attr-valid",
    "skip-link",
    "tabindex",
    "table-duplicate-name",
];

/// A DOM node cited by a violation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViolationNode {
    /// Offending HTML fragment
    #[serde(default)]
    pub html: String,
    /// CSS selector chain locating the node
    #[serde(default)]
    pub target: Vec<String>,
}

/// One axe-core rule violation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Rule id (e.g. `heading-order`)
    pub id: String,
    /// Severity: minor, moderate, serious, critical
    #[serde(default)]
    pub impact: Option<String>,
    /// What the rule checks
    #[serde(default)]
    pub description: String,
    /// Short remediation hint
    #[serde(default)]
    pub help: String,
    /// Documentation URL
    #[serde(default)]
    pub help_url: String,
    /// Tags the rule carries (wcag2a, best-practice, ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Offending nodes
    #[serde(default)]
    pub nodes: Vec<ViolationNode>,
}

/// Deserialized axe-core scan output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResults {
    /// Page the scan ran against
    #[serde(default)]
    pub url: Option<String>,
    /// When axe ran the audit
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Violations found
    #[serde(default)]
    pub violations: Vec<Violation>,
}

impl ScanResults {
    /// Parse raw axe-core JSON output
    pub fn from_json(json: &str) -> HarnessResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the scan found no violations
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Rule ids of all violations, in scan order
    #[must_use]
    pub fn violation_ids(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.id.as_str()).collect()
    }

    /// Write the violation report as pretty JSON
    pub fn write_report(&self, path: impl AsRef<Path>) -> HarnessResult<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Builder for one accessibility scan
#[derive(Debug, Clone, Default)]
pub struct AxeScan {
    rules: Vec<String>,
    tags: Vec<String>,
}

impl AxeScan {
    /// Scan with the full default ruleset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the scan to an explicit rule list
    #[must_use]
    pub fn with_rules<I, S>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules = rules.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict the scan to rules carrying the given tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// The axe `runOnly` options for this scan.
    ///
    /// Explicit rules win over tags when both were set.
    #[must_use]
    pub fn run_options(&self) -> serde_json::Value {
        if !self.rules.is_empty() {
            serde_json::json!({ "runOnly": { "type": "rule", "values": self.rules } })
        } else if !self.tags.is_empty() {
            serde_json::json!({ "runOnly": { "type": "tag", "values": self.tags } })
        } else {
            serde_json::json!({})
        }
    }

    /// Run the audit against the session's current page.
    ///
    /// Injects the configured axe-core script when the page does not
    /// already carry it; a missing script configuration is an explicit
    /// [`HarnessError::A11y`].
    pub async fn analyze(
        &self,
        session: &Session,
        config: &SuiteConfig,
    ) -> HarnessResult<ScanResults> {
        let probe = session
            .evaluate("typeof window.axe !== 'undefined'")
            .await?;
        if !probe.as_bool().unwrap_or(false) {
            let path = config
                .axe_script_path
                .as_ref()
                .ok_or_else(|| HarnessError::A11y {
                    message: String::from(
                        "axe-core is not loaded and no script path is configured",
                    ),
                })?;
            let script = std::fs::read_to_string(path)?;
            session.evaluate(&script).await?;
        }

        let expr = format!(
            "axe.run(document, {}).then(results => JSON.stringify(results))",
            self.run_options()
        );
        tracing::debug!(rules = self.rules.len(), tags = self.tags.len(), "running axe");
        let value = session.evaluate(&expr).await?;
        let json = value.as_str().ok_or_else(|| HarnessError::A11y {
            message: String::from("axe returned a non-string result"),
        })?;
        let results = ScanResults::from_json(json)?;
        if !results.is_clean() {
            tracing::warn!(
                violations = results.violations.len(),
                "accessibility violations found"
            );
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANNED_VIOLATION: &str = r#"{
        "url": "https://www.saucedemo.com/",
        "timestamp": "2026-08-25T10:00:00.000Z",
        "violations": [
            {
                "id": "heading-order",
                "impact": "moderate",
                "description": "Ensure the order of headings is semantically correct",
                "help": "Heading levels should only increase by one",
                "helpUrl": "https://dequeuniversity.com/rules/axe/4.10/heading-order",
                "tags": ["cat.semantics", "best-practice"],
                "nodes": [
                    { "html": "<h3>Products</h3>", "target": [".title"] }
                ]
            }
        ]
    }"#;

    mod scan_results_tests {
        use super::*;

        #[test]
        fn test_parse_violation() {
            let results = ScanResults::from_json(CANNED_VIOLATION).unwrap();
            assert!(!results.is_clean());
            assert_eq!(results.violation_ids(), vec!["heading-order"]);

            let violation = &results.violations[0];
            assert_eq!(violation.impact.as_deref(), Some("moderate"));
            assert!(violation.help_url.contains("heading-order"));
            assert_eq!(violation.nodes[0].target, vec![".title".to_string()]);
        }

        #[test]
        fn test_clean_scan() {
            let results = ScanResults::from_json(r#"{"violations": []}"#).unwrap();
            assert!(results.is_clean());
            assert!(results.violation_ids().is_empty());
        }

        #[test]
        fn test_missing_optional_fields() {
            let json = r#"{"violations": [{"id": "tabindex"}]}"#;
            let results = ScanResults::from_json(json).unwrap();
            assert_eq!(results.violations[0].id, "tabindex");
            assert!(results.violations[0].impact.is_none());
            assert!(results.violations[0].nodes.is_empty());
        }

        #[test]
        fn test_malformed_json_is_error() {
            assert!(ScanResults::from_json("not json").is_err());
        }

        #[test]
        fn test_write_report() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("a11y.json");
            let results = ScanResults::from_json(CANNED_VIOLATION).unwrap();
            results.write_report(&path).unwrap();

            let back = ScanResults::from_json(&std::fs::read_to_string(&path).unwrap()).unwrap();
            assert_eq!(back.violation_ids(), vec!["heading-order"]);
        }
    }

    mod run_options_tests {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            assert_eq!(AxeScan::new().run_options(), serde_json::json!({}));
        }

        #[test]
        fn test_rule_scoped() {
            let options = AxeScan::new().with_rules(COMMON_RULES).run_options();
            assert_eq!(options["runOnly"]["type"], "rule");
            assert_eq!(
                options["runOnly"]["values"].as_array().map(Vec::len),
                Some(24)
            );
        }

        #[test]
        fn test_tag_scoped() {
            let options = AxeScan::new().with_tags(WCAG_AA_TAGS).run_options();
            assert_eq!(options["runOnly"]["type"], "tag");
            assert_eq!(options["runOnly"]["values"][0], "wcag2a");
        }

        #[test]
        fn test_rules_win_over_tags() {
            let options = AxeScan::new()
                .with_rules(["tabindex"])
                .with_tags(WCAG_AA_TAGS)
                .run_options();
            assert_eq!(options["runOnly"]["type"], "rule");
        }
    }

    #[cfg(not(feature = "browser"))]
    mod analyze_tests {
        use super::*;
        use crate::browser::Browser;

        #[tokio::test]
        async fn test_missing_script_config_is_explicit() {
            let browser = Browser::launch(&SuiteConfig::default()).await.unwrap();
            let session = browser.new_session().await.unwrap();
            // Mock evaluate returns null: axe absent, no script configured
            let err = AxeScan::new()
                .analyze(&session, &SuiteConfig::default())
                .await
                .unwrap_err();
            assert!(matches!(err, HarnessError::A11y { .. }));
        }
    }
}
