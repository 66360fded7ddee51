//! Suite reporting.
//!
//! Scenarios either pass or fail whole; there is no partial credit. The
//! report aggregates their results, renders a text summary, and can be
//! written out as JSON next to the screenshots.

use std::path::Path;

use serde::Serialize;

use crate::result::HarnessResult;
use crate::scenario::ScenarioResult;

/// Aggregated results of a suite run
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    /// When the suite started (RFC 3339)
    pub started_at: String,
    /// Per-scenario results, in execution order
    pub results: Vec<ScenarioResult>,
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteReport {
    /// Start an empty report stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            started_at: chrono::Utc::now().to_rfc3339(),
            results: Vec::new(),
        }
    }

    /// Record a scenario result
    pub fn record(&mut self, result: ScenarioResult) {
        self.results.push(result);
    }

    /// Number of scenarios recorded
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of passing scenarios
    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of failing scenarios
    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whether every recorded scenario passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Render a text summary
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "suite: {} passed, {} failed, {} total\n",
            self.passed(),
            self.failed(),
            self.total()
        ));
        for result in &self.results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "  [{status}] {} ({}ms)\n",
                result.name, result.duration_ms
            ));
            if let Some(ref error) = result.error {
                out.push_str(&format!("         {error}\n"));
            }
            if let Some(ref shot) = result.screenshot {
                out.push_str(&format!("         screenshot: {}\n", shot.display()));
            }
        }
        out
    }

    /// Serialize the report to pretty JSON
    pub fn to_json(&self) -> HarnessResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON report to a file
    pub fn write_json(&self, path: impl AsRef<Path>) -> HarnessResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
