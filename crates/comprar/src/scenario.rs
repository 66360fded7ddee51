//! Scenario runner.
//!
//! One scenario owns one browser and one session, created at its start and
//! closed at its end. The body runs once; there are no retries. When the
//! body fails, the runner captures a diagnostic screenshot before the
//! browser goes away, then records the failure.

use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;

use crate::browser::{Browser, Session};
use crate::config::SuiteConfig;
use crate::result::{HarnessError, HarnessResult};

/// Outcome of one scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    /// Scenario name
    pub name: String,
    /// Whether the body completed without error
    pub passed: bool,
    /// Rendered error when the body failed
    pub error: Option<String>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
    /// Path of the failure screenshot, if one was captured
    pub screenshot: Option<PathBuf>,
}

/// Reduce a scenario name to a filesystem-safe slug
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Write a screenshot of the session to the artifact directory.
///
/// Also available to scenario bodies for milestone captures.
pub async fn save_screenshot(
    session: &Session,
    config: &SuiteConfig,
    file_name: &str,
) -> HarnessResult<PathBuf> {
    let bytes = session.screenshot().await?;
    std::fs::create_dir_all(&config.artifact_dir)?;
    let path = config.artifact_dir.join(file_name);
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// Run one scenario: launch a browser, open a session, run the body.
///
/// A body error marks the result failed and triggers a screenshot at
/// `<artifact_dir>/failure-<slug>.png`; infrastructure errors (browser
/// launch, session creation) propagate as `Err`.
pub async fn run_scenario<F, Fut>(
    name: &str,
    config: &SuiteConfig,
    body: F,
) -> HarnessResult<ScenarioResult>
where
    F: FnOnce(Session) -> Fut,
    Fut: std::future::Future<Output = HarnessResult<()>>,
{
    tracing::info!(scenario = name, "starting");
    let start = Instant::now();

    let browser = Browser::launch(config).await?;
    let session = browser.new_session().await?;
    let diagnostics = session.clone();

    let outcome = body(session).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = match outcome {
        Ok(()) => {
            tracing::info!(scenario = name, duration_ms, "passed");
            ScenarioResult {
                name: name.to_string(),
                passed: true,
                error: None,
                duration_ms,
                screenshot: None,
            }
        }
        Err(e) => {
            tracing::error!(scenario = name, error = %e, "failed");
            let file_name = format!("failure-{}.png", slugify(name));
            let screenshot = match save_screenshot(&diagnostics, config, &file_name).await {
                Ok(path) => Some(path),
                Err(shot_err) => {
                    tracing::warn!(error = %shot_err, "failure screenshot not captured");
                    None
                }
            };
            ScenarioResult {
                name: name.to_string(),
                passed: false,
                error: Some(e.to_string()),
                duration_ms,
                screenshot,
            }
        }
    };

    // The result (and its screenshot path) outranks a close failure
    if let Err(close_err) = browser.close().await {
        tracing::warn!(error = %close_err, "browser close failed");
    }
    Ok(result)
}

/// Fail with a message unless the condition holds
pub fn ensure(condition: bool, message: impl Into<String>) -> HarnessResult<()> {
    if condition {
        Ok(())
    } else {
        Err(HarnessError::assertion(message))
    }
}

/// Fail unless two floats agree within the tolerance
pub fn ensure_close(actual: f64, expected: f64, tolerance: f64, what: &str) -> HarnessResult<()> {
    if (actual - expected).abs() <= tolerance {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "{what}: expected {expected} (±{tolerance}), got {actual}"
        )))
    }
}

/// Fail unless the haystack contains the needle
pub fn ensure_contains(haystack: &str, needle: &str, what: &str) -> HarnessResult<()> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(HarnessError::assertion(format!(
            "{what}: {haystack:?} does not contain {needle:?}"
        )))
    }
}

#[cfg(test)]
mod slug_tests {
    use super::*;

    #[test]
    fn test_spaces_become_dashes() {
        assert_eq!(slugify("Complete checkout journey"), "complete-checkout-journey");
    }

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("sort: Z->A (names)"), "sort-z-a-names");
    }

    #[test]
    fn test_no_trailing_dash() {
        assert_eq!(slugify("edge case!"), "edge-case");
    }
}
