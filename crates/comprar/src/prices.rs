//! Price parsing.
//!
//! The storefront renders prices as `$29.99` and checkout summary lines as
//! labelled strings (`Item total: $53.97`). Every parse failure is an
//! explicit [`HarnessError::PriceParse`]; there is no silent sentinel for
//! text that does not match.

use regex::Regex;

use crate::result::{HarnessError, HarnessResult};

/// Parse a plain currency string like `$29.99` into its numeric value.
///
/// Accepts an optional leading `$` and surrounding whitespace.
pub fn parse_price(text: &str) -> HarnessResult<f64> {
    let trimmed = text.trim().trim_start_matches('$');
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .ok_or_else(|| HarnessError::PriceParse {
            text: text.to_string(),
        })
}

/// Extract the amount from a labelled summary line, e.g.
/// `parse_labelled("Item total", "Item total: $53.97")` returns `53.97`.
pub fn parse_labelled(label: &str, text: &str) -> HarnessResult<f64> {
    let pattern = format!(r"{}:\s*\$?(\d+(?:\.\d{{1,2}})?)", regex::escape(label));
    let re = Regex::new(&pattern).map_err(|e| HarnessError::Evaluate {
        message: format!("invalid summary pattern for {label:?}: {e}"),
    })?;
    let capture = re
        .captures(text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| HarnessError::PriceParse {
            text: text.to_string(),
        })?;
    parse_price(capture.as_str())
}
