//! Result and error types for the harness.

use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Errors that can occur while driving the storefront
#[derive(Debug, Error)]
pub enum HarnessError {
    /// Browser launch error
    #[error("Failed to launch browser: {message}")]
    BrowserLaunch {
        /// Error message
        message: String,
    },

    /// Session creation error
    #[error("Failed to open session: {message}")]
    Session {
        /// Error message
        message: String,
    },

    /// Navigation error
    #[error("Navigation to {url} failed: {message}")]
    Navigation {
        /// URL that failed
        url: String,
        /// Error message
        message: String,
    },

    /// Element not present in the DOM
    #[error("Element not found: {selector}")]
    ElementNotFound {
        /// Selector that matched nothing
        selector: String,
    },

    /// Operation timed out
    #[error("Timed out after {ms}ms waiting for {selector}")]
    Timeout {
        /// Timeout in milliseconds
        ms: u64,
        /// Selector that was waited for
        selector: String,
    },

    /// JavaScript evaluation error
    #[error("Evaluation failed: {message}")]
    Evaluate {
        /// Error message
        message: String,
    },

    /// Input dispatch error
    #[error("Input dispatch failed: {message}")]
    Input {
        /// Error message
        message: String,
    },

    /// Screenshot error
    #[error("Screenshot failed: {message}")]
    Screenshot {
        /// Error message
        message: String,
    },

    /// Price or summary text did not match the expected pattern
    #[error("Could not parse price from {text:?}")]
    PriceParse {
        /// Text that failed to parse
        text: String,
    },

    /// Cart operation attempted on an empty cart
    #[error("Cart is empty: {operation} requires at least one item")]
    EmptyCart {
        /// Operation that was attempted
        operation: String,
    },

    /// Assertion failed
    #[error("Assertion failed: {message}")]
    Assertion {
        /// Error message
        message: String,
    },

    /// Accessibility scan error
    #[error("Accessibility scan failed: {message}")]
    A11y {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarnessError {
    /// Shorthand for an assertion failure
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_not_found_display() {
        let err = HarnessError::ElementNotFound {
            selector: "#login-button".to_string(),
        };
        assert!(err.to_string().contains("#login-button"));
    }

    #[test]
    fn test_timeout_display() {
        let err = HarnessError::Timeout {
            ms: 5000,
            selector: ".inventory_list".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("5000ms"));
        assert!(msg.contains(".inventory_list"));
    }

    #[test]
    fn test_price_parse_display() {
        let err = HarnessError::PriceParse {
            text: "Total: N/A".to_string(),
        };
        assert!(err.to_string().contains("Total: N/A"));
    }

    #[test]
    fn test_empty_cart_display() {
        let err = HarnessError::EmptyCart {
            operation: "item_prices".to_string(),
        };
        assert!(err.to_string().contains("item_prices"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HarnessError = io.into();
        assert!(matches!(err, HarnessError::Io(_)));
    }

    #[test]
    fn test_assertion_shorthand() {
        let err = HarnessError::assertion("expected 3 items");
        assert!(matches!(err, HarnessError::Assertion { .. }));
        assert!(err.to_string().contains("expected 3 items"));
    }
}
