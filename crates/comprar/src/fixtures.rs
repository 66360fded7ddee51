//! Test fixtures.
//!
//! Scenarios receive their data by value instead of reaching into a shared
//! static: credentials, the products to buy, and the buyer details for
//! checkout. [`TestData::default`] carries the demo site's well-known
//! accounts; a JSON file can override everything for another deployment.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::result::HarnessResult;

/// Error banner text for wrong credentials
pub const INVALID_CREDENTIALS_ERROR: &str = "Username and password do not match";

/// Error banner text for an empty username
pub const USERNAME_REQUIRED_ERROR: &str = "Username is required";

/// Confirmation header after a completed order
pub const ORDER_CONFIRMATION: &str = "Thank you for your order!";

/// A username/password pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Username
    pub username: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create a new credentials pair
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Buyer details for the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerDetails {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Postal code
    pub postal_code: String,
}

/// Immutable data injected into scenarios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestData {
    /// Account that can log in
    pub valid_user: Credentials,
    /// Account that must be rejected
    pub invalid_user: Credentials,
    /// Product names used by cart and checkout scenarios
    pub products: Vec<String>,
    /// Buyer details for the checkout form
    pub buyer: BuyerDetails,
}

impl Default for TestData {
    fn default() -> Self {
        Self {
            valid_user: Credentials::new("standard_user", "secret_sauce"),
            invalid_user: Credentials::new("invalid_user", "wrong_password"),
            products: vec![
                "Sauce Labs Backpack".to_string(),
                "Sauce Labs Bike Light".to_string(),
                "Sauce Labs Bolt T-Shirt".to_string(),
            ],
            buyer: BuyerDetails {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                postal_code: "12345".to_string(),
            },
        }
    }
}

impl TestData {
    /// Load test data from a JSON file, overriding the defaults entirely
    pub fn from_json_file(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_credentials() {
        let data = TestData::default();
        assert_eq!(data.valid_user.username, "standard_user");
        assert_eq!(data.valid_user.password, "secret_sauce");
        assert_ne!(data.valid_user, data.invalid_user);
    }

    #[test]
    fn test_default_products_nonempty() {
        let data = TestData::default();
        assert_eq!(data.products.len(), 3);
        assert!(data.products.contains(&"Sauce Labs Backpack".to_string()));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::json!({
            "valid_user": { "username": "alice", "password": "hunter2" },
            "invalid_user": { "username": "bob", "password": "nope" },
            "products": ["Widget"],
            "buyer": { "first_name": "A", "last_name": "B", "postal_code": "90210" }
        });
        write!(file, "{json}").unwrap();

        let data = TestData::from_json_file(file.path()).unwrap();
        assert_eq!(data.valid_user.username, "alice");
        assert_eq!(data.products, vec!["Widget".to_string()]);
    }

    #[test]
    fn test_from_missing_file_is_io_error() {
        let err = TestData::from_json_file("/nonexistent/fixtures.json").unwrap_err();
        assert!(matches!(err, crate::result::HarnessError::Io(_)));
    }

    #[test]
    fn test_roundtrip_json() {
        let data = TestData::default();
        let json = serde_json::to_string(&data).unwrap();
        let back: TestData = serde_json::from_str(&json).unwrap();
        assert_eq!(data, back);
    }
}
