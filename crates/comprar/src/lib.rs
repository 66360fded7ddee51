//! Comprar: page-object E2E harness for the SauceDemo storefront.
//!
//! The crate drives the public demo storefront end to end: login, product
//! sorting, cart, checkout, and accessibility scanning. Pages are modeled
//! as stateless page objects over a [`Session`]; scenarios own one browser
//! each and capture a screenshot when they fail.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ Scenario     │    │ Page Objects │    │ Session      │
//! │ (cargo test) │───►│ login/cart/… │───►│ (CDP / mock) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Real browser control requires the `browser` feature (chromiumoxide);
//! without it a scriptable mock session stands in, which is what the unit
//! tests run against.

#![warn(missing_docs)]

pub mod a11y;
pub mod browser;
pub mod config;
pub mod fixtures;
pub mod locator;
pub mod pages;
pub mod prices;
pub mod reporter;
pub mod result;
pub mod scenario;
pub mod wait;

pub use a11y::{AxeScan, ScanResults, Violation, COMMON_RULES, WCAG_AA_TAGS};
pub use browser::{Browser, Session};
pub use config::SuiteConfig;
pub use fixtures::{BuyerDetails, Credentials, TestData};
pub use locator::Selector;
pub use pages::{CartPage, CheckoutPage, LoginPage, OrderSummary, PageObject, ProductsPage, SortMode};
pub use reporter::SuiteReport;
pub use result::{HarnessError, HarnessResult};
pub use scenario::{ensure, ensure_close, ensure_contains, run_scenario, ScenarioResult};
pub use wait::WaitOptions;

/// Initialise tracing from `RUST_LOG`, once per process.
///
/// Safe to call from every test; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
