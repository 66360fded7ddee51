//! Page objects for the storefront.
//!
//! Each page is a stateless bundle of selectors implementing [`PageObject`].
//! Actions and queries take the [`Session`] explicitly, so one page object
//! can drive any number of sessions and owns nothing.

use crate::browser::Session;
use crate::config::SuiteConfig;
use crate::locator::Selector;
use crate::result::HarnessResult;
use crate::wait::WaitOptions;

mod cart;
mod checkout;
mod login;
mod products;

pub use cart::CartPage;
pub use checkout::{CheckoutPage, OrderSummary};
pub use login::LoginPage;
pub use products::{ProductsPage, SortMode};

/// Trait for page objects representing one page of the storefront
pub trait PageObject {
    /// Path of the page relative to the base URL (e.g. `/cart.html`)
    fn url_path(&self) -> &str;

    /// Selector that signals the page is ready for interaction
    fn ready(&self) -> &Selector;

    /// Readiness wait timeout (milliseconds)
    fn load_timeout_ms(&self) -> u64 {
        crate::config::DEFAULT_WAIT_TIMEOUT_MS
    }

    /// Page name for logging
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Navigate directly to this page and wait until it is ready
    fn open(
        &self,
        session: &Session,
        config: &SuiteConfig,
    ) -> impl std::future::Future<Output = HarnessResult<()>> {
        async {
            let url = config.page_url(self.url_path());
            tracing::debug!(page = self.page_name(), url, "opening page");
            session.goto(&url).await?;
            let options = WaitOptions::new().with_timeout(self.load_timeout_ms());
            session.wait_for(self.ready(), &options).await
        }
    }
}
