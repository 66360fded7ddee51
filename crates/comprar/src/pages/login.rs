//! Login page.

use crate::browser::Session;
use crate::locator::Selector;
use crate::pages::PageObject;
use crate::result::HarnessResult;

/// The login form at the storefront root
#[derive(Debug, Clone)]
pub struct LoginPage {
    path: String,
    username_input: Selector,
    password_input: Selector,
    login_button: Selector,
    error_banner: Selector,
    inventory_marker: Selector,
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    /// Create the page object
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: String::from("/"),
            username_input: Selector::css("#user-name"),
            password_input: Selector::css("#password"),
            login_button: Selector::css("#login-button"),
            error_banner: Selector::data_test("error"),
            inventory_marker: Selector::css(".inventory_list"),
        }
    }

    /// Fill both credential fields and submit the form
    pub async fn login(
        &self,
        session: &Session,
        username: &str,
        password: &str,
    ) -> HarnessResult<()> {
        tracing::info!(username, "logging in");
        session.fill(&self.username_input, username).await?;
        session.fill(&self.password_input, password).await?;
        self.submit(session).await
    }

    /// Click the login button without touching the fields.
    ///
    /// Used by the empty-submission edge case, where the site must report
    /// that a username is required.
    pub async fn submit(&self, session: &Session) -> HarnessResult<()> {
        session.click(&self.login_button).await
    }

    /// Whether the post-login inventory marker is visible
    pub async fn is_logged_in(&self, session: &Session) -> HarnessResult<bool> {
        session.is_visible(&self.inventory_marker).await
    }

    /// Wait until the post-login inventory appears.
    ///
    /// A successful submit navigates to the inventory page, and the click
    /// returns before the new document is loaded. Flows that expect the
    /// login to succeed wait here; [`is_logged_in`] stays an immediate
    /// check for the flows that expect it to fail.
    ///
    /// [`is_logged_in`]: Self::is_logged_in
    pub async fn wait_for_inventory(&self, session: &Session) -> HarnessResult<()> {
        session.wait_for_default(&self.inventory_marker).await
    }

    /// Text of the error banner.
    ///
    /// An absent banner is an explicit [`ElementNotFound`] error, never an
    /// empty string.
    ///
    /// [`ElementNotFound`]: crate::result::HarnessError::ElementNotFound
    pub async fn error_message(&self, session: &Session) -> HarnessResult<String> {
        session.text(&self.error_banner).await
    }
}

impl PageObject for LoginPage {
    fn url_path(&self) -> &str {
        &self.path
    }

    fn ready(&self) -> &Selector {
        &self.login_button
    }

    fn page_name(&self) -> &str {
        "login"
    }
}
