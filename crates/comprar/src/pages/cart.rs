//! Cart page.

use crate::browser::Session;
use crate::locator::Selector;
use crate::pages::PageObject;
use crate::prices::parse_price;
use crate::result::{HarnessError, HarnessResult};

/// The shopping cart
#[derive(Debug, Clone)]
pub struct CartPage {
    path: String,
    cart_link: Selector,
    badge: Selector,
    cart_list: Selector,
    item_names: Selector,
    item_prices: Selector,
    checkout_button: Selector,
}

impl Default for CartPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CartPage {
    /// Create the page object
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: String::from("/cart.html"),
            cart_link: Selector::css(".shopping_cart_link"),
            badge: Selector::css(".shopping_cart_badge"),
            cart_list: Selector::css(".cart_list"),
            item_names: Selector::css(".cart_item .inventory_item_name"),
            item_prices: Selector::css(".cart_item .inventory_item_price"),
            checkout_button: Selector::data_test("checkout"),
        }
    }

    /// Open the cart via the header icon and wait for the list
    pub async fn open_via_icon(&self, session: &Session) -> HarnessResult<()> {
        session.click(&self.cart_link).await?;
        session.wait_for_default(&self.cart_list).await
    }

    /// Number shown on the cart badge; 0 when the badge is absent
    pub async fn badge_count(&self, session: &Session) -> HarnessResult<usize> {
        match session.text(&self.badge).await {
            Ok(text) => {
                text.trim()
                    .parse::<usize>()
                    .map_err(|_| HarnessError::Evaluate {
                        message: format!("cart badge is not a number: {text:?}"),
                    })
            }
            Err(HarnessError::ElementNotFound { .. }) => Ok(0),
            Err(e) => Err(e),
        }
    }

    /// Names of the items in the cart, in display order
    pub async fn item_names(&self, session: &Session) -> HarnessResult<Vec<String>> {
        session.texts(&self.item_names).await
    }

    /// Prices of the items in the cart.
    ///
    /// An empty cart is an explicit [`HarnessError::EmptyCart`], so a
    /// scenario that forgot to add items fails with a reason instead of an
    /// empty list.
    pub async fn item_prices(&self, session: &Session) -> HarnessResult<Vec<f64>> {
        let texts = session.texts(&self.item_prices).await?;
        if texts.is_empty() {
            return Err(HarnessError::EmptyCart {
                operation: String::from("item_prices"),
            });
        }
        texts.iter().map(|text| parse_price(text)).collect()
    }

    /// Click through to the checkout form
    pub async fn proceed_to_checkout(&self, session: &Session) -> HarnessResult<()> {
        session.click(&self.checkout_button).await
    }
}

impl PageObject for CartPage {
    fn url_path(&self) -> &str {
        &self.path
    }

    fn ready(&self) -> &Selector {
        &self.cart_list
    }

    fn page_name(&self) -> &str {
        "cart"
    }
}

#[cfg(all(test, not(feature = "browser")))]
mod tests {
    use super::*;
    use crate::browser::Browser;
    use crate::config::SuiteConfig;

    async fn session() -> Session {
        let browser = Browser::launch(&SuiteConfig::default()).await.unwrap();
        browser.new_session().await.unwrap()
    }

    #[tokio::test]
    async fn test_open_via_icon_clicks_and_waits() {
        let session = session().await;
        let page = CartPage::new();
        session.set_visible(&Selector::css(".cart_list"), true);

        page.open_via_icon(&session).await.unwrap();
        assert_eq!(session.clicks(), vec![".shopping_cart_link".to_string()]);
    }

    #[tokio::test]
    async fn test_badge_count_absent_is_zero() {
        let session = session().await;
        let page = CartPage::new();
        assert_eq!(page.badge_count(&session).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_badge_count_parses() {
        let session = session().await;
        let page = CartPage::new();
        session.set_text(&Selector::css(".shopping_cart_badge"), "3");
        assert_eq!(page.badge_count(&session).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_item_prices_empty_cart_is_explicit() {
        let session = session().await;
        let page = CartPage::new();

        let err = page.item_prices(&session).await.unwrap_err();
        assert!(matches!(err, HarnessError::EmptyCart { .. }));
    }

    #[tokio::test]
    async fn test_item_names_and_prices() {
        let session = session().await;
        let page = CartPage::new();
        session.set_texts(
            &Selector::css(".cart_item .inventory_item_name"),
            ["Sauce Labs Backpack", "Sauce Labs Bike Light"],
        );
        session.set_texts(
            &Selector::css(".cart_item .inventory_item_price"),
            ["$29.99", "$9.99"],
        );

        let names = page.item_names(&session).await.unwrap();
        let prices = page.item_prices(&session).await.unwrap();
        assert_eq!(names.len(), 2);
        assert!((prices.iter().sum::<f64>() - 39.98).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_proceed_to_checkout() {
        let session = session().await;
        let page = CartPage::new();
        page.proceed_to_checkout(&session).await.unwrap();
        assert_eq!(session.clicks(), vec!["[data-test=\"checkout\"]".to_string()]);
    }
}
