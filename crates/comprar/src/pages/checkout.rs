//! Checkout flow: adding items, buyer details, summary, submission.

use crate::browser::Session;
use crate::locator::Selector;
use crate::pages::PageObject;
use crate::prices::parse_labelled;
use crate::result::HarnessResult;

/// The three summary amounts shown before order submission
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    /// Item total before tax
    pub subtotal: f64,
    /// Tax amount
    pub tax: f64,
    /// Grand total
    pub total: f64,
}

impl OrderSummary {
    /// Whether `total` equals `subtotal + tax` within the tolerance
    #[must_use]
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        (self.subtotal + self.tax - self.total).abs() <= tolerance
    }
}

/// The checkout flow, from the inventory add buttons through confirmation
#[derive(Debug, Clone)]
pub struct CheckoutPage {
    path: String,
    first_name_input: Selector,
    last_name_input: Selector,
    postal_code_input: Selector,
    continue_button: Selector,
    finish_button: Selector,
    subtotal_label: Selector,
    tax_label: Selector,
    total_label: Selector,
    confirmation_header: Selector,
}

impl Default for CheckoutPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutPage {
    /// Create the page object
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: String::from("/checkout-step-one.html"),
            first_name_input: Selector::data_test("firstName"),
            last_name_input: Selector::data_test("lastName"),
            postal_code_input: Selector::data_test("postalCode"),
            continue_button: Selector::data_test("continue"),
            finish_button: Selector::data_test("finish"),
            subtotal_label: Selector::css(".summary_subtotal_label"),
            tax_label: Selector::css(".summary_tax_label"),
            total_label: Selector::css(".summary_total_label"),
            confirmation_header: Selector::css(".complete-header"),
        }
    }

    /// Selector for a product's add button on the inventory page
    #[must_use]
    fn add_button(product: &str) -> Selector {
        Selector::descendant_of_text(".inventory_item", product, "button")
    }

    /// Add each named product to the cart from the inventory page
    pub async fn add_items_to_cart(
        &self,
        session: &Session,
        products: &[String],
    ) -> HarnessResult<()> {
        for product in products {
            tracing::debug!(product, "adding to cart");
            session.click(&Self::add_button(product)).await?;
        }
        Ok(())
    }

    /// Fill the buyer details form and continue to the summary.
    ///
    /// Scenarios arrive here from the cart's checkout click, which returns
    /// before the form document is loaded, so the first field is awaited
    /// before filling.
    pub async fn fill_details(
        &self,
        session: &Session,
        first_name: &str,
        last_name: &str,
        postal_code: &str,
    ) -> HarnessResult<()> {
        session.wait_for_default(&self.first_name_input).await?;
        session.fill(&self.first_name_input, first_name).await?;
        session.fill(&self.last_name_input, last_name).await?;
        session.fill(&self.postal_code_input, postal_code).await?;
        session.click(&self.continue_button).await
    }

    /// Item total from the summary line (`Item total: $X`)
    pub async fn subtotal(&self, session: &Session) -> HarnessResult<f64> {
        let text = session.text(&self.subtotal_label).await?;
        parse_labelled("Item total", &text)
    }

    /// Tax from the summary line (`Tax: $X`)
    pub async fn tax(&self, session: &Session) -> HarnessResult<f64> {
        let text = session.text(&self.tax_label).await?;
        parse_labelled("Tax", &text)
    }

    /// Grand total from the summary line (`Total: $X`)
    pub async fn total(&self, session: &Session) -> HarnessResult<f64> {
        let text = session.text(&self.total_label).await?;
        parse_labelled("Total", &text)
    }

    /// Read all three summary amounts.
    ///
    /// Continuing from the details form navigates to the summary page;
    /// the first label is awaited before any amount is read.
    pub async fn order_summary(&self, session: &Session) -> HarnessResult<OrderSummary> {
        session.wait_for_default(&self.subtotal_label).await?;
        Ok(OrderSummary {
            subtotal: self.subtotal(session).await?,
            tax: self.tax(session).await?,
            total: self.total(session).await?,
        })
    }

    /// Submit the order by clicking finish.
    ///
    /// Reading the outcome is a separate query, [`confirmation_message`];
    /// submission does not claim success.
    ///
    /// [`confirmation_message`]: Self::confirmation_message
    pub async fn submit_order(&self, session: &Session) -> HarnessResult<()> {
        tracing::info!("submitting order");
        session.click(&self.finish_button).await
    }

    /// Text of the completion header shown after a successful order.
    ///
    /// Waits for the header first: submission navigates to the completion
    /// page and the finish click returns before it is loaded.
    pub async fn confirmation_message(&self, session: &Session) -> HarnessResult<String> {
        session.wait_for_default(&self.confirmation_header).await?;
        session.text(&self.confirmation_header).await
    }
}

impl PageObject for CheckoutPage {
    fn url_path(&self) -> &str {
        &self.path
    }

    fn ready(&self) -> &Selector {
        &self.first_name_input
    }

    fn page_name(&self) -> &str {
        "checkout"
    }
}
