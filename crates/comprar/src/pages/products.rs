//! Inventory (products) page.

use crate::browser::Session;
use crate::locator::Selector;
use crate::pages::PageObject;
use crate::prices::parse_price;
use crate::result::HarnessResult;

/// Sort orders offered by the inventory page's dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Name A to Z
    NameAsc,
    /// Name Z to A
    NameDesc,
    /// Price low to high
    PriceLowHigh,
    /// Price high to low
    PriceHighLow,
}

impl SortMode {
    /// The `<option>` value the storefront uses for this mode
    #[must_use]
    pub const fn option_value(&self) -> &'static str {
        match self {
            Self::NameAsc => "az",
            Self::NameDesc => "za",
            Self::PriceLowHigh => "lohi",
            Self::PriceHighLow => "hilo",
        }
    }

    /// Whether a name list is ordered per this mode's comparator.
    ///
    /// Always false for the price modes; sorting by price says nothing
    /// about name order.
    #[must_use]
    pub fn names_ordered(&self, names: &[String]) -> bool {
        match self {
            Self::NameAsc => names.windows(2).all(|pair| pair[0] <= pair[1]),
            Self::NameDesc => names.windows(2).all(|pair| pair[0] >= pair[1]),
            Self::PriceLowHigh | Self::PriceHighLow => false,
        }
    }

    /// Whether a price list is ordered per this mode's comparator
    #[must_use]
    pub fn prices_ordered(&self, prices: &[f64]) -> bool {
        match self {
            Self::PriceLowHigh => prices.windows(2).all(|pair| pair[0] <= pair[1]),
            Self::PriceHighLow => prices.windows(2).all(|pair| pair[0] >= pair[1]),
            Self::NameAsc | Self::NameDesc => false,
        }
    }
}

/// The inventory listing shown after login
#[derive(Debug, Clone)]
pub struct ProductsPage {
    path: String,
    inventory_list: Selector,
    sort_select: Selector,
    item_names: Selector,
    item_prices: Selector,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsPage {
    /// Create the page object
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: String::from("/inventory.html"),
            inventory_list: Selector::css(".inventory_list"),
            sort_select: Selector::css(".product_sort_container"),
            item_names: Selector::css(".inventory_item_name"),
            item_prices: Selector::css(".inventory_item_price"),
        }
    }

    /// Apply a sort order via the dropdown
    pub async fn sort_by(&self, session: &Session, mode: SortMode) -> HarnessResult<()> {
        tracing::debug!(mode = mode.option_value(), "sorting inventory");
        session
            .select_option(&self.sort_select, mode.option_value())
            .await
    }

    /// Product names in display order
    pub async fn product_names(&self, session: &Session) -> HarnessResult<Vec<String>> {
        session.texts(&self.item_names).await
    }

    /// Product prices in display order, currency-parsed
    pub async fn product_prices(&self, session: &Session) -> HarnessResult<Vec<f64>> {
        let texts = session.texts(&self.item_prices).await?;
        texts.iter().map(|text| parse_price(text)).collect()
    }

    /// Number of products listed
    pub async fn product_count(&self, session: &Session) -> HarnessResult<usize> {
        session.count(&self.item_names).await
    }
}

impl PageObject for ProductsPage {
    fn url_path(&self) -> &str {
        &self.path
    }

    fn ready(&self) -> &Selector {
        &self.inventory_list
    }

    fn page_name(&self) -> &str {
        "products"
    }
}

#[cfg(test)]
mod sort_mode_tests {
    use super::*;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_option_values() {
        assert_eq!(SortMode::NameAsc.option_value(), "az");
        assert_eq!(SortMode::NameDesc.option_value(), "za");
        assert_eq!(SortMode::PriceLowHigh.option_value(), "lohi");
        assert_eq!(SortMode::PriceHighLow.option_value(), "hilo");
    }

    #[test]
    fn test_names_descending() {
        let sorted = names(&["Test.allTheThings()", "Sauce Labs Onesie", "Sauce Labs Bike"]);
        assert!(SortMode::NameDesc.names_ordered(&sorted));
        assert!(!SortMode::NameAsc.names_ordered(&sorted));
    }

    #[test]
    fn test_names_ascending() {
        let sorted = names(&["Sauce Labs Backpack", "Sauce Labs Bike Light"]);
        assert!(SortMode::NameAsc.names_ordered(&sorted));
    }

    #[test]
    fn test_unsorted_names_rejected() {
        let unsorted = names(&["Bolt T-Shirt", "Backpack", "Onesie"]);
        assert!(!SortMode::NameAsc.names_ordered(&unsorted));
        assert!(!SortMode::NameDesc.names_ordered(&unsorted));
    }

    #[test]
    fn test_prices_high_to_low() {
        assert!(SortMode::PriceHighLow.prices_ordered(&[49.99, 29.99, 9.99]));
        assert!(!SortMode::PriceHighLow.prices_ordered(&[9.99, 49.99]));
    }

    #[test]
    fn test_prices_low_to_high() {
        assert!(SortMode::PriceLowHigh.prices_ordered(&[7.99, 8.99, 8.99, 15.99]));
    }

    #[test]
    fn test_price_mode_rejects_name_check() {
        // A price mode makes no claim about names (and vice versa)
        assert!(!SortMode::PriceHighLow.names_ordered(&names(&["A", "B"])));
        assert!(!SortMode::NameAsc.prices_ordered(&[1.0, 2.0]));
    }

    #[test]
    fn test_single_element_is_ordered() {
        assert!(SortMode::NameDesc.names_ordered(&names(&["Only"])));
        assert!(SortMode::PriceLowHigh.prices_ordered(&[5.0]));
    }
}
