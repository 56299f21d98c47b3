//! Shopping session state.
//!
//! The session owns the cart and the current filter. Removals, quantity
//! changes and clears go through the cart reducer; multi-unit adds use the
//! single-step `CartState::add_items`.

use eco_commerce::cart::{CartAction, CartState, OrderSummary};
use eco_commerce::catalog::{CatalogProvider, Product, StaticCatalog};
use eco_commerce::checkout::{CheckoutConfig, CheckoutFlow, CheckoutForm, Order};
use eco_commerce::search::{FilterCriteria, FilterResults};
use eco_commerce::{CommerceError, ProductId};

/// One shopper's session.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: StaticCatalog,
    cart: CartState,
    criteria: FilterCriteria,
    checkout: CheckoutConfig,
}

impl Session {
    /// Start a session with an empty cart.
    pub fn new(catalog: StaticCatalog, criteria: FilterCriteria, checkout: CheckoutConfig) -> Self {
        Self {
            catalog,
            cart: CartState::new(),
            criteria,
            checkout,
        }
    }

    /// Replace the checkout settings.
    pub fn with_checkout_config(mut self, checkout: CheckoutConfig) -> Self {
        self.checkout = checkout;
        self
    }

    pub fn catalog(&self) -> &StaticCatalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Mutable access to the filter for interactive edits.
    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn checkout_config(&self) -> &CheckoutConfig {
        &self.checkout
    }

    /// Products passing the current filter.
    pub fn visible(&self) -> FilterResults<'_> {
        self.criteria.results(self.catalog.products())
    }

    /// Order summary for the current cart.
    pub fn summary(&self) -> OrderSummary {
        OrderSummary::for_cart(&self.cart, self.checkout.tax_rate)
    }

    fn dispatch(&mut self, action: CartAction) {
        self.cart = self.cart.reduce(&action);
    }

    /// Add `count` units of a catalog product in a single cart update.
    pub fn add(&mut self, id: &ProductId, count: u32) -> Result<&Product, CommerceError> {
        let product = self.catalog.get(id)?;
        if count > 0 {
            self.cart = self.cart.add_items(product, count);
            tracing::debug!(
                product = %id,
                count,
                item_count = self.cart.item_count(),
                total = self.cart.total().amount(),
                "cart updated"
            );
        }
        Ok(product)
    }

    /// Remove a product's line.
    pub fn remove(&mut self, id: &ProductId) {
        self.dispatch(CartAction::RemoveItem {
            product_id: id.clone(),
        });
    }

    /// Set a line's quantity; zero or less removes it.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: id.clone(),
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Start a checkout flow with this session's settings.
    pub fn start_checkout(&self) -> CheckoutFlow {
        CheckoutFlow::new(self.checkout.clone())
    }

    /// Run a checkout flow to completion, replacing the cart with the
    /// emptied one on success. The cart is untouched on failure.
    pub async fn checkout(
        &mut self,
        flow: &mut CheckoutFlow,
        form: &CheckoutForm,
    ) -> Result<Order, CommerceError> {
        let (order, cart) = flow.place_order(&self.cart, form).await?;
        self.cart = cart;
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use eco_commerce::Money;

    fn session() -> Session {
        Session::new(
            StaticCatalog::sample(),
            FilterCriteria::default(),
            CheckoutConfig::default().with_processing_delay(Duration::ZERO),
        )
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = session();
        let err = session.add(&ProductId::new("99"), 1).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("99".into()));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_cart_edits() {
        let mut session = session();
        session.add(&ProductId::new("1"), 2).unwrap();
        session.add(&ProductId::new("2"), 1).unwrap();
        assert_eq!(session.summary().grand_total, Money::new(8256));

        session.set_quantity(&ProductId::new("1"), 0);
        assert_eq!(session.cart().total(), Money::new(1999));

        session.clear();
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_visible_follows_criteria() {
        let mut session = session();
        assert_eq!(session.visible().len(), 8);
        session.criteria_mut().search_text = "solar".into();
        assert_eq!(session.visible().summary(), "Showing 1 of 8 products for \"solar\"");
    }

    #[test]
    fn test_add_large_count_is_one_update() {
        let mut session = session();
        let started = std::time::Instant::now();
        session.add(&ProductId::new("8"), u32::MAX).unwrap();
        assert!(started.elapsed() < Duration::from_secs(1));
        assert_eq!(session.cart().unique_item_count(), 1);
        assert_eq!(session.cart().item_count(), u64::from(u32::MAX));
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_cart() {
        let mut session = session();
        session.add(&ProductId::new("3"), 1).unwrap();

        let mut flow = session.start_checkout();
        let err = session
            .checkout(&mut flow, &CheckoutForm::default())
            .await
            .unwrap_err();
        assert!(matches!(err, CommerceError::CheckoutIncomplete(_)));
        assert_eq!(session.cart().item_count(), 1);
    }
}
