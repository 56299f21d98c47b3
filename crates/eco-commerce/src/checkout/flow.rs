//! Checkout flow state machine.
//!
//! A flow moves `Editing -> Processing -> Complete` exactly once. The
//! processing step is a fixed simulated delay; no payment is taken.

use std::time::Duration;

use crate::cart::{CartLineItem, CartState, OrderSummary, TaxRate};
use crate::checkout::{CheckoutForm, MaskedCard, Order};
use crate::ids::OrderId;
use crate::CommerceError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Default simulated processing time.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// Default order number prefix.
pub const DEFAULT_ORDER_PREFIX: &str = "ECO";

/// Where a checkout flow is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStatus {
    /// Form being filled in.
    #[default]
    Editing,
    /// Order submitted, waiting on processing.
    Processing,
    /// Order placed.
    Complete,
}

impl CheckoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStatus::Editing => "editing",
            CheckoutStatus::Processing => "processing",
            CheckoutStatus::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStatus::Editing => "Editing",
            CheckoutStatus::Processing => "Processing",
            CheckoutStatus::Complete => "Complete",
        }
    }
}

/// Knobs for the simulated checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    pub tax_rate: TaxRate,
    pub processing_delay: Duration,
    pub order_prefix: String,
}

impl CheckoutConfig {
    /// Set the tax rate.
    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    /// Set the processing delay.
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// Set the order number prefix.
    pub fn with_order_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.order_prefix = prefix.into();
        self
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate: TaxRate::STANDARD,
            processing_delay: DEFAULT_PROCESSING_DELAY,
            order_prefix: DEFAULT_ORDER_PREFIX.to_string(),
        }
    }
}

/// What `begin` captured, held until `confirm`.
#[derive(Debug, Clone, PartialEq)]
struct Submission {
    form: CheckoutForm,
    items: Vec<CartLineItem>,
    summary: OrderSummary,
}

/// One checkout attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutFlow {
    order_number: OrderId,
    status: CheckoutStatus,
    config: CheckoutConfig,
    submission: Option<Submission>,
}

impl CheckoutFlow {
    /// Start a flow. The order number is assigned now.
    pub fn new(config: CheckoutConfig) -> Self {
        let order_number = OrderId::generate(&config.order_prefix, Utc::now());
        Self {
            order_number,
            status: CheckoutStatus::Editing,
            config,
            submission: None,
        }
    }

    pub fn order_number(&self) -> &OrderId {
        &self.order_number
    }

    pub fn status(&self) -> CheckoutStatus {
        self.status
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Summary captured by `begin`, if submitted.
    pub fn summary(&self) -> Option<&OrderSummary> {
        self.submission.as_ref().map(|s| &s.summary)
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.status == CheckoutStatus::Complete
    }

    fn transition_error(&self, to: CheckoutStatus) -> CommerceError {
        CommerceError::InvalidCheckoutTransition {
            from: self.status.as_str().to_string(),
            to: to.as_str().to_string(),
        }
    }

    /// Submit the form against a cart.
    ///
    /// Snapshots the cart lines and the order summary and moves to
    /// `Processing`. The flow is unchanged on error.
    pub fn begin(
        &mut self,
        cart: &CartState,
        form: &CheckoutForm,
    ) -> Result<&OrderSummary, CommerceError> {
        if self.status != CheckoutStatus::Editing {
            return Err(self.transition_error(CheckoutStatus::Processing));
        }
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;

        let summary = OrderSummary::for_cart(cart, self.config.tax_rate);
        tracing::info!(
            order_number = %self.order_number,
            items = cart.item_count(),
            grand_total = summary.grand_total.amount(),
            "checkout submitted"
        );

        self.status = CheckoutStatus::Processing;
        let submission = self.submission.insert(Submission {
            form: form.clone(),
            items: cart.items().to_vec(),
            summary,
        });
        Ok(&submission.summary)
    }

    /// Finish processing and produce the order.
    pub fn confirm(&mut self) -> Result<Order, CommerceError> {
        let submission = match (self.status, &self.submission) {
            (CheckoutStatus::Processing, Some(submission)) => submission,
            _ => return Err(self.transition_error(CheckoutStatus::Complete)),
        };

        let order = Order {
            order_number: self.order_number.clone(),
            email: submission.form.email.trim().to_string(),
            shipping_address: submission.form.shipping_address(),
            items: submission.items.clone(),
            summary: submission.summary,
            card: MaskedCard::from_number(&submission.form.card_number),
            placed_at: Utc::now(),
        };
        self.status = CheckoutStatus::Complete;

        tracing::info!(
            order_number = %order.order_number,
            grand_total = order.summary.grand_total.amount(),
            "order placed"
        );
        Ok(order)
    }

    /// Submit, wait out the processing delay, and confirm.
    ///
    /// Returns the order and the emptied cart that replaces `cart`.
    pub async fn place_order(
        &mut self,
        cart: &CartState,
        form: &CheckoutForm,
    ) -> Result<(Order, CartState), CommerceError> {
        self.begin(cart, form)?;

        if !self.config.processing_delay.is_zero() {
            tracing::debug!(
                delay_ms = self.config.processing_delay.as_millis() as u64,
                "processing order"
            );
            tokio::time::sleep(self.config.processing_delay).await;
        }

        let order = self.confirm()?;
        Ok((order, cart.clear()))
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new(CheckoutConfig::default())
    }
}
