//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use eco_commerce::cart::TaxRate;
use eco_commerce::checkout::{CheckoutConfig, DEFAULT_ORDER_PREFIX};
use eco_commerce::search::{DEFAULT_PRICE_CEILING, PRICE_STEP};
use eco_commerce::{Currency, Money};
use eco_observability::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Config file names, in lookup order.
pub const CONFIG_NAMES: [&str; 3] = ["eco.toml", ".eco.toml", "eco.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EcoConfig {
    /// Store settings.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product listing filters.
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Simulated checkout.
    #[serde(default)]
    pub checkout: CheckoutSection,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EcoConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Checkout settings for the commerce crate.
    pub fn checkout_config(&self) -> CheckoutConfig {
        CheckoutConfig::default()
            .with_tax_rate(TaxRate::from_basis_points(self.checkout.tax_rate_bps))
            .with_processing_delay(Duration::from_millis(self.checkout.processing_delay_ms))
            .with_order_prefix(self.checkout.order_prefix.clone())
    }

    /// Upper bound of the price filter.
    pub fn price_ceiling(&self) -> Money {
        Money::new(self.filters.price_ceiling)
    }

    /// Check the config for problems. Returns `(errors, warnings)`.
    pub fn problems(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.store.name.trim().is_empty() {
            errors.push("store.name is required".to_string());
        }

        if self.filters.price_ceiling <= 0 {
            errors.push("filters.price_ceiling must be positive".to_string());
        }
        if self.filters.price_step <= 0 {
            errors.push("filters.price_step must be positive".to_string());
        } else if self.filters.price_ceiling % self.filters.price_step != 0 {
            warnings.push(format!(
                "filters.price_ceiling {} is not a multiple of filters.price_step {}",
                self.filters.price_ceiling, self.filters.price_step
            ));
        }

        if self.checkout.tax_rate_bps > 10_000 {
            warnings.push(format!(
                "checkout.tax_rate_bps {} is over 100%",
                self.checkout.tax_rate_bps
            ));
        }
        if self.checkout.order_prefix.trim().is_empty() {
            errors.push("checkout.order_prefix is required".to_string());
        }
        if self.checkout.processing_delay_ms > 60_000 {
            warnings.push("checkout.processing_delay_ms is over a minute".to_string());
        }

        (errors, warnings)
    }
}

/// Store settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Display currency.
    #[serde(default)]
    pub currency: Currency,

    /// Catalog file (JSON or TOML). The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

fn default_store_name() -> String {
    "EcoShop".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            currency: Currency::default(),
            catalog: None,
        }
    }
}

/// Product listing filter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FiltersConfig {
    /// Upper bound of the price slider.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: i64,

    /// Step of the price slider.
    #[serde(default = "default_price_step")]
    pub price_step: i64,
}

fn default_price_ceiling() -> i64 {
    DEFAULT_PRICE_CEILING
}

fn default_price_step() -> i64 {
    PRICE_STEP
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            price_ceiling: default_price_ceiling(),
            price_step: default_price_step(),
        }
    }
}

/// Simulated checkout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSection {
    /// Tax rate in basis points (1800 = 18%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Simulated processing time.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,

    /// Order number prefix.
    #[serde(default = "default_order_prefix")]
    pub order_prefix: String,
}

fn default_tax_rate_bps() -> u32 {
    TaxRate::STANDARD.basis_points()
}

fn default_processing_delay_ms() -> u64 {
    2000
}

fn default_order_prefix() -> String {
    DEFAULT_ORDER_PREFIX.to_string()
}

impl Default for CheckoutSection {
    fn default() -> Self {
        Self {
            tax_rate_bps: default_tax_rate_bps(),
            processing_delay_ms: default_processing_delay_ms(),
            order_prefix: default_order_prefix(),
        }
    }
}

/// Generate a default eco.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# EcoShop storefront configuration

[store]
name = "{name}"
currency = "INR"
# catalog = "catalog.json"

[filters]
price_ceiling = {ceiling}
price_step = {step}

[checkout]
tax_rate_bps = {tax}
processing_delay_ms = {delay}
order_prefix = "{prefix}"

[logging]
level = "warn"
format = "human"
"#,
        name = name,
        ceiling = DEFAULT_PRICE_CEILING,
        step = PRICE_STEP,
        tax = default_tax_rate_bps(),
        delay = default_processing_delay_ms(),
        prefix = DEFAULT_ORDER_PREFIX,
    )
}
