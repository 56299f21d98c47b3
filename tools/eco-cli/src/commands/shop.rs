//! Interactive shopping session.

use std::time::Duration;

use anyhow::{bail, Result};
use chrono::Local;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use eco_commerce::catalog::{CatalogProvider, Category};
use eco_commerce::checkout::{CheckoutForm, CheckoutStatus, Order};
use eco_commerce::search::PriceRange;
use eco_commerce::{Money, ProductId};

use super::ShopArgs;
use crate::context::Context;
use crate::output::{status_badge, Output};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Browse,
    Search,
    Categories,
    Price,
    ResetFilters,
    ViewProduct,
    AddToCart,
    ViewCart,
    UpdateQuantity,
    RemoveItem,
    ClearCart,
    Checkout,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 13] = [
        MenuItem::Browse,
        MenuItem::Search,
        MenuItem::Categories,
        MenuItem::Price,
        MenuItem::ResetFilters,
        MenuItem::ViewProduct,
        MenuItem::AddToCart,
        MenuItem::ViewCart,
        MenuItem::UpdateQuantity,
        MenuItem::RemoveItem,
        MenuItem::ClearCart,
        MenuItem::Checkout,
        MenuItem::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuItem::Browse => "Browse products",
            MenuItem::Search => "Search",
            MenuItem::Categories => "Filter by category",
            MenuItem::Price => "Filter by price",
            MenuItem::ResetFilters => "Clear all filters",
            MenuItem::ViewProduct => "View product",
            MenuItem::AddToCart => "Add to cart",
            MenuItem::ViewCart => "View cart",
            MenuItem::UpdateQuantity => "Change quantity",
            MenuItem::RemoveItem => "Remove item",
            MenuItem::ClearCart => "Clear cart",
            MenuItem::Checkout => "Checkout",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if !ctx.output.is_interactive() {
        bail!("`eco shop` needs an interactive terminal; use `eco products` and `eco cart` instead");
    }

    let mut session = ctx.session()?;
    if args.instant {
        let checkout = session
            .checkout_config()
            .clone()
            .with_processing_delay(Duration::ZERO);
        session = session.with_checkout_config(checkout);
    }

    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
    tracing::info!(store = %ctx.config.store.name, products = session.catalog().len(), "shop session started");
    ctx.output.header(&format!("Welcome to {}", ctx.config.store.name));

    loop {
        let prompt = format!(
            "Cart: {} items, {}",
            session.cart().item_count(),
            ctx.output.money(session.cart().total())
        );
        let Some(choice) = Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };

        match MenuItem::ALL[choice] {
            MenuItem::Browse => {
                super::products::print_results(&ctx.output, &session.visible());
            }
            MenuItem::Search => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt("Search products")
                    .with_initial_text(session.criteria().search_text.clone())
                    .allow_empty(true)
                    .interact_text()?;
                session.criteria_mut().search_text = text.trim().to_string();
                ctx.output.info(&session.visible().summary());
            }
            MenuItem::Categories => pick_categories(&theme, &mut session)?,
            MenuItem::Price => pick_price(&theme, ctx, &mut session)?,
            MenuItem::ResetFilters => {
                session.criteria_mut().reset(ctx.config.price_ceiling());
                ctx.output.success("Filters cleared");
            }
            MenuItem::ViewProduct => {
                if let Some(id) = pick_product(&theme, &ctx.output, &session, "View which product?")? {
                    let product = session.catalog().get(&id)?;
                    super::show::print_product(&ctx.output, product);
                    if Confirm::with_theme(&theme)
                        .with_prompt("Add to cart?")
                        .default(false)
                        .interact()?
                    {
                        add_to_cart(&theme, &ctx.output, &mut session, &id)?;
                    }
                }
            }
            MenuItem::AddToCart => {
                if let Some(id) = pick_product(&theme, &ctx.output, &session, "Add which product?")? {
                    add_to_cart(&theme, &ctx.output, &mut session, &id)?;
                }
            }
            MenuItem::ViewCart => super::cart::print_cart(&ctx.output, &session),
            MenuItem::UpdateQuantity => {
                if let Some(id) = pick_line(&theme, &ctx.output, &session)? {
                    let quantity: i64 = Input::with_theme(&theme)
                        .with_prompt("New quantity (0 removes)")
                        .default(i64::from(session.cart().quantity_of(&id)))
                        .interact_text()?;
                    session.set_quantity(&id, quantity);
                }
            }
            MenuItem::RemoveItem => {
                if let Some(id) = pick_line(&theme, &ctx.output, &session)? {
                    session.remove(&id);
                    ctx.output.success("Item removed");
                }
            }
            MenuItem::ClearCart => {
                if session.cart().is_empty() {
                    ctx.output.info("Your cart is already empty");
                } else if Confirm::with_theme(&theme)
                    .with_prompt("Remove everything from your cart?")
                    .default(false)
                    .interact()?
                {
                    session.clear();
                    ctx.output.success("Cart cleared");
                }
            }
            MenuItem::Checkout => checkout(&theme, &ctx.output, &mut session).await?,
            MenuItem::Quit => break,
        }
    }

    ctx.output.info("Thanks for shopping sustainably!");
    Ok(())
}

fn pick_categories(theme: &ColorfulTheme, session: &mut Session) -> Result<()> {
    loop {
        let labels = Category::picker_labels();
        let items: Vec<String> = labels
            .iter()
            .map(|label| {
                let mark = if session.criteria().categories.contains(label) {
                    "[x]"
                } else {
                    "[ ]"
                };
                format!("{} {}", mark, label)
            })
            .chain(std::iter::once("Done".to_string()))
            .collect();

        let choice = Select::with_theme(theme)
            .with_prompt("Toggle categories")
            .items(&items)
            .default(items.len() - 1)
            .interact_opt()?;

        match choice {
            Some(index) if index < labels.len() => {
                session.criteria_mut().categories.toggle(labels[index]);
            }
            _ => return Ok(()),
        }
    }
}

fn pick_price(theme: &ColorfulTheme, ctx: &Context, session: &mut Session) -> Result<()> {
    let ceiling = ctx.config.filters.price_ceiling;
    let step = ctx.config.filters.price_step;
    let current = session.criteria().price_range;

    let min: i64 = Input::with_theme(theme)
        .with_prompt(format!("Minimum price (0-{}, step {})", ceiling, step))
        .default(current.min.amount())
        .interact_text()?;
    let max: i64 = Input::with_theme(theme)
        .with_prompt(format!("Maximum price (0-{}, step {})", ceiling, step))
        .default(current.max.amount())
        .interact_text()?;

    let range = PriceRange::new(
        Money::new(snap_to_step(min, step, ceiling)),
        Money::new(snap_to_step(max, step, ceiling)),
    );
    session.criteria_mut().price_range = range;
    ctx.output.info(&format!(
        "Price: {} - {}. {}",
        ctx.output.money(range.min),
        ctx.output.money(range.max),
        session.visible().summary()
    ));
    Ok(())
}

/// Clamp a slider value into `[0, ceiling]` and round it to the nearest step.
fn snap_to_step(value: i64, step: i64, ceiling: i64) -> i64 {
    let value = value.clamp(0, ceiling.max(0));
    if step <= 0 {
        return value;
    }
    let snapped = (value + step / 2) / step * step;
    snapped.min(ceiling)
}

fn pick_product(
    theme: &ColorfulTheme,
    output: &Output,
    session: &Session,
    prompt: &str,
) -> Result<Option<ProductId>> {
    let visible = session.visible();
    if visible.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = visible
        .items
        .iter()
        .map(|p| format!("{} ({})", p.name, output.money(p.price)))
        .collect();
    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| visible.items[index].id.clone()))
}

fn pick_line(theme: &ColorfulTheme, output: &Output, session: &Session) -> Result<Option<ProductId>> {
    let lines = session.cart().items();
    if lines.is_empty() {
        output.info("Your cart is empty");
        return Ok(None);
    }

    let items: Vec<String> = lines
        .iter()
        .map(|l| format!("{} x{}", l.product.name, l.quantity))
        .collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Which item?")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(choice.map(|index| lines[index].product_id().clone()))
}

fn add_to_cart(
    theme: &ColorfulTheme,
    output: &Output,
    session: &mut Session,
    id: &ProductId,
) -> Result<()> {
    let count: u32 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .default(1)
        .interact_text()?;
    if count == 0 {
        return Ok(());
    }

    let product = session.add(id, count)?;
    if !product.in_stock {
        output.warn(&format!("{} is currently out of stock", product.name));
    }
    output.success(&format!("Added {} x {} to cart", count, product.name));
    Ok(())
}

fn ask(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() {
                Err("This field is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value)
}

fn prompt_form(theme: &ColorfulTheme) -> Result<CheckoutForm> {
    let email: String = Input::with_theme(theme)
        .with_prompt("Email")
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.contains('@') {
                Ok(())
            } else {
                Err("Enter a valid email address")
            }
        })
        .interact_text()?;

    Ok(CheckoutForm {
        email,
        first_name: ask(theme, "First name")?,
        last_name: ask(theme, "Last name")?,
        address: ask(theme, "Address")?,
        city: ask(theme, "City")?,
        state: ask(theme, "State")?,
        zip_code: ask(theme, "ZIP code")?,
        card_number: ask(theme, "Card number")?,
        expiry_date: ask(theme, "Expiry date (MM/YY)")?,
        cvv: ask(theme, "CVV")?,
        name_on_card: ask(theme, "Name on card")?,
    })
}

async fn checkout(theme: &ColorfulTheme, output: &Output, session: &mut Session) -> Result<()> {
    if session.cart().is_empty() {
        output.warn("Your cart is empty");
        return Ok(());
    }

    super::cart::print_cart(output, session);
    output.header("Checkout");
    let form = prompt_form(theme)?;

    let total = output.money(session.summary().grand_total);
    if !Confirm::with_theme(theme)
        .with_prompt(format!("Place order for {}?", total))
        .default(true)
        .interact()?
    {
        output.warn("Checkout cancelled");
        return Ok(());
    }

    let mut flow = session.start_checkout();
    let spinner = output.spinner("Processing order...");
    let result = session.checkout(&mut flow, &form).await;
    spinner.finish_and_clear();

    match result {
        Ok(order) => print_order(output, &order, flow.status()),
        Err(e) => output.error(&e.to_string()),
    }
    Ok(())
}

fn print_order(output: &Output, order: &Order, status: CheckoutStatus) {
    output.success("Order placed successfully!");
    output.kv("Order number", order.order_number.as_str());
    output.kv("Status", &status_badge(status));
    output.kv("Items", &order.item_count().to_string());
    output.kv("Total", &output.money(order.summary.grand_total));
    output.kv("Card", &order.card.to_string());
    output.kv("Ship to", &order.shipping_address.one_line());
    output.kv(
        "Placed",
        &order
            .placed_at
            .with_timezone(&Local)
            .format("%d %b %Y, %H:%M")
            .to_string(),
    );
    output.info(&format!("A confirmation will be sent to {}", order.email));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_step() {
        assert_eq!(snap_to_step(2000, 500, 8000), 2000);
        assert_eq!(snap_to_step(2240, 500, 8000), 2000);
        assert_eq!(snap_to_step(2250, 500, 8000), 2500);
        assert_eq!(snap_to_step(-10, 500, 8000), 0);
        assert_eq!(snap_to_step(9000, 500, 8000), 8000);
        assert_eq!(snap_to_step(1234, 0, 8000), 1234);
    }

    #[test]
    fn test_menu_labels_are_unique() {
        let mut labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), MenuItem::ALL.len());
    }
}
