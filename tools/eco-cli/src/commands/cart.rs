//! Apply cart actions and print the result.

use std::str::FromStr;

use anyhow::Result;
use eco_commerce::ProductId;
use serde_json::json;
use thiserror::Error;

use super::CartArgs;
use crate::context::Context;
use crate::output::Output;
use crate::session::Session;

/// One cart action given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartCommand {
    /// `add:<id>` or `add:<id>x<n>`.
    Add { id: ProductId, count: u32 },
    /// `remove:<id>`.
    Remove { id: ProductId },
    /// `set:<id>=<qty>`, with `qty` at most `u32::MAX`.
    Set { id: ProductId, quantity: i64 },
    /// `clear`.
    Clear,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartCommandError {
    #[error("unknown cart action '{0}' (expected add:, remove:, set: or clear)")]
    UnknownAction(String),

    #[error("missing product id in '{0}'")]
    MissingId(String),

    #[error("invalid quantity in '{0}'")]
    InvalidQuantity(String),
}

impl FromStr for CartCommand {
    type Err = CartCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("clear") {
            return Ok(CartCommand::Clear);
        }

        let (verb, rest) = s
            .split_once(':')
            .ok_or_else(|| CartCommandError::UnknownAction(s.to_string()))?;
        let require_id = |id: &str| {
            let id = id.trim();
            if id.is_empty() {
                Err(CartCommandError::MissingId(s.to_string()))
            } else {
                Ok(ProductId::new(id))
            }
        };

        match verb.to_lowercase().as_str() {
            "add" => {
                // `x<n>` is only a count suffix when <n> parses.
                let (id, count) = match rest.rsplit_once('x') {
                    Some((id, n)) if !id.is_empty() => match n.parse::<u32>() {
                        Ok(count) => (id, count),
                        Err(_) => (rest, 1),
                    },
                    _ => (rest, 1),
                };
                Ok(CartCommand::Add {
                    id: require_id(id)?,
                    count,
                })
            }
            "remove" => Ok(CartCommand::Remove {
                id: require_id(rest)?,
            }),
            "set" => {
                let (id, quantity) = rest
                    .split_once('=')
                    .ok_or_else(|| CartCommandError::InvalidQuantity(s.to_string()))?;
                let quantity = quantity
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|q| *q <= i64::from(u32::MAX))
                    .ok_or_else(|| CartCommandError::InvalidQuantity(s.to_string()))?;
                Ok(CartCommand::Set {
                    id: require_id(id)?,
                    quantity,
                })
            }
            _ => Err(CartCommandError::UnknownAction(s.to_string())),
        }
    }
}

impl CartCommand {
    /// Apply to a session. Only `add` can fail, on an unknown product.
    pub fn apply(&self, session: &mut Session) -> Result<()> {
        match self {
            CartCommand::Add { id, count } => {
                session.add(id, *count)?;
            }
            CartCommand::Remove { id } => session.remove(id),
            CartCommand::Set { id, quantity } => session.set_quantity(id, *quantity),
            CartCommand::Clear => session.clear(),
        }
        Ok(())
    }
}

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;

    for action in &args.actions {
        ctx.output.debug(&format!("Applying {:?}", action));
        action.apply(&mut session)?;
    }

    print_cart(&ctx.output, &session);
    Ok(())
}

/// Print the cart lines and the order summary.
pub fn print_cart(output: &Output, session: &Session) {
    let cart = session.cart();
    let summary = session.summary();

    if output.is_json() {
        output.json(&json!({ "cart": cart, "summary": summary }));
        return;
    }

    output.header("Shopping Cart");
    if cart.is_empty() {
        output.info("Your cart is empty");
        return;
    }

    let widths = [4, 26, 5, 12];
    output.table_row(&["ID", "Product", "Qty", "Line total"], &widths);
    for line in cart.items() {
        output.table_row(
            &[
                line.product_id().as_str(),
                &line.product.name,
                &line.quantity.to_string(),
                &output.money(line.line_total()),
            ],
            &widths,
        );
    }

    output.line("");
    output.kv(
        &format!("Subtotal ({} items)", cart.item_count()),
        &output.money(summary.subtotal),
    );
    output.kv("Shipping", "Free");
    output.kv(
        &format!("Tax ({}%)", summary.tax_rate.percent()),
        &output.money(summary.tax),
    );
    output.kv("Total", &output.money(summary.grand_total));
}
