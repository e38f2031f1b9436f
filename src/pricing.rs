//! Price Display

use rust_decimal::Decimal;
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Currency the storefront displays prices in.
pub fn display_currency() -> &'static Currency {
    iso::INR
}

/// Format a price in the display currency.
pub fn display_price(price: Decimal) -> String {
    display_price_in(price, display_currency())
}

/// Format a price in the given currency.
pub fn display_price_in(price: Decimal, currency: &Currency) -> String {
    Money::from_decimal(price, currency).to_string()
}
