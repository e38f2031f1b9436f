//! Contact Links
//!
//! Inquiries are sent over `WhatsApp` using click-to-chat links.

use crate::urls::encode_component;

/// Base URL for click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";

/// Message used when the inquiry is not about a specific product.
pub const GENERIC_INQUIRY: &str = "Hi, I would like to inquire about your jewelry products";

/// The inquiry message text, mentioning the product when there is one.
///
/// A blank product title is treated as no product.
pub fn inquiry_message(product_title: Option<&str>) -> String {
    match product_title.filter(|title| !title.trim().is_empty()) {
        Some(title) => format!("Hi, I'm interested in {title}"),
        None => GENERIC_INQUIRY.to_string(),
    }
}

/// Build a `WhatsApp` click-to-chat link.
///
/// A missing number yields a link without a recipient (`https://wa.me/?text=...`), which opens
/// the app's contact picker instead of a chat.
pub fn whatsapp_link(product_title: Option<&str>, number: Option<&str>) -> String {
    format!(
        "{WHATSAPP_BASE_URL}/{}?text={}",
        number.unwrap_or_default(),
        encode_component(&inquiry_message(product_title))
    )
}
