//! Card Formatting
//!
//! Price strings and image source selection for menu cards.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::MenuItem;

/// Characters `encodeURIComponent` leaves alone
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const PLACEHOLDER_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="600" height="360">
  <defs>
    <linearGradient id="g" x1="0" y1="0" x2="1" y2="1">
      <stop offset="0" stop-color="#f6f7fb"/>
      <stop offset="1" stop-color="#eef1f6"/>
    </linearGradient>
  </defs>
  <rect width="100%" height="100%" fill="url(#g)"/>
  <text x="50%" y="50%" text-anchor="middle" dominant-baseline="middle"
    font-family="Poppins, Arial" font-size="28" fill="#7a7a7a">
    Image unavailable
  </text>
</svg>"##;

/// `$` plus two decimals; empty for a missing or non-finite price
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(n) if n.is_finite() => format!("${:.2}", n),
        _ => String::new(),
    }
}

/// Inline SVG data URI reading "Image unavailable"
pub fn placeholder_image() -> String {
    format!(
        "data:image/svg+xml;charset=utf-8,{}",
        utf8_percent_encode(PLACEHOLDER_SVG, URI_COMPONENT)
    )
}

/// Item image, else the page default, else the placeholder
pub fn resolve_image(item: &MenuItem, default_image: Option<&str>) -> String {
    item.image_src()
        .or(default_image.filter(|src| !src.is_empty()))
        .map(str::to_string)
        .unwrap_or_else(placeholder_image)
}
