//! Text formatting for rendered markup.

use ks_site_types::{ALL_LABEL, CategoryFilter, Price};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone.
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

/// Shown in place of a price that is not a number.
pub const PRICE_UNAVAILABLE: &str = "\u{2014}";

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a URL component the way browsers' `encodeURIComponent` does.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Two decimals, `,` as decimal separator and `.` between thousands (pt-BR).
/// Infinite amounts render as `∞`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_infinite() {
        return if amount < 0.0 { "-\u{221e}" } else { "\u{221e}" }.to_owned();
    }
    let (whole, cents) = round_cents(amount.abs());

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let negative = amount < 0.0 && (whole != "0" || cents != "00");
    format!("{}{},{}", if negative { "-" } else { "" }, grouped, cents)
}

/// Split a non-negative amount into whole digits and two cent digits,
/// rounding half-up on its shortest decimal form. `1.005` is `("1", "01")`,
/// where `{:.2}` would round the binary value down.
fn round_cents(amount: f64) -> (String, String) {
    let shortest = amount.to_string();
    let (whole, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<char> = whole
        .chars()
        .chain(frac.chars().chain(std::iter::repeat('0')).take(2))
        .collect();
    if frac.chars().nth(2).is_some_and(|d| d >= '5') {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == '9' {
                *d = '0';
            } else {
                *d = char::from(*d as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, '1');
        }
    }

    let cents = digits.split_off(digits.len() - 2);
    (digits.into_iter().collect(), cents.into_iter().collect())
}

pub fn price_text(price: Price) -> String {
    match price {
        Price::Amount(amount) => format_amount(amount),
        Price::Unavailable => PRICE_UNAVAILABLE.to_owned(),
    }
}

/// Human label for a raw category name.
pub fn category_label(name: &str) -> String {
    match name {
        "" => String::new(),
        "pratosPrincipais" | "PratosPrincipais" => "Pratos principais".to_owned(),
        _ => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

pub fn filter_label(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => ALL_LABEL.to_owned(),
        CategoryFilter::Named(name) => category_label(name),
    }
}
