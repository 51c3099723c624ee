//! Price report rendering.
//!
//! Prices use four decimals, a space between thousands and a comma as the
//! decimal mark: `50000.1` renders as `50 000,1000`.

use crate::domain::{CoinName, PriceTable};

/// Header of the on-demand `/course` report.
pub const COURSE_HEADER: &str = "Current prices:";

/// Header of the scheduled report for `username`.
#[must_use]
pub fn greeting_header(username: &str) -> String {
    format!("Good morning, {username}! Current prices:")
}

/// Render one price with the report's separator convention.
#[must_use]
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return price.to_string();
    }

    let fixed = format!("{:.4}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    // "-0,0000" only when something non-zero survived rounding.
    let negative = price < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    let sign = if negative { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped},{fraction}")
    }
}

/// Render a header line followed by one `NAME - $ PRICE` line per entry.
///
/// A missing price renders as zero.
#[must_use]
pub fn format_report(header: &str, entries: &[(CoinName, Option<f64>)]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(header.to_string());
    for (name, price) in entries {
        lines.push(format!("{name} - $ {}", format_price(price.unwrap_or(0.0))));
    }
    lines.join("\n")
}

/// Pair each coin, in order, with its price from `prices`.
#[must_use]
pub fn report_entries(coins: &[CoinName], prices: &PriceTable) -> Vec<(CoinName, Option<f64>)> {
    coins
        .iter()
        .map(|coin| (coin.clone(), prices.get(coin).copied()))
        .collect()
}
