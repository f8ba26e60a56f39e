// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Locale-style currency and magnitude formatting.
//!
//! No internationalization library is pulled in for two fixed locales; the
//! en-IN and en-US digit-grouping rules are implemented directly. INR uses
//! Indian grouping (last three digits, then groups of two), USD uses Western
//! three-digit grouping.
//!
//! All functions here are pure presentation helpers. Non-finite inputs render
//! through plain [`f64`] display (`NaN`, `inf`) rather than being rejected.

/// Group an ASCII digit string per the Indian numbering system.
///
/// `1234567` becomes `12,34,567` (lakh/crore grouping).
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut idx = head.len();
    while idx > 2 {
        groups.push(&head[idx - 2..idx]);
        idx -= 2;
    }
    groups.push(&head[..idx]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Group an ASCII digit string in threes, Western style.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn split_fixed(amount: f64, decimals: usize) -> (String, String) {
    let fixed = format!("{:.decimals$}", amount.abs(), decimals = decimals);
    match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (fixed, String::new()),
    }
}

/// Format an amount as Indian Rupees with exactly 2 fraction digits.
///
/// # Examples
///
/// ```
/// use feescan::format_currency_inr;
///
/// assert_eq!(format_currency_inr(2500.0), "₹2,500.00");
/// assert_eq!(format_currency_inr(1234567.89), "₹12,34,567.89");
/// assert_eq!(format_currency_inr(-42.5), "-₹42.50");
/// ```
pub fn format_currency_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{amount}");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let (int_part, frac_part) = split_fixed(amount, 2);
    format!("{sign}₹{}.{frac_part}", group_indian(&int_part))
}

/// Format an amount as US Dollars with 2 to 8 fraction digits.
///
/// Trailing zeros beyond the second fraction digit are trimmed, so round
/// amounts read as plain cents while sub-cent fees keep their precision.
///
/// # Examples
///
/// ```
/// use feescan::format_currency_usd;
///
/// assert_eq!(format_currency_usd(60000.0), "$60,000.00");
/// assert_eq!(format_currency_usd(0.00012345), "$0.00012345");
/// assert_eq!(format_currency_usd(1234.5), "$1,234.50");
/// ```
pub fn format_currency_usd(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("${amount}");
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let (int_part, frac_part) = split_fixed(amount, 8);
    let trimmed = frac_part.trim_end_matches('0');
    let frac = if trimmed.len() < 2 {
        &frac_part[..2]
    } else {
        trimmed
    };
    format!("{sign}${}.{frac}", group_thousands(&int_part))
}

/// Format a token amount with magnitude abbreviation.
///
/// Amounts at or above one million are shown in millions with an `M` suffix,
/// thousands with a `K` suffix, sub-unit amounts with 8 decimal places, and
/// everything else with 2. Classification is on the absolute value, so
/// negative amounts mirror their positive rendering with a leading sign.
///
/// # Examples
///
/// ```
/// use feescan::format_token_amount;
///
/// assert_eq!(format_token_amount(1_500_000.0), "1.50M");
/// assert_eq!(format_token_amount(2500.0), "2.50K");
/// assert_eq!(format_token_amount(0.5), "0.50000000");
/// assert_eq!(format_token_amount(42.0), "42.00");
/// ```
pub fn format_token_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let magnitude = amount.abs();
    if magnitude >= 1_000_000.0 {
        format!("{:.2}M", amount / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{:.2}K", amount / 1_000.0)
    } else if magnitude < 1.0 {
        format!("{amount:.8}")
    } else {
        format!("{amount:.2}")
    }
}
