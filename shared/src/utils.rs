//! # Shared Utility Functions
//!
//! Cosmetic helpers used when rendering inventory. They never change what is
//! sent to the backend.

use std::fmt;

/// Stock badge shown next to a material or product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    Normal,
    Warning,
    Critical,
}

impl StockLevel {
    pub fn label(&self) -> &'static str {
        match self {
            StockLevel::Normal => "normal",
            StockLevel::Warning => "low",
            StockLevel::Critical => "critical",
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a stock count against its minimum.
///
/// Critical at or below the minimum, warning up to one and a half times the
/// minimum, normal above that.
///
/// ```rust
/// use shared::utils::{stock_level, StockLevel};
///
/// assert_eq!(stock_level(10, 10), StockLevel::Critical);
/// assert_eq!(stock_level(15, 10), StockLevel::Warning);
/// assert_eq!(stock_level(16, 10), StockLevel::Normal);
/// ```
pub fn stock_level(stock: i64, min_stock: i64) -> StockLevel {
    if stock <= min_stock {
        StockLevel::Critical
    } else if stock.saturating_mul(2) <= min_stock.saturating_mul(3) {
        StockLevel::Warning
    } else {
        StockLevel::Normal
    }
}

/// Format a price with two decimals, e.g. `$1,250.50`.
pub fn format_price(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac_part)
}
