//! Type-safe price representation using decimal arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dinars, not centimes).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a price amount out of free-form display text.
    ///
    /// Mirrors the permissive extraction used for scraped price labels:
    /// every character except digits and `.` is stripped, then the longest
    /// leading numeric run is parsed. Text with no usable number (including
    /// the empty string) yields a zero price rather than an error. A minus
    /// sign is stripped with the rest, so the result is never negative.
    #[must_use]
    pub fn parse_lenient(text: &str, currency_code: CurrencyCode) -> Self {
        let mut digits = String::with_capacity(text.len());
        let mut seen_dot = false;
        for c in text.chars() {
            match c {
                '0'..='9' => digits.push(c),
                // Keep at most one decimal point; a second one ends the run,
                // matching parseFloat-style longest-prefix extraction.
                '.' if !seen_dot => {
                    seen_dot = true;
                    digits.push(c);
                }
                '.' => break,
                _ => {}
            }
        }

        // "1." is a valid parseFloat prefix; drop the dangling dot.
        let digits = digits.trim_end_matches('.');
        let amount = digits.parse::<Decimal>().unwrap_or(Decimal::ZERO);
        Self::new(amount, currency_code)
    }

    /// Format for display with zero decimal places and the currency suffix,
    /// e.g. `"1500 DA"`.
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        format!("{} {}", rounded, self.currency_code.suffix())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    DZD,
    USD,
    EUR,
}

impl CurrencyCode {
    /// The suffix appended to displayed amounts.
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::DZD => "DA",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}
