//! Amount type for representing currency values
//!
//! Wraps an exact `rust_decimal::Decimal` so totals never drift. Input and
//! output use the Brazilian locale: dot for thousands, comma for decimals
//! (`1.234,50`), while storage keeps the canonical dot-decimal form.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::{ContaError, ContaResult};

/// A monetary amount with exact decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Wrap a decimal value
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Parse a locale-formatted amount such as `"1.234,50"`
    ///
    /// Thousands separators are stripped before the decimal comma becomes a
    /// decimal point; swapping the two steps would turn `1.234,50` into `1.23450`.
    pub fn parse_locale(s: &str) -> ContaResult<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ContaError::Validation("Amount cannot be empty".into()));
        }

        let canonical = trimmed.replace('.', "").replace(',', ".");
        Decimal::from_str(&canonical)
            .map(Self)
            .map_err(|_| ContaError::Validation(format!("Invalid amount: '{}'", trimmed)))
    }

    /// Format with two decimals, comma decimal separator and dot thousands
    pub fn format_locale(&self) -> String {
        let mut rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        rounded.set_sign_positive(true);
        rounded.rescale(2);

        let plain = rounded.to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if negative {
            format!("-{},{}", grouped, frac_part)
        } else {
            format!("{},{}", grouped, frac_part)
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_locale())
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, m| acc + *m)
    }
}
