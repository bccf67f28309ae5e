//! Money type for representing monetary values.
//!
//! Uses integer amounts in the smallest charged unit to avoid the
//! floating-point precision issues that plague monetary calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Get the number of decimal places shown for this currency.
    ///
    /// INR prices in the store are quoted in whole rupees; paise are
    /// never charged.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::INR => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest charged unit of the currency
/// (whole rupees for INR, cents for USD).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest charged unit.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a whole-rupee amount.
    ///
    /// ```
    /// use arva_commerce::money::Money;
    /// let price = Money::rupees(899);
    /// assert_eq!(price.display(), "\u{20b9}899");
    /// ```
    pub fn rupees(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Format as a display string (e.g., "₹899").
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            format!("{}{}", self.currency.symbol(), self.amount)
        } else {
            let divisor = 10_i64.pow(places);
            let decimal = self.amount as f64 / divisor as f64;
            format!("{}{:.places$}", self.currency.symbol(), decimal, places = places as usize)
        }
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the sum overflows. Use
    /// `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("currency mismatch or overflow in addition")
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if the currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_add(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the difference overflows.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("currency mismatch or overflow in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount.checked_sub(other.amount)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    /// Panics on overflow. Use `try_multiply` for fallible multiplication.
    pub fn multiply(&self, factor: i64) -> Money {
        self.try_multiply(factor).expect("overflow in multiplication")
    }

    /// Try to multiply by a scalar, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a decimal factor, rounding half away from zero to the
    /// nearest unit (e.g., for tax rates).
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let amount = (self.amount as f64 * factor).round() as i64;
        Money::new(amount, self.currency)
    }

    /// Sum an iterator of Money values.
    ///
    /// Returns `None` if any currency differs from `currency` or the sum
    /// overflows.
    pub fn try_sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        let mut total = Money::zero(currency);
        for m in iter {
            total = total.try_add(m)?;
        }
        Some(total)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Serde helpers for fields that carry a bare amount on the wire.
///
/// The product feed writes prices as plain numbers in rupees; these
/// modules map them to and from `Money`.
pub mod as_amount {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(money.amount)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        let amount = i64::deserialize(deserializer)?;
        Ok(Money::new(amount, Currency::default()))
    }
}

/// Like [`as_amount`], for optional fields.
pub mod as_optional_amount {
    use super::{Currency, Money};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        money: &Option<Money>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match money {
            Some(m) => serializer.serialize_some(&m.amount),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Money>, D::Error> {
        let amount = Option::<i64>::deserialize(deserializer)?;
        Ok(amount.map(|a| Money::new(a, Currency::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_creation() {
        let m = Money::rupees(899);
        assert_eq!(m.amount, 899);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_display() {
        let m = Money::rupees(2499);
        assert_eq!(m.display(), "\u{20b9}2499");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::rupees(1000);
        let b = Money::rupees(500);
        assert_eq!((a + b).amount, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::rupees(999);
        let b = Money::rupees(850);
        assert_eq!(a.subtract(&b).amount, 149);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::rupees(899);
        assert_eq!(m.multiply(3).amount, 2697);
    }

    #[test]
    fn test_multiply_decimal_rounds_to_nearest() {
        let m = Money::rupees(850);
        assert_eq!(m.multiply_decimal(0.18).amount, 153);

        // 851 * 0.18 = 153.18, rounds down
        let m = Money::rupees(851);
        assert_eq!(m.multiply_decimal(0.18).amount, 153);

        // 875 * 0.18 = 157.5, rounds half up
        let m = Money::rupees(875);
        assert_eq!(m.multiply_decimal(0.18).amount, 158);
    }

    #[test]
    fn test_try_sum() {
        let amounts = [Money::rupees(899), Money::rupees(1199)];
        let total = Money::try_sum(amounts.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount, 2098);
    }

    #[test]
    fn test_try_sum_currency_mismatch() {
        let amounts = [Money::rupees(899), Money::new(100, Currency::USD)];
        assert!(Money::try_sum(amounts.iter(), Currency::INR).is_none());
    }

    #[test]
    fn test_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::INR);
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    #[should_panic(expected = "currency mismatch")]
    fn test_money_currency_mismatch() {
        let inr = Money::rupees(1000);
        let usd = Money::new(1000, Currency::USD);
        let _ = inr + usd;
    }
}
