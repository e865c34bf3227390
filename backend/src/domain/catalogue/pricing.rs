//! Money and discount primitives plus the effective price computation.
//!
//! Prices are stored as `NUMERIC(20, 2)` and discounts as `NUMERIC(5, 2)`;
//! a discount is capped at 100 so it always fits its column.
//! Both are rounded to two decimal places on construction, midpoint away
//! from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::CatalogueValidationError;

const SCALE: u32 = 2;
const PRICE_DIGITS: u32 = 20;

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Exclusive upper bound of the integer part for a `NUMERIC(digits, 2)`.
fn integer_bound(digits: u32) -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(digits - SCALE), 0)
}

/// Non-negative monetary amount with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Round `value` to cents and check it fits the price column.
    ///
    /// # Examples
    /// ```
    /// use reverence::domain::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let price = Money::try_new(Decimal::new(19_995, 3), "price").unwrap();
    /// assert_eq!(price.to_string(), "20.00");
    /// ```
    pub fn try_new(value: Decimal, field: &'static str) -> Result<Self, CatalogueValidationError> {
        let rounded = round_money(value);
        if rounded.is_sign_negative() && !rounded.is_zero() {
            return Err(CatalogueValidationError::Negative { field });
        }
        if rounded >= integer_bound(PRICE_DIGITS) {
            return Err(CatalogueValidationError::PrecisionOverflow {
                field,
                digits: PRICE_DIGITS,
            });
        }
        Ok(Self(normalise_scale(rounded)))
    }

    /// Underlying decimal value.
    pub fn amount(self) -> Decimal {
        self.0
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Percentage in the closed range `0..=100` with two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(Decimal);

impl Percentage {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Round `value` to two decimals and require `0 <= value <= 100`.
    pub fn try_new(value: Decimal, field: &'static str) -> Result<Self, CatalogueValidationError> {
        let rounded = round_money(value);
        if (rounded.is_sign_negative() && !rounded.is_zero()) || rounded > Decimal::ONE_HUNDRED {
            return Err(CatalogueValidationError::PercentageOutOfRange { field });
        }
        Ok(Self(normalise_scale(rounded)))
    }

    /// Underlying decimal value.
    pub fn value(self) -> Decimal {
        self.0
    }

    /// Whether the percentage is strictly positive.
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl std::fmt::Display for Percentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Keep a fixed scale of two so `80` renders as `80.00`, and drop the sign
/// from negative zero.
fn normalise_scale(value: Decimal) -> Decimal {
    let mut value = if value.is_zero() { Decimal::ZERO } else { value };
    value.rescale(SCALE);
    value
}

/// Price after applying `discount` percent, or `price` when there is no
/// discount.
///
/// # Examples
/// ```
/// use reverence::domain::{Money, Percentage, effective_price};
/// use rust_decimal::Decimal;
///
/// let price = Money::try_new(Decimal::new(10_000, 2), "price").unwrap();
/// let discount = Percentage::try_new(Decimal::new(2_000, 2), "discount").unwrap();
/// assert_eq!(effective_price(price, discount).to_string(), "80.00");
/// ```
pub fn effective_price(price: Money, discount: Percentage) -> Money {
    if !discount.is_positive() {
        return price;
    }
    let factor = Decimal::ONE - discount.value() / Decimal::ONE_HUNDRED;
    // A factor within [0, 1] keeps the result inside the price column.
    Money(normalise_scale(round_money(price.amount() * factor)))
}
