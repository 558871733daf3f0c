//! Decimal money amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits shown whenever an amount is rendered.
const DISPLAY_SCALE: u32 = 2;

/// An exact decimal money amount.
///
/// Equality and ordering compare numeric value, so `50.0` equals `50.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn is_greater_than_zero(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_greater_than(&self, other: Money) -> bool {
        self.amount > other.amount
    }

    /// Adds two amounts, returning `None` on overflow.
    pub fn add(&self, other: Money) -> Option<Money> {
        self.amount.checked_add(other.amount).map(Money::new)
    }

    /// Multiplies by a quantity, returning `None` on overflow.
    pub fn multiply(&self, quantity: u32) -> Option<Money> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(Money::new)
    }

    /// Sums the amounts, returning `None` if any partial sum overflows.
    ///
    /// An empty iterator sums to zero.
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |acc, m| acc.add(*m))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self { amount }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        write!(f, "{rounded}")
    }
}
