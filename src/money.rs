//! Minor-unit euro amounts.

use std::fmt;

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};

/// ISO currency code for every amount in the store.
pub const CURRENCY: &str = "EUR";

/// A non-negative euro amount in minor units (cents).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Zero cents.
    pub const ZERO: Amount = Amount(0);

    /// Creates an amount from minor units.
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Amount(minor)
    }

    /// Returns the amount in minor units.
    #[must_use]
    pub const fn to_minor(self) -> u64 {
        self.0
    }

    /// Converts a decimal major-unit amount (euros) into minor units,
    /// rounding half-up. Returns `None` for negative or unrepresentable
    /// values.
    #[must_use]
    pub fn from_major(major: Decimal) -> Option<Self> {
        let minor = major
            .checked_mul(Decimal::ONE_HUNDRED)?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        minor.to_u64().map(Amount)
    }

    /// Returns the amount in major units (euros) as an exact decimal.
    #[must_use]
    pub fn to_major(self) -> Decimal {
        Decimal::from(self.0) / Decimal::ONE_HUNDRED
    }

    /// Calculates `percent` of this amount, rounded half-up to the nearest
    /// cent. `percent` is clamped to `0..=100`; the result never exceeds the
    /// amount itself.
    #[must_use]
    pub fn percent_of(self, percent: Decimal) -> Self {
        let percent = percent.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

        let Some(minor) = Decimal::from_u64(self.0) else {
            return Amount::ZERO;
        };

        let applied = (minor * percent / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        // Clamped percent keeps the product within u64 range.
        applied.to_u64().map_or(self, Amount)
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Amount(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction; floors at zero.
    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Amount(self.0.saturating_sub(other.0))
    }

    /// Saturating multiplication by a unit count.
    #[must_use]
    pub const fn saturating_mul(self, count: u32) -> Self {
        Amount(self.0.saturating_mul(count as u64))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\u{20ac}{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
