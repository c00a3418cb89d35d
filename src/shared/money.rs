use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Currency in whole cents. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

const TIE_SNAP: f64 = 1_000_000.0;

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Money(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply by a price factor, rounding to whole cents half-to-even.
    /// The product is snapped to a millionth of a cent first, so float noise
    /// such as `15 * 1.1 == 16.500000000000004` still counts as a tie.
    /// Negative or non-finite factors clamp to zero.
    pub fn scaled(self, factor: f64) -> Money {
        if !factor.is_finite() || factor <= 0.0 {
            return Money::ZERO;
        }
        let raw = self.0 as f64 * factor;
        let snapped = (raw * TIE_SNAP).round() / TIE_SNAP;
        Money(round_half_even(snapped) as u64)
    }

    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn saturating_sub(self, other: Money) -> Money {
        Money(self.0.saturating_sub(other.0))
    }

    pub fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// How many whole units at `price` this amount covers. Free items
    /// report zero so callers never loop forever on them.
    pub fn affordable_units(self, price: Money) -> u32 {
        if price.is_zero() {
            return 0;
        }
        u32::try_from(self.0 / price.0).unwrap_or(u32::MAX)
    }
}

/// Banker's rounding: ties go to the nearest even integer.
pub fn round_half_even(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor == 0.5 {
        2.0 * (x / 2.0).round()
    } else {
        x.round()
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        *self = *self + rhs;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    /// `$1,234.56`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, ch) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        write!(f, "${grouped}.{:02}", self.0 % 100)
    }
}
