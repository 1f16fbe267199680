//! Currency-tagged integer amounts in the currency's smallest unit.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use alloy::primitives::U256;
use eyre::{bail, Result};

use crate::trade::currency::Currency;

/// An immutable quantity of a currency, in its smallest unit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    /// The currency the quantity is denominated in
    currency: Currency,
    /// The quantity in the currency's smallest unit
    quotient: U256,
}

impl Amount {
    /// Creates an amount of the given currency.
    #[must_use]
    pub const fn new(currency: Currency, quotient: U256) -> Self {
        Self { currency, quotient }
    }

    /// The currency this amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The raw quantity in the currency's smallest unit.
    #[must_use]
    pub const fn quotient(&self) -> U256 {
        self.quotient
    }

    /// Whether the amount is strictly greater than zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.quotient > U256::ZERO
    }

    /// The same quantity denominated in the currency's wrapped token.
    #[must_use]
    pub const fn wrapped(&self) -> Self {
        Self {
            currency: Currency::Erc20(self.currency.wrapped()),
            quotient: self.quotient,
        }
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Fails when the currencies differ or the sum overflows.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        if self.currency != other.currency {
            bail!("cannot add amounts of different currencies");
        }
        let Some(quotient) = self.quotient.checked_add(other.quotient) else {
            bail!("amount addition overflowed");
        };
        Ok(Self::new(self.currency, quotient))
    }

    /// Subtracts an amount of the same currency.
    ///
    /// # Errors
    ///
    /// Fails when the currencies differ or the result would be negative.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        if self.currency != other.currency {
            bail!("cannot subtract amounts of different currencies");
        }
        let Some(quotient) = self.quotient.checked_sub(other.quotient) else {
            bail!("amount subtraction underflowed");
        };
        Ok(Self::new(self.currency, quotient))
    }
}

/// Amounts of different currencies are not comparable.
impl PartialOrd for Amount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.quotient.cmp(&other.quotient))
    }
}

impl Debug for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.quotient, self.currency)
    }
}
