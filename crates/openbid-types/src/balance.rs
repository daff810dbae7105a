//! Balance tracking types for the OpenBid escrow model.
//!
//! Every account has an `available` balance (usable for new offers or
//! withdrawal) and a `held` balance (escrowed by the account's currently
//! winning offers, pending settlement or refund).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single account's balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BalanceEntry {
    /// Available for new offers / withdrawal.
    pub available: Decimal,
    /// Held in escrow for a currently winning offer awaiting settlement.
    pub held: Decimal,
}

impl BalanceEntry {
    /// Create a zero balance.
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: Decimal::ZERO,
            held: Decimal::ZERO,
        }
    }

    /// Total balance (available + held).
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.available + self.held
    }

    /// Whether this entry has no balance at all.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.available.is_zero() && self.held.is_zero()
    }
}

impl Default for BalanceEntry {
    fn default() -> Self {
        Self::new()
    }
}
