//! In-memory ledger with available/held accounting.
//!
//! The in-memory ledger is the source of truth for all balance state in an
//! embedded auction house. Besides per-account balances it tracks lifetime
//! minted/burned totals so supply conservation can be verified: auction
//! operations only ever move value between accounts, so
//! `minted - burned == Σ (available + held)` must hold at all times.

use std::collections::HashMap;

use openbid_types::{AccountId, BalanceEntry, OpenbidError, Result};
use rust_decimal::Decimal;

use crate::Ledger;

/// `HashMap`-backed [`Ledger`] with supply-conservation tracking.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    /// Per-account balances.
    balances: HashMap<AccountId, BalanceEntry>,
    /// Lifetime total deposited (external inflow).
    minted: Decimal,
    /// Lifetime total debited (external outflow).
    burned: Decimal,
}

impl InMemoryLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all accounts' total balances.
    #[must_use]
    pub fn total_supply(&self) -> Decimal {
        self.balances.values().map(BalanceEntry::total).sum()
    }

    /// Verify the supply conservation invariant.
    ///
    /// # Errors
    /// Returns `SupplyInvariantViolation` if the sum of balances disagrees
    /// with the minted/burned totals.
    pub fn verify_supply(&self) -> Result<()> {
        let expected = self.minted - self.burned;
        let actual = self.total_supply();
        if expected != actual {
            return Err(OpenbidError::SupplyInvariantViolation {
                reason: format!("expected supply {expected}, ledger holds {actual}"),
            });
        }
        Ok(())
    }

    /// Number of accounts with a balance entry.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }
}

impl Ledger for InMemoryLedger {
    fn deposit(&mut self, account: AccountId, amount: Decimal) {
        let entry = self.balances.entry(account).or_default();
        entry.available += amount;
        self.minted += amount;
        tracing::debug!(%account, %amount, "Deposit");
    }

    fn credit(&mut self, account: AccountId, amount: Decimal) {
        let entry = self.balances.entry(account).or_default();
        entry.available += amount;
    }

    fn debit(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        let entry =
            self.balances
                .get_mut(&account)
                .ok_or(OpenbidError::InsufficientFunds {
                    needed: amount,
                    available: Decimal::ZERO,
                })?;

        if entry.available < amount {
            return Err(OpenbidError::InsufficientFunds {
                needed: amount,
                available: entry.available,
            });
        }

        entry.available -= amount;
        self.burned += amount;
        Ok(())
    }

    fn hold(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        let entry =
            self.balances
                .get_mut(&account)
                .ok_or(OpenbidError::InsufficientFunds {
                    needed: amount,
                    available: Decimal::ZERO,
                })?;

        if entry.available < amount {
            return Err(OpenbidError::InsufficientFunds {
                needed: amount,
                available: entry.available,
            });
        }

        entry.available -= amount;
        entry.held += amount;
        Ok(())
    }

    fn release(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        let entry = self
            .balances
            .get_mut(&account)
            .ok_or(OpenbidError::InsufficientHeld)?;

        if entry.held < amount {
            return Err(OpenbidError::InsufficientHeld);
        }

        entry.held -= amount;
        entry.available += amount;
        Ok(())
    }

    fn consume_held(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        let entry = self
            .balances
            .get_mut(&account)
            .ok_or(OpenbidError::InsufficientHeld)?;

        if entry.held < amount {
            return Err(OpenbidError::InsufficientHeld);
        }

        entry.held -= amount;
        Ok(())
    }

    fn balance_of(&self, account: AccountId) -> BalanceEntry {
        self.balances.get(&account).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_increases_available() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(1000, 0));
        let bal = ledger.balance_of(user);
        assert_eq!(bal.available, Decimal::new(1000, 0));
        assert_eq!(bal.held, Decimal::ZERO);
    }

    #[test]
    fn hold_moves_to_held() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(1000, 0));
        ledger.hold(user, Decimal::new(400, 0)).unwrap();
        let bal = ledger.balance_of(user);
        assert_eq!(bal.available, Decimal::new(600, 0));
        assert_eq!(bal.held, Decimal::new(400, 0));
    }

    #[test]
    fn hold_insufficient_fails() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(100, 0));
        let err = ledger.hold(user, Decimal::new(200, 0)).unwrap_err();
        assert!(matches!(err, OpenbidError::InsufficientFunds { .. }));
        // Balance unchanged
        let bal = ledger.balance_of(user);
        assert_eq!(bal.available, Decimal::new(100, 0));
    }

    #[test]
    fn hold_unknown_account_fails() {
        let mut ledger = InMemoryLedger::new();
        let err = ledger
            .hold(AccountId::new(), Decimal::new(10, 0))
            .unwrap_err();
        assert!(matches!(err, OpenbidError::InsufficientFunds { .. }));
    }

    #[test]
    fn release_restores_available() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(1000, 0));
        ledger.hold(user, Decimal::new(400, 0)).unwrap();
        ledger.release(user, Decimal::new(400, 0)).unwrap();
        let bal = ledger.balance_of(user);
        assert_eq!(bal.available, Decimal::new(1000, 0));
        assert_eq!(bal.held, Decimal::ZERO);
    }

    #[test]
    fn release_more_than_held_fails() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(1000, 0));
        ledger.hold(user, Decimal::new(100, 0)).unwrap();
        let err = ledger.release(user, Decimal::new(200, 0)).unwrap_err();
        assert!(matches!(err, OpenbidError::InsufficientHeld));
    }

    #[test]
    fn consume_held_reduces_held_only() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(1000, 0));
        ledger.hold(user, Decimal::new(500, 0)).unwrap();
        ledger.consume_held(user, Decimal::new(500, 0)).unwrap();
        let bal = ledger.balance_of(user);
        assert_eq!(bal.available, Decimal::new(500, 0));
        assert_eq!(bal.held, Decimal::ZERO);
    }

    #[test]
    fn debit_withdraws_available() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(300, 0));
        ledger.debit(user, Decimal::new(100, 0)).unwrap();
        assert_eq!(ledger.balance_of(user).available, Decimal::new(200, 0));
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn debit_insufficient_fails() {
        let mut ledger = InMemoryLedger::new();
        let user = AccountId::new();
        ledger.deposit(user, Decimal::new(50, 0));
        let err = ledger.debit(user, Decimal::new(100, 0)).unwrap_err();
        assert!(matches!(err, OpenbidError::InsufficientFunds { .. }));
    }

    #[test]
    fn nonexistent_balance_is_zero() {
        let ledger = InMemoryLedger::new();
        assert!(ledger.balance_of(AccountId::new()).is_zero());
    }

    #[test]
    fn supply_conserved_across_transfers() {
        let mut ledger = InMemoryLedger::new();
        let buyer = AccountId::new();
        let seller = AccountId::new();

        ledger.deposit(buyer, Decimal::new(100, 0));
        ledger.hold(buyer, Decimal::new(40, 0)).unwrap();
        ledger.consume_held(buyer, Decimal::new(40, 0)).unwrap();
        ledger.credit(seller, Decimal::new(40, 0));

        assert_eq!(ledger.total_supply(), Decimal::new(100, 0));
        ledger.verify_supply().unwrap();
    }

    #[test]
    fn supply_violation_detected() {
        let mut ledger = InMemoryLedger::new();
        let buyer = AccountId::new();
        ledger.deposit(buyer, Decimal::new(100, 0));

        // Credit without a matching consume mints value out of thin air.
        ledger.credit(buyer, Decimal::new(1, 0));

        let err = ledger.verify_supply().unwrap_err();
        assert!(matches!(
            err,
            OpenbidError::SupplyInvariantViolation { .. }
        ));
    }
}
