//! # openbid-ledger
//!
//! The value-ledger collaborator for the OpenBid auction house.
//!
//! The registry never touches balances directly — it drives funds movement
//! through the [`Ledger`] trait, so custody can be swapped out (in-memory
//! for tests and embedded use, an external accounting system in production)
//! without touching auction logic.
//!
//! Escrow accounting follows the available/held split: placing the winning
//! offer moves funds `available → held`; being outbid refunds `held →
//! available`; settlement consumes the winner's held funds and credits the
//! seller's available balance.

pub mod memory;

use openbid_types::{AccountId, BalanceEntry, Result};
use rust_decimal::Decimal;

pub use memory::InMemoryLedger;

/// Account balance custody: deposits, escrow holds, and transfers.
///
/// All mutations are atomic: either the full operation succeeds or the
/// balance is unchanged.
pub trait Ledger {
    /// External inflow — funds an account's available balance.
    fn deposit(&mut self, account: AccountId, amount: Decimal);

    /// Internal transfer receipt — credits available balance (settlement
    /// payout to the seller).
    fn credit(&mut self, account: AccountId, amount: Decimal);

    /// External outflow — withdraws from available balance.
    ///
    /// # Errors
    /// Returns `InsufficientFunds` if available < amount.
    fn debit(&mut self, account: AccountId, amount: Decimal) -> Result<()>;

    /// Escrow funds for an offer (available → held).
    ///
    /// # Errors
    /// Returns `InsufficientFunds` if available < amount.
    fn hold(&mut self, account: AccountId, amount: Decimal) -> Result<()>;

    /// Refund escrowed funds (held → available). Used when an offer is
    /// overtaken by a higher one.
    ///
    /// # Errors
    /// Returns `InsufficientHeld` if held < amount.
    fn release(&mut self, account: AccountId, amount: Decimal) -> Result<()>;

    /// Consume held funds at settlement. Held balance decreases, nothing
    /// is added back to available — the counterparty is credited separately.
    ///
    /// # Errors
    /// Returns `InsufficientHeld` if held < amount.
    fn consume_held(&mut self, account: AccountId, amount: Decimal) -> Result<()>;

    /// The balance for an account. Unknown accounts read as zero.
    fn balance_of(&self, account: AccountId) -> BalanceEntry;
}
