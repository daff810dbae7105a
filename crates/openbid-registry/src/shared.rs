//! Cloneable, lock-serialized handle over an [`AuctionHouse`].
//!
//! Registry and ledger are single-writer structures; every operation here
//! takes the one mutex for its full duration, so concurrent callers observe
//! the same all-or-nothing atomicity a single-threaded caller would.
//! Queries return owned clones since references cannot outlive the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use openbid_ledger::{InMemoryLedger, Ledger};
use openbid_types::{
    AccountId, Auction, AuctionId, BalanceEntry, Offer, OfferId, Result, SettlementReceipt,
};
use rust_decimal::Decimal;

use crate::AuctionHouse;

/// A shared handle to one auction house. Cloning is cheap and every clone
/// addresses the same underlying state.
#[derive(Debug)]
pub struct SharedHouse<L: Ledger = InMemoryLedger> {
    inner: Arc<Mutex<AuctionHouse<L>>>,
}

impl<L: Ledger> Clone for SharedHouse<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedHouse<InMemoryLedger> {
    /// Create a shared house backed by a fresh in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::from_house(AuctionHouse::new())
    }
}

impl Default for SharedHouse<InMemoryLedger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ledger> SharedHouse<L> {
    /// Wrap an existing house.
    #[must_use]
    pub fn from_house(house: AuctionHouse<L>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(house)),
        }
    }

    // Lock poisoning only happens if a caller panicked mid-operation; the
    // house itself never leaves partial state behind, so the inner value
    // is still consistent and we keep serving.
    fn lock(&self) -> MutexGuard<'_, AuctionHouse<L>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Fund an account's available balance.
    pub fn deposit(&self, account: AccountId, amount: Decimal) {
        self.lock().deposit(account, amount);
    }

    /// Withdraw from an account's available balance.
    pub fn withdraw(&self, account: AccountId, amount: Decimal) -> Result<()> {
        self.lock().withdraw(account, amount)
    }

    /// An account's balance.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> BalanceEntry {
        self.lock().balance_of(account)
    }

    /// Create a new auction.
    pub fn create_auction(
        &self,
        seller: AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        min: Decimal,
    ) -> Result<AuctionId> {
        self.lock().create_auction(seller, name, description, min)
    }

    /// Place an escrowed offer against an open auction.
    pub fn place_offer(
        &self,
        auction_id: AuctionId,
        buyer: AccountId,
        amount: Decimal,
    ) -> Result<OfferId> {
        self.lock().place_offer(auction_id, buyer, amount)
    }

    /// Settle an auction, paying the winning price to the seller.
    pub fn settle(&self, auction_id: AuctionId) -> Result<Option<SettlementReceipt>> {
        self.lock().settle(auction_id)
    }

    /// All auctions in creation order.
    #[must_use]
    pub fn auctions(&self) -> Vec<Auction> {
        self.lock().auctions().to_vec()
    }

    /// All offers placed by `buyer`, in creation order.
    #[must_use]
    pub fn user_offers(&self, buyer: AccountId) -> Vec<Offer> {
        self.lock()
            .user_offers(buyer)
            .into_iter()
            .cloned()
            .collect()
    }

    /// All offers against an auction, in placement order.
    pub fn auction_offers(&self, auction_id: AuctionId) -> Result<Vec<Offer>> {
        Ok(self
            .lock()
            .auction_offers(auction_id)?
            .into_iter()
            .cloned()
            .collect())
    }

    /// The currently winning offer of an auction, if any.
    pub fn best_offer(&self, auction_id: AuctionId) -> Result<Option<Offer>> {
        Ok(self.lock().best_offer(auction_id)?.cloned())
    }
}
