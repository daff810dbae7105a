//! The auction house facade — one value carrying registry and ledger.
//!
//! `AuctionHouse` is the external surface of the system: account funding,
//! auction creation, offer placement, settlement, and balance inspection,
//! all routed through an owned [`Ledger`]. The registry itself stays
//! ledger-agnostic; the facade pins the pairing.

use openbid_ledger::{InMemoryLedger, Ledger};
use openbid_types::{
    AccountId, Auction, AuctionId, BalanceEntry, HouseConfig, Offer, OfferId, Result,
    SettlementReceipt,
};
use rust_decimal::Decimal;

use crate::AuctionRegistry;

/// An auction registry paired with the ledger that custodies its funds.
#[derive(Debug)]
pub struct AuctionHouse<L: Ledger = InMemoryLedger> {
    registry: AuctionRegistry,
    ledger: L,
}

impl AuctionHouse<InMemoryLedger> {
    /// Create a house backed by a fresh in-memory ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ledger(InMemoryLedger::new(), HouseConfig::default())
    }
}

impl Default for AuctionHouse<InMemoryLedger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ledger> AuctionHouse<L> {
    /// Create a house over an existing ledger.
    #[must_use]
    pub fn with_ledger(ledger: L, config: HouseConfig) -> Self {
        Self {
            registry: AuctionRegistry::with_config(config),
            ledger,
        }
    }

    // =================================================================
    // Funding
    // =================================================================

    /// Fund an account's available balance.
    pub fn deposit(&mut self, account: AccountId, amount: Decimal) {
        self.ledger.deposit(account, amount);
    }

    /// Withdraw from an account's available balance.
    pub fn withdraw(&mut self, account: AccountId, amount: Decimal) -> Result<()> {
        self.ledger.debit(account, amount)
    }

    /// An account's balance.
    #[must_use]
    pub fn balance_of(&self, account: AccountId) -> BalanceEntry {
        self.ledger.balance_of(account)
    }

    // =================================================================
    // Auction operations
    // =================================================================

    /// Create a new auction. No funds move.
    pub fn create_auction(
        &mut self,
        seller: AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        min: Decimal,
    ) -> Result<AuctionId> {
        self.registry.create_auction(seller, name, description, min)
    }

    /// Place an escrowed offer against an open auction.
    pub fn place_offer(
        &mut self,
        auction_id: AuctionId,
        buyer: AccountId,
        amount: Decimal,
    ) -> Result<OfferId> {
        self.registry
            .place_offer(&mut self.ledger, auction_id, buyer, amount)
    }

    /// Settle an auction, paying the winning price to the seller.
    pub fn settle(&mut self, auction_id: AuctionId) -> Result<Option<SettlementReceipt>> {
        self.registry.settle(&mut self.ledger, auction_id)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// All auctions in creation order.
    #[must_use]
    pub fn auctions(&self) -> &[Auction] {
        self.registry.auctions()
    }

    /// All offers placed by `buyer`, in creation order.
    #[must_use]
    pub fn user_offers(&self, buyer: AccountId) -> Vec<&Offer> {
        self.registry.user_offers(buyer)
    }

    /// All offers against an auction, in placement order.
    pub fn auction_offers(&self, auction_id: AuctionId) -> Result<Vec<&Offer>> {
        self.registry.auction_offers(auction_id)
    }

    /// The currently winning offer of an auction, if any.
    pub fn best_offer(&self, auction_id: AuctionId) -> Result<Option<&Offer>> {
        self.registry.best_offer(auction_id)
    }

    /// The underlying registry.
    #[must_use]
    pub fn registry(&self) -> &AuctionRegistry {
        &self.registry
    }

    /// The underlying ledger.
    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }
}
