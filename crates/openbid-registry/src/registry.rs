//! The auction registry — listings, the offer arena, and settlement.
//!
//! Offers live in an arena indexed by their sequential id; each auction
//! holds only the id of its winning offer. Accepting an offer updates that
//! reference transactionally, so the best-offer invariant never requires a
//! scan over the offer list.
//!
//! Escrow policy: the ledger holds exactly one offer's funds per open
//! auction — the current best. A newly accepted offer escrows its own
//! amount and immediately refunds the offer it overtook.

use chrono::Utc;
use openbid_ledger::Ledger;
use openbid_types::{
    AccountId, Auction, AuctionId, HouseConfig, Offer, OfferId, OpenbidError, Result,
    SettlementReceipt,
};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Owns all auction and offer records and drives funds movement through a
/// caller-supplied [`Ledger`].
///
/// The registry is a single-writer structure: operations take `&mut self`
/// and apply fully or not at all. Callers needing cross-thread access wrap
/// it (see [`SharedHouse`](crate::SharedHouse)).
#[derive(Debug)]
pub struct AuctionRegistry {
    /// All auctions in creation order; `AuctionId(n)` lives at index `n - 1`.
    auctions: Vec<Auction>,
    /// Offer arena in creation order; `OfferId(n)` lives at index `n - 1`.
    offers: Vec<Offer>,
    /// Per-auction offer ids, in placement order.
    by_auction: HashMap<AuctionId, Vec<OfferId>>,
    /// House tunables.
    config: HouseConfig,
}

impl AuctionRegistry {
    /// Create an empty registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HouseConfig::default())
    }

    /// Create an empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: HouseConfig) -> Self {
        Self {
            auctions: Vec::new(),
            offers: Vec::new(),
            by_auction: HashMap::new(),
            config,
        }
    }

    // =================================================================
    // Mutations
    // =================================================================

    /// Create a new auction. No funds move.
    ///
    /// # Errors
    /// Returns `InvalidAuction` if `min` is negative.
    pub fn create_auction(
        &mut self,
        seller: AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        min: Decimal,
    ) -> Result<AuctionId> {
        if min < Decimal::ZERO {
            return Err(OpenbidError::InvalidAuction {
                reason: format!("minimum price {min} is negative"),
            });
        }

        let id = AuctionId(self.auctions.len() as u64 + 1);
        self.auctions
            .push(Auction::new(id, seller, name, description, min));

        tracing::debug!(auction = %id, %seller, %min, "Auction created");
        Ok(id)
    }

    /// Place an offer against an open auction.
    ///
    /// The amount must strictly exceed both the auction's minimum and the
    /// current best offer's price — ties are rejected. On acceptance the
    /// buyer's funds are escrowed and the overtaken offer (if any) is
    /// refunded in full, in the same atomic step.
    ///
    /// # Errors
    /// - `AuctionNotFound` if the auction does not exist
    /// - `AuctionSettled` if the auction is already settled
    /// - `OfferTooLow` if the amount does not clear the floor
    /// - `OfferLimitExceeded` if the auction is at its offer cap
    /// - `InsufficientFunds` if the buyer cannot cover the escrow hold
    pub fn place_offer<L: Ledger>(
        &mut self,
        ledger: &mut L,
        auction_id: AuctionId,
        buyer: AccountId,
        amount: Decimal,
    ) -> Result<OfferId> {
        let auction = self.auction(auction_id)?;
        if auction.settled {
            return Err(OpenbidError::AuctionSettled(auction_id));
        }

        // The floor is whichever is higher: the minimum or the best offer.
        // Strict comparison rejects ties.
        let mut floor = auction.min;
        let previous_best = match auction.best_offer {
            Some(prev_id) => {
                let prev = self.offer(prev_id)?;
                floor = floor.max(prev.price);
                Some((prev.buyer, prev.price))
            }
            None => None,
        };
        if amount <= floor {
            return Err(OpenbidError::OfferTooLow {
                offered: amount,
                floor,
            });
        }

        let placed = self.by_auction.get(&auction_id).map_or(0, Vec::len);
        if placed >= self.config.max_offers_per_auction {
            return Err(OpenbidError::OfferLimitExceeded {
                auction_id,
                limit: self.config.max_offers_per_auction,
            });
        }

        // Escrow the new offer first; nothing above has mutated state, so
        // a failed hold leaves the call with no effects.
        ledger.hold(buyer, amount)?;

        // Refund the overtaken offer. A failure here means the ledger lost
        // track of an escrow we created — unwind our own hold and surface it.
        if let Some((prev_buyer, prev_price)) = previous_best {
            if let Err(err) = ledger.release(prev_buyer, prev_price) {
                ledger.release(buyer, amount)?;
                return Err(err);
            }
        }

        let offer_id = OfferId(self.offers.len() as u64 + 1);
        self.offers
            .push(Offer::new(offer_id, auction_id, buyer, amount));
        self.by_auction
            .entry(auction_id)
            .or_default()
            .push(offer_id);
        self.auction_mut(auction_id)?.best_offer = Some(offer_id);

        tracing::debug!(
            auction = %auction_id,
            offer = %offer_id,
            %buyer,
            price = %amount,
            "Offer accepted as new best"
        );
        Ok(offer_id)
    }

    /// Settle an auction: pay the winning offer's price to the seller and
    /// move the auction to its terminal state.
    ///
    /// Any caller may settle. With no offers on the books this is a no-op
    /// returning `None` — the auction stays open.
    ///
    /// # Errors
    /// - `AuctionNotFound` if the auction does not exist
    /// - `AuctionSettled` on a second settlement attempt
    pub fn settle<L: Ledger>(
        &mut self,
        ledger: &mut L,
        auction_id: AuctionId,
    ) -> Result<Option<SettlementReceipt>> {
        let auction = self.auction(auction_id)?;
        if auction.settled {
            return Err(OpenbidError::AuctionSettled(auction_id));
        }

        let Some(offer_id) = auction.best_offer else {
            tracing::debug!(auction = %auction_id, "Settlement skipped: no offers");
            return Ok(None);
        };

        let seller = auction.seller;
        let best = self.offer(offer_id)?;
        let (buyer, price) = (best.buyer, best.price);

        // The value transfer is a single irreversible step: consume the
        // winner's escrow, credit the seller, then mark terminal.
        ledger.consume_held(buyer, price)?;
        ledger.credit(seller, price);
        self.auction_mut(auction_id)?.settled = true;

        tracing::info!(
            auction = %auction_id,
            offer = %offer_id,
            %seller,
            %buyer,
            %price,
            "Auction settled"
        );

        Ok(Some(SettlementReceipt {
            auction_id,
            offer_id,
            seller,
            buyer,
            price,
            settled_at: Utc::now(),
        }))
    }

    // =================================================================
    // Queries
    // =================================================================

    /// All auctions in creation order.
    #[must_use]
    pub fn auctions(&self) -> &[Auction] {
        &self.auctions
    }

    /// Look up an auction by id.
    pub fn auction(&self, id: AuctionId) -> Result<&Auction> {
        Self::auction_index(id)
            .and_then(|idx| self.auctions.get(idx))
            .ok_or(OpenbidError::AuctionNotFound(id))
    }

    /// Look up an offer by id.
    pub fn offer(&self, id: OfferId) -> Result<&Offer> {
        usize::try_from(id.0)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.offers.get(idx))
            .ok_or(OpenbidError::OfferNotFound(id))
    }

    /// All offers placed by `buyer`, in creation order.
    #[must_use]
    pub fn user_offers(&self, buyer: AccountId) -> Vec<&Offer> {
        self.offers.iter().filter(|o| o.buyer == buyer).collect()
    }

    /// All offers against an auction, in placement order.
    ///
    /// # Errors
    /// Returns `AuctionNotFound` for an unknown id.
    pub fn auction_offers(&self, auction_id: AuctionId) -> Result<Vec<&Offer>> {
        self.auction(auction_id)?;
        let ids = self.by_auction.get(&auction_id).map_or(&[][..], Vec::as_slice);
        ids.iter().map(|&id| self.offer(id)).collect()
    }

    /// The currently winning offer of an auction, if any.
    ///
    /// # Errors
    /// Returns `AuctionNotFound` for an unknown id.
    pub fn best_offer(&self, auction_id: AuctionId) -> Result<Option<&Offer>> {
        match self.auction(auction_id)?.best_offer {
            Some(id) => Ok(Some(self.offer(id)?)),
            None => Ok(None),
        }
    }

    /// Number of auctions created.
    #[must_use]
    pub fn auction_count(&self) -> usize {
        self.auctions.len()
    }

    /// Number of offers placed across all auctions.
    #[must_use]
    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }

    // =================================================================
    // Internals
    // =================================================================

    fn auction_index(id: AuctionId) -> Option<usize> {
        usize::try_from(id.0).ok().and_then(|n| n.checked_sub(1))
    }

    fn auction_mut(&mut self, id: AuctionId) -> Result<&mut Auction> {
        Self::auction_index(id)
            .and_then(|idx| self.auctions.get_mut(idx))
            .ok_or(OpenbidError::AuctionNotFound(id))
    }
}

impl Default for AuctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
