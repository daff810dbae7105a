//! Settlement receipts — the durable record of a completed auction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AuctionId, OfferId};

/// Proof that an auction was settled: who won, who was paid, and how much.
///
/// Returned by the settlement operation. The registry emits exactly one
/// receipt per auction over its lifetime — a second settlement attempt
/// fails before any receipt is produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettlementReceipt {
    /// The auction that was settled.
    pub auction_id: AuctionId,
    /// The winning offer.
    pub offer_id: OfferId,
    /// Paid `price` out of escrow.
    pub seller: AccountId,
    /// The winning bidder whose escrow was consumed.
    pub buyer: AccountId,
    /// Exactly the winning offer's price — never a sum over offers.
    pub price: Decimal,
    /// When settlement executed.
    pub settled_at: DateTime<Utc>,
}
