//! The offer record — a buyer's escrowed bid against an auction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AuctionId, OfferId};

/// A bid placed by a buyer against an auction. Immutable after creation.
///
/// At placement time the price must strictly exceed both the auction's
/// minimum and the current best offer's price — ties are rejected. The
/// offered amount is held by the ledger (escrowed) while the offer is the
/// best one, and refunded the moment it is overtaken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Sequential id, unique across all offers (not scoped per auction).
    pub id: OfferId,
    /// The auction this offer targets.
    pub auction_id: AuctionId,
    /// The bidder. Pays `price` into escrow at placement.
    pub buyer: AccountId,
    /// Amount offered.
    pub price: Decimal,
    /// When the offer was placed.
    pub placed_at: DateTime<Utc>,
}

impl Offer {
    /// Create a new offer record.
    #[must_use]
    pub fn new(id: OfferId, auction_id: AuctionId, buyer: AccountId, price: Decimal) -> Self {
        Self {
            id,
            auction_id,
            buyer,
            price,
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_records_inputs() {
        let buyer = AccountId::new();
        let o = Offer::new(OfferId(1), AuctionId(1), buyer, Decimal::new(20, 0));
        assert_eq!(o.id, OfferId(1));
        assert_eq!(o.auction_id, AuctionId(1));
        assert_eq!(o.buyer, buyer);
        assert_eq!(o.price, Decimal::new(20, 0));
    }

    #[test]
    fn offer_serde_roundtrip() {
        let o = Offer::new(OfferId(2), AuctionId(1), AccountId::new(), Decimal::new(15, 0));
        let json = serde_json::to_string(&o).unwrap();
        let back: Offer = serde_json::from_str(&json).unwrap();
        assert_eq!(o.id, back.id);
        assert_eq!(o.buyer, back.buyer);
        assert_eq!(o.price, back.price);
    }
}
