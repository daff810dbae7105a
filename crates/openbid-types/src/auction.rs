//! The auction record and its lifecycle.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────┐  settlement   ┌─────────┐
//!   │ OPEN ├──────────────▶│ SETTLED │
//!   └──────┘               └─────────┘
//! ```
//!
//! `Open → Settled` is the only transition and it is irreversible. Offers
//! are accepted only while OPEN. Settlement transfers the best offer's
//! price to the seller exactly once.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, AuctionId, OfferId};

/// The lifecycle state of an auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    /// Accepting offers. Settlement is possible once a best offer exists.
    Open,
    /// The seller has been paid. Terminal — no further offers or settlement.
    Settled,
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Settled => write!(f, "SETTLED"),
        }
    }
}

/// A sellable listing with a minimum acceptable price.
///
/// The auction holds only the *id* of its winning offer; offer records live
/// in the registry's arena. This keeps the best-offer invariant local: each
/// accepted offer updates `best_offer` transactionally, so no scan over the
/// offer list is ever needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    /// Sequential id, unique, assigned at creation.
    pub id: AuctionId,
    /// The creator. Immutable; receives the winning price at settlement.
    pub seller: AccountId,
    /// Opaque display name.
    pub name: String,
    /// Opaque description text.
    pub description: String,
    /// Minimum acceptable offer amount (non-negative).
    pub min: Decimal,
    /// The currently winning offer, if any. Always the maximum-price offer
    /// among all offers placed against this auction.
    pub best_offer: Option<OfferId>,
    /// Whether settlement has happened. Once true, no further offers are
    /// accepted and no further settlement is allowed.
    pub settled: bool,
    /// When the auction was created.
    pub created_at: DateTime<Utc>,
}

impl Auction {
    /// Create a new open auction with no offers.
    #[must_use]
    pub fn new(
        id: AuctionId,
        seller: AccountId,
        name: impl Into<String>,
        description: impl Into<String>,
        min: Decimal,
    ) -> Self {
        Self {
            id,
            seller,
            name: name.into(),
            description: description.into(),
            min,
            best_offer: None,
            settled: false,
            created_at: Utc::now(),
        }
    }

    /// Whether the auction still accepts offers.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.settled
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> AuctionStatus {
        if self.settled {
            AuctionStatus::Settled
        } else {
            AuctionStatus::Open
        }
    }
}
