//! Error types for the OpenBid auction house.
//!
//! All errors use the `OB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Auction errors
//! - 2xx: Offer errors
//! - 3xx: Ledger / balance errors
//! - 9xx: General / internal errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AuctionId, OfferId};

/// Central error enum for all OpenBid operations.
#[derive(Debug, Error)]
pub enum OpenbidError {
    // =================================================================
    // Auction Errors (1xx)
    // =================================================================
    /// The referenced auction id does not exist in the registry.
    #[error("OB_ERR_100: Auction does not exist: {0}")]
    AuctionNotFound(AuctionId),

    /// The auction has already been settled (terminal state).
    #[error("OB_ERR_101: Auction already settled: {0}")]
    AuctionSettled(AuctionId),

    /// The auction failed validation (negative minimum, etc.).
    #[error("OB_ERR_102: Invalid auction: {reason}")]
    InvalidAuction { reason: String },

    // =================================================================
    // Offer Errors (2xx)
    // =================================================================
    /// The offered amount must strictly exceed both the auction minimum
    /// and the current best offer's price. `floor` is whichever of the
    /// two is higher at the time of placement.
    #[error("OB_ERR_200: Offer must exceed min and best offer: offered {offered}, floor {floor}")]
    OfferTooLow { offered: Decimal, floor: Decimal },

    /// Too many open offers against a single auction.
    #[error("OB_ERR_201: Offer limit exceeded for {auction_id}: {limit} offers")]
    OfferLimitExceeded { auction_id: AuctionId, limit: usize },

    /// The referenced offer id does not exist in the arena.
    #[error("OB_ERR_202: Offer not found: {0}")]
    OfferNotFound(OfferId),

    // =================================================================
    // Ledger / Balance Errors (3xx)
    // =================================================================
    /// Not enough available balance to perform the operation.
    #[error("OB_ERR_300: Insufficient available funds: need {needed}, have {available}")]
    InsufficientFunds { needed: Decimal, available: Decimal },

    /// Not enough held balance to release or consume.
    #[error("OB_ERR_301: Insufficient held funds")]
    InsufficientHeld,

    /// Supply conservation invariant violated — critical safety alert.
    #[error("OB_ERR_302: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("OB_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, OpenbidError>;
