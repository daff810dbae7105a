//! # openbid-types
//!
//! Shared types, errors, and configuration for the **OpenBid** auction house.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AuctionId`], [`OfferId`], [`AccountId`]
//! - **Auction model**: [`Auction`], [`AuctionStatus`]
//! - **Offer model**: [`Offer`]
//! - **Balance model**: [`BalanceEntry`]
//! - **Receipt model**: [`SettlementReceipt`]
//! - **Configuration**: [`HouseConfig`]
//! - **Errors**: [`OpenbidError`] with `OB_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod auction;
pub mod balance;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod offer;
pub mod receipt;

// Re-export all primary types at crate root for ergonomic imports:
//   use openbid_types::{Auction, Offer, AccountId, ...};

pub use auction::*;
pub use balance::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use offer::*;
pub use receipt::*;

// Constants are accessed via `openbid_types::constants::FOO`
// (not re-exported to avoid name collisions).
