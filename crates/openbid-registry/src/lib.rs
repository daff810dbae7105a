//! # openbid-registry
//!
//! The auction state machine of the OpenBid house.
//!
//! Three layers:
//!
//! - [`AuctionRegistry`] — owns the auction list and the offer arena;
//!   exposes create / query / settle operations against a caller-supplied
//!   [`Ledger`](openbid_ledger::Ledger).
//! - [`AuctionHouse`] — facade wiring a registry to an owned ledger, giving
//!   the full external surface (deposits, offers, settlement, balances) on
//!   one value.
//! - [`SharedHouse`] — cloneable `Arc<Mutex<_>>` handle that serializes
//!   every operation, for callers driving one house from multiple threads.
//!
//! Every mutating operation is all-or-nothing: validation happens before
//! any registry or ledger state is touched, so a failed call leaves no
//! partial effects behind.

pub mod house;
pub mod registry;
pub mod shared;

pub use house::AuctionHouse;
pub use registry::AuctionRegistry;
pub use shared::SharedHouse;
