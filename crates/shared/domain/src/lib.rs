//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `rust_decimal`).
//! Keep it lean: no I/O, no locking, no logging, just data and simple helpers.
//!
//! The types mirror what the automation host hands to a state description provider:
//! a [`Channel`](channel::Channel) addressed by a [`ChannelUid`](channel::ChannelUid), and
//! a [`StateDescription`](state::StateDescription) carrying options and numeric bounds.

pub mod channel;
pub mod config;
pub mod state;

pub use channel::{Channel, ChannelUid};
pub use state::{Limits, StateDescription, StateOption};
