//! # Dynamic Channel Metadata
//!
//! Keeps the parts of a channel's state description that are only known at runtime,
//! such as the operating modes a particular air conditioner reports or the setpoint
//! range it accepts, and merges them into whatever description the host already has.
//!
//! ## Overview
//!
//! * **[`MetadataStore`]**: two concurrent maps keyed by [`ChannelUid`], one holding
//!   option lists and one holding [`Limits`]. The handle is `Arc`-backed, so clones share
//!   state and can be handed to host callback threads.
//! * **[`merge_description`]**: the pure merge used by [`MetadataStore::resolve`]. Stored
//!   limits overwrite both bounds, stored options replace the option list, everything
//!   else is carried over from the original description.
//! * **Provider**: [`MetadataStore`] implements
//!   [`DynamicStateDescriptionProvider`](shub_kernel::provider::DynamicStateDescriptionProvider),
//!   the seam the host calls into; deactivation clears the store.
//! * **Seeding**: [`MetadataStore::from_config`] builds a store from a
//!   [`MetadataConfig`](shub_domain::config::MetadataConfig).
//!
//! # Example
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use shub_domain::{Channel, Limits, StateOption};
//! use shub_metadata::MetadataStore;
//!
//! let store = MetadataStore::new();
//! store.set_limits("temp", Limits::range(Decimal::from(16), Decimal::from(30)));
//! store.set_options(
//!     "mode",
//!     vec![StateOption::new("0", "Off"), StateOption::new("1", "Heat"), StateOption::new("2", "Cool")],
//! );
//!
//! let temp = store.resolve(&Channel::new("temp"), None);
//! assert_eq!(temp.minimum, Some(Decimal::from(16)));
//! assert_eq!(temp.maximum, Some(Decimal::from(30)));
//! assert!(temp.options.is_empty());
//!
//! let mode = store.resolve(&Channel::new("mode"), None);
//! assert_eq!(mode.options.len(), 3);
//! assert_eq!(mode.minimum, None);
//! ```
//!
//! [`ChannelUid`]: shub_domain::ChannelUid
//! [`Limits`]: shub_domain::Limits

mod error;
mod merge;
mod provider;
mod seed;
mod store;

pub use crate::error::{MetadataError, MetadataErrorExt};
pub use crate::merge::merge_description;
pub use crate::store::{ClearedEntries, MetadataStore};
