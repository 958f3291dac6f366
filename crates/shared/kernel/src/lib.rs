//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain and adds the few helpers every
//! slice needs: configuration loading, channel identifier validation and the provider
//! seam the automation host calls into.
//!
//! ## Channel validation
//! ```rust
//! use shub_kernel::security::channel::ChannelGuard;
//!
//! let uid = ChannelGuard::parse("intesisbox:wmp:ac1:mode").unwrap();
//! assert_eq!(uid.id(), "mode");
//! assert!(ChannelGuard::parse("intesisbox::mode").is_err());
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use shub_kernel::config::load_config;
//! use shub_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("config/local")).unwrap();
//! ```
pub mod config;
pub mod provider;
pub mod security;

pub use shub_domain as domain;
