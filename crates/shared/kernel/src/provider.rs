//! The seam between the automation host and anything that supplies dynamic
//! state descriptions.

use shub_domain::channel::Channel;
use shub_domain::state::StateDescription;

/// A source of per-channel state descriptions computed at runtime.
///
/// The host calls [`state_description`](Self::state_description) from arbitrary threads
/// whenever it renders or queries a channel, and [`deactivate`](Self::deactivate) once
/// when it unloads the provider.
pub trait DynamicStateDescriptionProvider: Send + Sync {
    /// Returns the description for `channel`, built on top of `original` when the host
    /// already has one. `None` means the provider has nothing to say about the channel.
    ///
    /// `locale` is the host's display locale (e.g. `"de-DE"`), if any.
    fn state_description(
        &self,
        channel: &Channel,
        original: Option<&StateDescription>,
        locale: Option<&str>,
    ) -> Option<StateDescription>;

    /// Lifecycle hook: the host is shutting the provider down.
    fn deactivate(&self) {}
}
