use crate::store::MetadataStore;
use shub_domain::{Channel, StateDescription};
use shub_kernel::provider::DynamicStateDescriptionProvider;
use tracing::info;

impl DynamicStateDescriptionProvider for MetadataStore {
    /// Always answers: stored metadata is merged over `original`. The locale is ignored,
    /// option labels are handed out as they were set.
    fn state_description(
        &self,
        channel: &Channel,
        original: Option<&StateDescription>,
        _locale: Option<&str>,
    ) -> Option<StateDescription> {
        Some(self.resolve(channel, original))
    }

    fn deactivate(&self) {
        let cleared = self.clear();
        info!(
            options = cleared.options,
            limits = cleared.limits,
            "Dynamic state description provider deactivated"
        );
    }
}
