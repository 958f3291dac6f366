use crate::error::{MetadataError, MetadataErrorExt};
use crate::store::MetadataStore;
use shub_domain::config::MetadataConfig;
use shub_kernel::security::channel::ChannelGuard;
use tracing::{debug, info};

impl MetadataStore {
    /// Creates a store sized and pre-filled from configuration.
    ///
    /// # Errors
    /// Returns [`MetadataError::InvalidChannel`] if any seed has a malformed uid.
    pub fn from_config(config: &MetadataConfig) -> Result<Self, MetadataError> {
        let store = Self::with_capacity(config.initial_capacity);
        store.seed(config)?;
        Ok(store)
    }

    /// Applies every seed of `config`: options through [`set_options`](Self::set_options),
    /// limits through [`set_limits`](Self::set_limits). Returns the number of seeds.
    ///
    /// All uids are validated first, so a bad seed leaves the store untouched.
    ///
    /// # Errors
    /// Returns [`MetadataError::InvalidChannel`] if any seed has a malformed uid.
    pub fn seed(&self, config: &MetadataConfig) -> Result<usize, MetadataError> {
        let seeds = config
            .channels
            .iter()
            .enumerate()
            .map(|(index, seed)| {
                ChannelGuard::parse(&seed.uid)
                    .context(format!("Channel seed #{index}"))
                    .map(|uid| (uid, seed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (uid, seed) in &seeds {
            if let Some(options) = &seed.options {
                self.set_options(uid.clone(), options.as_slice());
            }
            if let Some(limits) = seed.limits {
                self.set_limits(uid.clone(), limits);
            }
            debug!(
                channel = %uid,
                options = seed.options.is_some(),
                limits = seed.limits.is_some(),
                "Channel seeded"
            );
        }

        info!(channels = seeds.len(), "Metadata store seeded from config");
        Ok(seeds.len())
    }
}
