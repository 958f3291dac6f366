use anyhow::{Context, Result};
use shub_domain::{Channel, StateDescription};
use shub_kernel::security::channel::ChannelGuard;
use shub_metadata::MetadataStore;
use tracing::debug;

/// Resolves `uid` against the store and prints the result as pretty JSON.
pub(crate) fn describe_channel(store: &MetadataStore, uid: &str, base: Option<&str>) -> Result<()> {
    let uid = ChannelGuard::parse(uid).with_context(|| format!("Invalid channel uid '{uid}'"))?;

    let original = base
        .map(serde_json::from_str::<StateDescription>)
        .transpose()
        .context("Failed to parse --base as a state description")?;

    debug!(channel = %uid, has_base = original.is_some(), "Describing channel");

    let description = store.resolve(&Channel::new(uid), original.as_ref());
    println!("{}", serde_json::to_string_pretty(&description)?);

    Ok(())
}
