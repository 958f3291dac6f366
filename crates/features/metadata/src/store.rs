//! The concurrent two-map cache behind dynamic state descriptions.

use crate::merge::merge_description;
use fxhash::{FxHashMap, FxHashSet};
use parking_lot::RwLock;
use shub_domain::{Channel, ChannelUid, Limits, StateDescription, StateOption};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// How many entries each map held when the store was cleared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearedEntries {
    pub options: usize,
    pub limits: usize,
}

#[derive(Debug, Default)]
struct MetadataStoreInner {
    options: RwLock<FxHashMap<ChannelUid, Arc<[StateOption]>>>,
    limits: RwLock<FxHashMap<ChannelUid, Limits>>,
}

/// A thread-safe store of per-channel option lists and limits.
///
/// Each map sits behind its own lock, and every operation takes exactly one lock at a
/// time for a single point read or write. Concurrent writes to the same channel are
/// last-write-wins. [`resolve`](Self::resolve) reads the two maps one after the other,
/// so it may observe a concurrent `set_limits` without the matching `set_options`.
///
/// The handle is reference-counted and cheap to clone; all clones share one state.
#[derive(Debug, Clone, Default)]
pub struct MetadataStore {
    inner: Arc<MetadataStoreInner>,
}

impl MetadataStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `capacity` channels in each map.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(MetadataStoreInner {
                options: RwLock::new(FxHashMap::with_capacity_and_hasher(
                    capacity,
                    Default::default(),
                )),
                limits: RwLock::new(FxHashMap::with_capacity_and_hasher(
                    capacity,
                    Default::default(),
                )),
            }),
        }
    }

    /// Inserts or replaces the option list of a channel.
    ///
    /// Order is presentation order. An empty list is stored as-is and will blank out the
    /// options of any description resolved for this channel.
    pub fn set_options<U, O>(&self, uid: U, options: O)
    where
        U: Into<ChannelUid>,
        O: Into<Arc<[StateOption]>>,
    {
        let uid = uid.into();
        let options = options.into();
        trace!(channel = %uid, count = options.len(), "Channel options set");
        self.inner.options.write().insert(uid, options);
    }

    /// Inserts or replaces the limits of a channel. Bounds are not validated.
    pub fn set_limits(&self, uid: impl Into<ChannelUid>, limits: Limits) {
        let uid = uid.into();
        trace!(channel = %uid, min = ?limits.min, max = ?limits.max, "Channel limits set");
        self.inner.limits.write().insert(uid, limits);
    }

    /// Returns the stored option list of a channel, if any.
    #[must_use]
    pub fn options(&self, uid: &ChannelUid) -> Option<Arc<[StateOption]>> {
        self.inner.options.read().get(uid).cloned()
    }

    /// Returns the stored limits of a channel, if any.
    #[must_use]
    pub fn limits(&self, uid: &ChannelUid) -> Option<Limits> {
        self.inner.limits.read().get(uid).copied()
    }

    /// Builds the description of `channel` on top of `original`.
    ///
    /// Channels with nothing stored come back as a copy of `original`, or as the empty
    /// description when there is no original. See [`merge_description`] for the rules.
    #[must_use]
    pub fn resolve(
        &self,
        channel: &Channel,
        original: Option<&StateDescription>,
    ) -> StateDescription {
        let options = self.options(&channel.uid);
        let limits = self.limits(&channel.uid);
        trace!(
            channel = %channel.uid,
            has_options = options.is_some(),
            has_limits = limits.is_some(),
            "Resolving state description"
        );
        merge_description(original, options.as_deref(), limits.as_ref())
    }

    /// All channels with options, limits, or both, sorted.
    #[must_use]
    pub fn channels(&self) -> Vec<ChannelUid> {
        let mut channels: BTreeSet<ChannelUid> =
            self.inner.options.read().keys().cloned().collect();
        channels.extend(self.inner.limits.read().keys().cloned());
        channels.into_iter().collect()
    }

    /// Number of distinct channels with options, limits, or both.
    #[must_use]
    pub fn len(&self) -> usize {
        let mut channels: FxHashSet<ChannelUid> =
            self.inner.options.read().keys().cloned().collect();
        channels.extend(self.inner.limits.read().keys().cloned());
        channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.options.read().is_empty() && self.inner.limits.read().is_empty()
    }

    /// Drops every stored entry: options first, then limits.
    ///
    /// Each map is emptied atomically on its own; a writer racing with `clear` may land
    /// in one map after it was emptied. Entries are released outside the locks.
    pub fn clear(&self) -> ClearedEntries {
        let options = std::mem::take(&mut *self.inner.options.write());
        let limits = std::mem::take(&mut *self.inner.limits.write());

        let cleared = ClearedEntries { options: options.len(), limits: limits.len() };
        debug!(options = cleared.options, limits = cleared.limits, "Metadata store cleared");
        cleared
    }
}
