use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Separator between the segments of a [`ChannelUid`].
pub const SEGMENT_SEPARATOR: char = ':';

/// Identifier of a single addressable channel, e.g. `intesisbox:wmp:livingroom:setpoint`.
///
/// The identifier is opaque to the metadata store, which only hashes and compares it.
/// Cloning is a reference-count bump, so keys can be handed to callback threads freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelUid(Arc<str>);

impl ChannelUid {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the `:`-separated segments, binding first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEPARATOR)
    }

    /// The channel's own id, i.e. the last segment.
    #[must_use]
    pub fn id(&self) -> &str {
        self.0.rsplit(SEGMENT_SEPARATOR).next().unwrap_or(&self.0)
    }
}

impl From<&str> for ChannelUid {
    fn from(value: &str) -> Self {
        Self(Arc::from(value))
    }
}

impl From<String> for ChannelUid {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl AsRef<str> for ChannelUid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The host's view of a channel when it asks for a state description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub uid: ChannelUid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Channel {
    #[must_use]
    pub fn new(uid: impl Into<ChannelUid>) -> Self {
        Self { uid: uid.into(), item_type: None, label: None }
    }

    #[must_use]
    pub fn with_item_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl From<ChannelUid> for Channel {
    fn from(uid: ChannelUid) -> Self {
        Self::new(uid)
    }
}
