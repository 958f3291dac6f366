use shub_domain::channel::{ChannelUid, SEGMENT_SEPARATOR};
use std::borrow::Cow;

#[shub_derive::shub_error]
pub enum ChannelGuardError {
    #[error("Channel validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Validation for channel identifiers that arrive from untrusted text
/// (config files, command lines).
///
/// Hosts that already hold a well-formed identifier build a [`ChannelUid`] directly;
/// the metadata store itself never parses identifiers.
#[derive(Debug)]
pub struct ChannelGuard;

impl ChannelGuard {
    /// Parses `raw` into a [`ChannelUid`].
    ///
    /// A valid identifier is one or more `:`-separated segments, each non-empty and made
    /// of ASCII letters, digits, `_`, `-`, or `#` (the channel-group separator).
    ///
    /// # Errors
    /// Returns [`ChannelGuardError::Validation`] if the identifier is empty, has an empty
    /// segment, or contains a character outside the allowed set.
    pub fn parse(raw: impl AsRef<str>) -> Result<ChannelUid, ChannelGuardError> {
        let raw = raw.as_ref();

        if raw.is_empty() {
            return Err(ChannelGuardError::Validation {
                message: "EMPTY".into(),
                context: Some("Channel uid cannot be empty".into()),
            });
        }

        for (index, segment) in raw.split(SEGMENT_SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(ChannelGuardError::Validation {
                    message: raw.to_owned().into(),
                    context: Some(format!("Segment {index} is empty").into()),
                });
            }

            if let Some(bad) = segment.chars().find(|&c| !is_segment_char(c)) {
                return Err(ChannelGuardError::Validation {
                    message: raw.to_owned().into(),
                    context: Some(format!("Illegal character {bad:?} in segment {index}").into()),
                });
            }
        }

        Ok(ChannelUid::from(raw))
    }
}

const fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '#')
}
