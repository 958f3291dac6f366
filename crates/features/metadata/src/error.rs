use shub_kernel::security::channel::ChannelGuardError;
use std::borrow::Cow;

/// Metadata slice error type.
///
/// Store operations themselves never fail; errors only come from turning
/// configuration into store entries.
#[shub_derive::shub_error]
pub enum MetadataError {
    #[error("Invalid channel{}: {source}", format_context(.context))]
    InvalidChannel { source: ChannelGuardError, context: Option<Cow<'static, str>> },
}
