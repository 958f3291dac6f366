use shub_domain::{Limits, StateDescription, StateOption};

/// Overlays stored metadata on a state description.
///
/// 1. Start from a copy of `original`, or from the empty description.
/// 2. If `limits` is present, set `minimum` to its `min` and `maximum` to its `max`.
///    A side missing from the limits leaves that bound unset, even if `original` had one.
/// 3. If `options` is present, it replaces the option list (an empty slice clears it).
///
/// `step`, `pattern` and `read_only` always come from `original`.
#[must_use]
pub fn merge_description(
    original: Option<&StateDescription>,
    options: Option<&[StateOption]>,
    limits: Option<&Limits>,
) -> StateDescription {
    let mut description = original.cloned().unwrap_or_default();

    if let Some(limits) = limits {
        description.minimum = limits.min;
        description.maximum = limits.max;
    }

    if let Some(options) = options {
        description.options = options.to_vec();
    }

    description
}
