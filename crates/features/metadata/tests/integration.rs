use rust_decimal::Decimal;
use shub_domain::config::{ChannelSeed, MetadataConfig};
use shub_domain::{Channel, ChannelUid, Limits, StateDescription, StateOption};
use shub_metadata::{MetadataError, MetadataStore};

fn hvac_modes() -> Vec<StateOption> {
    vec![StateOption::new("0", "Off"), StateOption::new("1", "Heat"), StateOption::new("2", "Cool")]
}

#[test]
fn test_setpoint_and_mode_scenario() {
    let store = MetadataStore::new();
    store.set_limits("temp", [("min", Decimal::from(16)), ("max", Decimal::from(30))].into_iter().collect());
    store.set_options("mode", hvac_modes());

    let temp = store.resolve(&Channel::new("temp"), None);
    assert_eq!(temp.minimum, Some(Decimal::from(16)));
    assert_eq!(temp.maximum, Some(Decimal::from(30)));
    assert!(temp.options.is_empty());

    let mode = store.resolve(&Channel::new("mode"), None);
    assert_eq!(mode.options, hvac_modes());
    assert_eq!(mode.minimum, None);
    assert_eq!(mode.maximum, None);
}

#[test]
fn test_unknown_channel_keeps_original() {
    let store = MetadataStore::new();
    store.set_options("mode", hvac_modes());

    let original = StateDescription::default()
        .with_minimum(Decimal::from(5))
        .with_pattern("%d %%")
        .with_read_only(true);
    let channel = Channel::new("intesisbox:wmp:ac1:fanspeed").with_item_type("String");

    assert_eq!(store.resolve(&channel, Some(&original)), original);
    assert_eq!(store.resolve(&channel, None), StateDescription::default());
}

#[test]
fn test_options_only_keep_original_bounds() {
    let store = MetadataStore::new();
    store.set_options("mode", hvac_modes());

    let original = StateDescription::default()
        .with_minimum(Decimal::ONE)
        .with_maximum(Decimal::TEN)
        .with_options([("9", "Legacy")]);
    let resolved = store.resolve(&Channel::new("mode"), Some(&original));

    assert_eq!(resolved.options, hvac_modes());
    assert_eq!(resolved.minimum, Some(Decimal::ONE));
    assert_eq!(resolved.maximum, Some(Decimal::TEN));
}

#[test]
fn test_min_only_limits() {
    let store = MetadataStore::new();
    store.set_limits("setpoint", Limits::at_least(Decimal::new(165, 1)));

    let resolved = store.resolve(&Channel::new("setpoint"), None);
    assert_eq!(resolved.minimum, Some(Decimal::new(165, 1)));
    assert_eq!(resolved.maximum, None);
}

#[test]
fn test_setting_twice_is_idempotent() {
    let once = MetadataStore::new();
    once.set_options("mode", hvac_modes());

    let twice = MetadataStore::new();
    twice.set_options("mode", hvac_modes());
    twice.set_options("mode", hvac_modes());

    let channel = Channel::new("mode");
    assert_eq!(once.resolve(&channel, None), twice.resolve(&channel, None));
}

#[test]
fn test_clear_forgets_configured_channels() {
    let store = MetadataStore::new();
    store.set_options("mode", hvac_modes());
    store.set_limits("temp", Limits::range(Decimal::from(16), Decimal::from(30)));

    let original = StateDescription::default().with_maximum(Decimal::from(99));
    store.clear();

    for uid in ["mode", "temp"] {
        let channel = Channel::new(uid);
        assert_eq!(store.resolve(&channel, Some(&original)), original);
        assert_eq!(store.resolve(&channel, None), StateDescription::default());
    }

    store.set_options("mode", vec![StateOption::unlabeled("AUTO")]);
    assert_eq!(store.resolve(&Channel::new("mode"), None).options.len(), 1);
}

#[test]
fn test_seeding_from_config() {
    let config = MetadataConfig {
        initial_capacity: 4,
        channels: vec![
            ChannelSeed {
                uid: "intesisbox:wmp:ac1:setpoint".to_owned(),
                options: None,
                limits: Some(Limits::range(Decimal::from(18), Decimal::from(30))),
            },
            ChannelSeed {
                uid: "intesisbox:wmp:ac1:mode".to_owned(),
                options: Some(hvac_modes()),
                limits: None,
            },
        ],
    };

    let store = MetadataStore::from_config(&config).expect("valid seeds");
    assert_eq!(store.len(), 2);

    let setpoint = ChannelUid::from("intesisbox:wmp:ac1:setpoint");
    assert_eq!(store.limits(&setpoint).and_then(|l| l.min), Some(Decimal::from(18)));
    assert!(store.options(&setpoint).is_none());
}

#[test]
fn test_invalid_seed_applies_nothing() {
    let config = MetadataConfig {
        initial_capacity: 4,
        channels: vec![
            ChannelSeed {
                uid: "intesisbox:wmp:ac1:mode".to_owned(),
                options: Some(hvac_modes()),
                limits: None,
            },
            ChannelSeed { uid: "intesisbox::broken".to_owned(), options: None, limits: None },
        ],
    };

    let store = MetadataStore::new();
    let err = store.seed(&config).expect_err("second seed is malformed");
    assert!(matches!(err, MetadataError::InvalidChannel { .. }));
    assert!(err.to_string().contains("Channel seed #1"));
    assert!(store.is_empty());
}
