use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;
use shub_domain::{Channel, ChannelUid, Limits, StateDescription, StateOption};
use shub_metadata::MetadataStore;
use std::hint::black_box;

fn populated(channels: usize) -> MetadataStore {
    let store = MetadataStore::with_capacity(channels);
    for i in 0..channels {
        let uid = ChannelUid::from(format!("intesisbox:wmp:ac{i}:mode"));
        store.set_options(
            uid.clone(),
            vec![StateOption::new("0", "Off"), StateOption::new("1", "Heat"), StateOption::new("2", "Cool")],
        );
        store.set_limits(uid, Limits::range(Decimal::from(16), Decimal::from(30)));
    }
    store
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let original = StateDescription::default().with_pattern("%s").with_step(Decimal::ONE);

    for channels in [16usize, 1024, 65_536] {
        let store = populated(channels);
        let hit = Channel::new(format!("intesisbox:wmp:ac{}:mode", channels / 2));
        let miss = Channel::new("intesisbox:wmp:unknown:mode");

        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("hit", channels), &hit, |b, channel| {
            b.iter(|| black_box(store.resolve(channel, Some(&original))));
        });

        group.bench_with_input(BenchmarkId::new("miss", channels), &miss, |b, channel| {
            b.iter(|| black_box(store.resolve(channel, None)));
        });
    }

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let store = populated(1024);
    let uid = ChannelUid::from("intesisbox:wmp:ac7:setpoint");

    c.bench_function("set_limits", |b| {
        b.iter(|| store.set_limits(uid.clone(), Limits::at_least(black_box(Decimal::from(17)))));
    });
}

criterion_group!(benches, bench_resolve, bench_set);
criterion_main!(benches);
