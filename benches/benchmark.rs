use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use active_time::inflect::classify;
use active_time::persist::{PersistenceMode, Persistor};
use active_time::{Month, Registry, TimeArg, TimeRange};

fn construction(c: &mut Criterion) {
    c.bench_function("calendar day", |b| {
        b.iter(|| TimeRange::new(black_box(&[TimeArg::Int(2008), TimeArg::Int(11), TimeArg::Int(14)])))
    });
    c.bench_function("calendar month", |b| b.iter(|| Month::of(black_box(2008), black_box(2))));
}

fn description(c: &mut Criterion) {
    let range = TimeRange::day(2008, 11, 14).unwrap();
    c.bench_function("description", |b| b.iter(|| black_box(&range).description()));
}

fn inflection(c: &mut Criterion) {
    c.bench_function("classify", |b| {
        b.iter(|| {
            for name in ["posts", "activity_events", "users", "summaries", "people"] {
                black_box(classify(black_box(name)));
            }
        })
    });
}

fn collection(c: &mut Criterion) {
    let persistor = Persistor::new(PersistenceMode::InMemory).unwrap();
    persistor
        .execute_batch(
            "
            create table posts (id integer primary key, created_at text);
            with recursive n(i) as (select 0 union all select i + 1 from n where i < 999)
            insert into posts (created_at) select datetime('2008-01-01', '+' || (i * 8) || ' hours') from n;
            ",
        )
        .unwrap();
    let mut registry = Registry::new();
    registry.register(Arc::new(persistor.table("Post").unwrap()));
    let november = Month::of(2008, 11).unwrap();
    c.bench_function("collection", |b| {
        b.iter(|| november.collection(&registry, black_box("posts"), None).unwrap())
    });
}

criterion_group!(benches, construction, description, inflection, collection);
criterion_main!(benches);
