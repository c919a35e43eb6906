use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ize_docs::navigation::{resolve, CurrentPath, MenuModel, SidebarState, SidebarView};

fn see_also_listing(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("doc{}", i)).collect()
}

fn bench_resolve(c: &mut Criterion) {
    let base = MenuModel::ize_default();
    let listing = see_also_listing(200);
    let menu = base.with_see_also(&listing);

    let paths = [
        CurrentPath::parse("/docs"),
        CurrentPath::parse("/docs/installation"),
        CurrentPath::parse("/docs/doc199"),
        CurrentPath::parse("/docs/not-a-real-page"),
    ];

    c.bench_function("resolve_mixed_paths", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(resolve(black_box(&menu), black_box(path)));
            }
        })
    });

    c.bench_function("attach_see_also_200", |b| {
        b.iter(|| black_box(base.with_see_also(black_box(&listing))))
    });

    c.bench_function("sidebar_view_build", |b| {
        let navigation = resolve(&menu, &paths[2]);
        let state = SidebarState::seed(&menu, &navigation);
        b.iter(|| black_box(SidebarView::build(&menu, &navigation, &state)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
