use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tilenav::{
    ContinuousMapCoordinate, GridDirection, GridType, MapCoordinate,
    Navigator, NavigatorMetadata, NumRange, Rotation, ScreenConverter,
    ScreenPosition, ScreenRect, StaggeredDirection, TileSize, Viewport,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");

    let navigator = NavigatorMetadata::new(GridType::IsoDiamond)
        .with_horizontal_wrap(NumRange::new(0, 256))
        .with_vertical_limit(NumRange::new(0, 256))
        .build::<GridDirection>()
        .unwrap();
    group.bench_function("diamond wrap+limit", |b| {
        b.iter(|| {
            navigator.navigate(
                black_box(GridDirection::SouthEast),
                black_box(MapCoordinate::new(255, 100)),
                black_box(3),
            )
        })
    });

    let navigator = NavigatorMetadata::new(GridType::IsoStaggered)
        .with_horizontal_wrap(NumRange::new(0, 256))
        .with_vertical_wrap(NumRange::new(0, 256))
        .build::<StaggeredDirection>()
        .unwrap();
    group.bench_function("staggered 100000 steps", |b| {
        b.iter(|| {
            navigator.navigate(
                black_box(StaggeredDirection::NorthEast),
                black_box(MapCoordinate::new(10, 10)),
                black_box(100_000),
            )
        })
    });
    group.finish();

    let mut group = c.benchmark_group("projection");
    let viewport = Viewport::new(
        ContinuousMapCoordinate::new(128.0, 128.0),
        ScreenRect::new(0.0, 0.0, 1920.0, 1080.0),
        TileSize::new(64, 32),
        Rotation::Quarter,
    )
    .unwrap();
    for grid_type in [GridType::Grid, GridType::IsoDiamond, GridType::IsoStaggered]
    {
        let converter = grid_type.screen_converter();
        group.bench_function(grid_type.to_string(), |b| {
            b.iter(|| {
                converter.screen_to_map(
                    black_box(&viewport),
                    black_box(ScreenPosition::new(1000.0, 517.0)),
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
