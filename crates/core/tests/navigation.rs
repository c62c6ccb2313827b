use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use strum::IntoEnumIterator;
use tilenav::{
    GridDirection, GridNavigator, GridType, IsoDiamondNavigator, LimitNavigator,
    MapCoordinate, Navigation, NavigationInfo, Navigator, NavigatorMetadata, NumRange,
    StaggeredDirection, WrapIndicator, WrapNavigator,
};

fn random_coordinate(rng: &mut Pcg64) -> MapCoordinate {
    MapCoordinate::new(rng.gen_range(-1000..1000), rng.gen_range(-1000..1000))
}

#[test]
fn test_grid_directions() {
    let navigator = NavigatorMetadata::new(GridType::Grid)
        .build::<GridDirection>()
        .unwrap();
    let origin = MapCoordinate::new(-7, 12);
    for direction in GridDirection::iter() {
        let (success, coordinate) = navigator.navigate_to(direction, origin, 1);
        assert!(success);
        assert_eq!(coordinate - origin, direction.offset(), "{}", direction);
    }
}

#[test]
fn test_wrap_examples() {
    let metadata = NavigatorMetadata::new(GridType::Grid)
        .with_horizontal_wrap(NumRange::new(0, 100));
    let navigator = metadata.build::<GridDirection>().unwrap();
    assert_eq!(
        navigator.navigate_to(GridDirection::East, MapCoordinate::new(99, 0), 1),
        (true, MapCoordinate::new(0, 0))
    );

    let navigator = metadata
        .with_horizontal(None)
        .with_vertical_wrap(NumRange::new(0, 100))
        .build::<GridDirection>()
        .unwrap();
    assert_eq!(
        navigator.navigate_to(GridDirection::North, MapCoordinate::new(99, 0), 1),
        (true, MapCoordinate::new(99, 99))
    );
}

#[test]
fn test_limit_example() {
    let navigator = NavigatorMetadata::new(GridType::Grid)
        .with_horizontal_wrap(NumRange::new(0, 10))
        .with_vertical_limit(NumRange::new(0, 5))
        .build::<GridDirection>()
        .unwrap();
    assert_eq!(
        navigator.navigate(GridDirection::None, MapCoordinate::new(-5, -5), 1),
        Navigation {
            success: false,
            coordinate: MapCoordinate::new(5, -5),
            info: NavigationInfo {
                wrap_x: WrapIndicator::Below,
                wrap_y: WrapIndicator::Within,
                limited_x: false,
                limited_y: true,
            },
        }
    );
}

#[test]
fn test_wrap_idempotence() {
    let mut rng = Pcg64::seed_from_u64(3);
    for _ in 0..200 {
        let lower = rng.gen_range(-50..50);
        let span = rng.gen_range(1..40);
        let range = NumRange::new(lower, lower + span);
        let navigator = NavigatorMetadata::new(GridType::IsoDiamond)
            .with_horizontal_wrap(range)
            .with_vertical_wrap(range)
            .build::<GridDirection>()
            .unwrap();

        let once = navigator.normalize(random_coordinate(&mut rng)).coordinate;
        let twice = navigator.normalize(once);
        assert_eq!(twice.coordinate, once);
        assert_eq!(twice.info, NavigationInfo::default());
        assert!(once.x >= range.lower() && once.x < range.upper());
        assert!(once.y >= range.lower() && once.y < range.upper());
    }
}

/// Horizontal-then-vertical wrap is the same as wrapping both at once
#[test]
fn test_wrap_composability() {
    let horizontal = NumRange::new(0, 17);
    let vertical = NumRange::new(-4, 9);
    let combined =
        WrapNavigator::both(IsoDiamondNavigator, horizontal, vertical).unwrap();
    let chained = WrapNavigator::vertical(
        WrapNavigator::horizontal(IsoDiamondNavigator, horizontal).unwrap(),
        vertical,
    )
    .unwrap();
    let built = NavigatorMetadata::new(GridType::IsoDiamond)
        .with_horizontal_wrap(horizontal)
        .with_vertical_wrap(vertical)
        .build::<GridDirection>()
        .unwrap();

    let mut rng = Pcg64::seed_from_u64(1234);
    for _ in 0..100 {
        let origin = random_coordinate(&mut rng);
        let steps = rng.gen_range(-30..30);
        for direction in GridDirection::iter() {
            let expected = combined.navigate(direction, origin, steps);
            assert_eq!(chained.navigate(direction, origin, steps), expected);
            assert_eq!(built.navigate(direction, origin, steps), expected);
        }
    }
}

#[test]
fn test_limit_composability() {
    let horizontal = NumRange::new(0, 20);
    let vertical = NumRange::new(0, 10);
    let combined = NavigatorMetadata::new(GridType::Grid)
        .with_horizontal_limit(horizontal)
        .with_vertical_limit(vertical)
        .build::<GridDirection>()
        .unwrap();
    let chained = LimitNavigator::vertical(
        LimitNavigator::horizontal(GridNavigator, horizontal),
        vertical,
    );

    let mut rng = Pcg64::seed_from_u64(99);
    for _ in 0..100 {
        let origin = MapCoordinate::new(rng.gen_range(-5..25), rng.gen_range(-5..15));
        for direction in GridDirection::iter() {
            assert_eq!(
                chained.navigate(direction, origin, 3),
                combined.navigate(direction, origin, 3)
            );
        }
    }
}

#[test]
fn test_staggered_wrap() {
    let navigator = NavigatorMetadata::new(GridType::IsoStaggered)
        .with_horizontal_wrap(NumRange::new(0, 8))
        .with_vertical_wrap(NumRange::new(0, 16))
        .build::<StaggeredDirection>()
        .unwrap();

    // All the way around in every direction lands back at the start
    let origin = MapCoordinate::new(5, 3);
    assert_eq!(
        navigator.navigate_to(StaggeredDirection::East, origin, 8),
        (true, origin)
    );
    assert_eq!(
        navigator.navigate_to(StaggeredDirection::South, origin, 8),
        (true, origin)
    );
    // Diagonals move one column every two rows, so 16 steps is one lap on
    // both axes
    assert_eq!(
        navigator.navigate_to(StaggeredDirection::SouthEast, origin, 16),
        (true, origin)
    );

    let navigation =
        navigator.navigate(StaggeredDirection::NorthWest, MapCoordinate::new(0, 0), 1);
    assert_eq!(navigation.coordinate, MapCoordinate::new(7, 15));
    assert_eq!(navigation.info.wrap_x, WrapIndicator::Below);
    assert_eq!(navigation.info.wrap_y, WrapIndicator::Below);
}

#[test]
fn test_navigators_are_shareable() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let navigator = NavigatorMetadata::new(GridType::IsoStaggered)
        .with_vertical_limit(NumRange::new(0, 100))
        .build::<StaggeredDirection>()
        .unwrap();
    assert_send_sync(&navigator);
    assert_send_sync(&GridType::IsoStaggered.screen_converter());
}
