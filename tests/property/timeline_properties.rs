// Property-based tests for axis layout and gesture reconciliation
// Random bookings and pixel positions must never break the date grid

use bookings_timeline::utils::date::{add_days, days_between};
use bookings_timeline::{
    reconcile, resolve_boundary, Block, BlockInset, DateRange, Entity, Geometry, PositionMapper,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

/// Up to 5 rows of up to 4 bookings, each as (days after 2020-01-01, nights)
fn bookings() -> impl Strategy<Value = Vec<Vec<(i64, i64)>>> {
    prop::collection::vec(prop::collection::vec((0..2000i64, 1..60i64), 0..4), 0..5)
}

fn to_entities(rows: &[Vec<(i64, i64)>]) -> Vec<Entity> {
    rows.iter()
        .enumerate()
        .map(|(row, blocks)| {
            blocks.iter().fold(
                Entity::new(row as i64, format!("Row {}", row)),
                |entity, &(offset, nights)| {
                    let start = add_days(epoch(), offset);
                    entity.with_block(Block::new(start, add_days(start, nights)))
                },
            )
        })
        .collect()
}

proptest! {
    /// The axis is always at least the minimum span wide
    #[test]
    fn prop_boundary_meets_minimum_span(rows in bookings(), minimum in 1..120i64) {
        let boundary = resolve_boundary(&to_entities(&rows), minimum, None, None);
        prop_assert!(boundary.start() < boundary.end());
        prop_assert!(days_between(Some(boundary.start()), Some(boundary.end())) >= minimum);
    }

    /// Every dated block lies inside the axis, with or without an override
    #[test]
    fn prop_boundary_covers_every_block(
        rows in bookings(),
        minimum in 1..120i64,
        explicit_start in prop::option::of(0..2000i64),
    ) {
        let entities = to_entities(&rows);
        let start = explicit_start.map(|days| add_days(epoch(), days).into());
        let boundary = resolve_boundary(&entities, minimum, start, None);

        for block in entities.iter().flat_map(|e| e.blocks.iter()) {
            let range = block.range().unwrap();
            prop_assert!(boundary.as_range().covers(&range), "{:?} outside {:?}", range, boundary);
        }
        if let Some(days) = explicit_start {
            prop_assert!(boundary.start() <= add_days(epoch(), days));
        }
    }

    /// Geometry maps back to the same dates for any block on or after the axis start
    #[test]
    fn prop_geometry_round_trip(
        offset in 0..1000i64,
        nights in 1..90i64,
        cell_width in 10.0..60.0f64,
        inset in prop::bool::ANY,
    ) {
        let mut mapper = PositionMapper::new(epoch(), cell_width).unwrap();
        if inset {
            mapper = mapper.with_inset(BlockInset::default());
        }
        let start = add_days(epoch(), offset);
        let range = DateRange::from_start(start, nights);

        let geometry = mapper.to_geometry(range.start, range.end);
        prop_assert_eq!(mapper.to_date_range(geometry).unwrap(), range);
    }

    /// Whatever pixels the host reports, the block ends after it starts
    #[test]
    fn prop_reconcile_never_inverts_block(
        offset in prop::num::f64::ANY,
        width in prop::num::f64::ANY,
        cell_width in 1.0..60.0f64,
    ) {
        let mut block = Block::new(epoch(), add_days(epoch(), 3));
        let result = reconcile(&mut block, offset, width, epoch(), cell_width);

        prop_assert!(result.range.is_valid());
        prop_assert!(result.duration_days >= 1);
        prop_assert_eq!(block.range(), Some(result.range));
        prop_assert_eq!(result.label, result.duration_days.to_string());
    }

    /// Same, for pixel positions a real grid would produce
    #[test]
    fn prop_reconcile_on_grid_never_inverts_block(
        offset in -5000.0..5000.0f64,
        width in -500.0..2000.0f64,
        cell_width in 1.0..60.0f64,
    ) {
        let mut block = Block::new(epoch(), add_days(epoch(), 3));
        let result = reconcile(&mut block, offset, width, epoch(), cell_width);

        prop_assert!(result.range.is_valid());
        prop_assert_eq!(block.range(), Some(result.range));
    }

    /// Snapping an already snapped geometry changes nothing
    #[test]
    fn prop_snap_is_idempotent(
        offset in 0.0..3000.0f64,
        width in 0.0..600.0f64,
    ) {
        let mapper = PositionMapper::new(epoch(), 21.0).unwrap();
        let once = mapper.snap(Geometry::new(offset, width)).unwrap();
        prop_assert_eq!(mapper.snap(once).unwrap(), once);
    }
}
