// Integration tests for layout, gestures and persistence of timeline data
mod fixtures;

use bookings_timeline::services::dataset::{load_entities, load_entities_from_str, save_entities};
use bookings_timeline::services::settings::SettingsService;
use bookings_timeline::utils::date::{days_between, is_weekend};
use bookings_timeline::{
    build_calendar, reconcile, resolve_boundary, to_date_range, to_geometry, Block, BlockKey,
    Boundary, BoundaryResolver, DateRange, GestureKind, Geometry, ResizeHandle, Timeline,
    TimelineSettings, ViewState,
};
use chrono::Local;
use fixtures::dates::{jan_1_2024, ymd};
use fixtures::entities::{hotel, HOTEL_JSON};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_calendar_for_month_change() {
    let boundary = Boundary::new(ymd(2024, 1, 30), ymd(2024, 2, 2)).unwrap();
    let calendar = build_calendar(&boundary);

    let days: Vec<_> = calendar.days().map(|d| d.date).collect();
    assert_eq!(days, vec![ymd(2024, 1, 30), ymd(2024, 1, 31), ymd(2024, 2, 1)]);

    let years = calendar.years();
    assert_eq!(years.len(), 1);
    assert_eq!(years[0].year, 2024);
    let months: Vec<(usize, Vec<u32>)> = years[0]
        .months
        .iter()
        .map(|m| (m.month_index(), m.days.iter().map(|d| d.day_of_month()).collect()))
        .collect();
    assert_eq!(months, vec![(0, vec![30, 31]), (1, vec![1])]);
}

#[test]
fn test_weekend_classification() {
    assert!(is_weekend(ymd(2024, 2, 3)));
    assert!(is_weekend(ymd(2024, 2, 4)));
    assert!(!is_weekend(ymd(2024, 2, 5)));
}

#[test]
fn test_reconcile_snapped_drag() {
    let mut block = Block::new(ymd(2024, 1, 1), ymd(2024, 1, 3));
    let result = reconcile(&mut block, 63.0, 42.0, jan_1_2024(), 21.0);
    assert_eq!(result.range, DateRange::new(ymd(2024, 1, 4), ymd(2024, 1, 6)));
    assert_eq!(result.duration_days, 2);
    assert_eq!(block.range(), Some(result.range));
}

#[test]
fn test_reconcile_zero_width() {
    let mut block = Block::new(ymd(2024, 1, 1), ymd(2024, 1, 3));
    let result = reconcile(&mut block, 63.0, 0.0, jan_1_2024(), 21.0);
    assert_eq!(result.duration_days, 1);
    assert!(result.range.is_valid());
}

#[test]
fn test_empty_dataset_anchors_at_today() {
    let before = Local::now().date_naive();
    let boundary = resolve_boundary(&[], 10, None, None);
    let after = Local::now().date_naive();

    assert!(boundary.start() == before || boundary.start() == after);
    assert_eq!(days_between(Some(boundary.start()), Some(boundary.end())), 10);
}

#[test]
fn test_boundary_covers_fixture_data() {
    let entities = hotel();
    let boundary = BoundaryResolver::new(1).resolve(&entities);
    assert_eq!(boundary.start(), ymd(2024, 1, 4));
    assert_eq!(boundary.end(), ymd(2024, 3, 3));
}

#[test]
fn test_geometry_round_trip() {
    let geometry = to_geometry(ymd(2024, 2, 27), ymd(2024, 3, 2), jan_1_2024(), 21.0);
    let range = to_date_range(geometry.offset, geometry.width, jan_1_2024(), 21.0).unwrap();
    assert_eq!(range, DateRange::new(ymd(2024, 2, 27), ymd(2024, 3, 2)));
}

#[test]
fn test_json_dataset_to_render_model() {
    let entities = load_entities_from_str(HOTEL_JSON).unwrap();
    let timeline = Timeline::new(TimelineSettings::default(), &entities).unwrap();
    let model = timeline.render(&entities);

    // Undated block is neither placed nor used for the axis
    assert_eq!(model.boundary.start(), ymd(2024, 1, 4));
    assert_eq!(model.boundary.end(), ymd(2024, 3, 3));
    assert_eq!(model.rows[2].blocks.len(), 1);
    assert_eq!(model.rows[2].blocks[0].css_class.as_deref(), Some("vip"));

    // Jan 4 .. Mar 3: 28 + 29 + 2 days
    assert_eq!(model.days.len(), 59);
    let labels: Vec<&str> = model.months.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan/2024", "Feb/2024", "Mar/2024"]);
    assert!(model.months[2].last);
    assert!(model.days[58].last);

    let conference = &model.rows[0].blocks[1];
    assert_eq!(conference.tooltip, "Conference group");
    assert_eq!(conference.label, "5");
    assert_eq!(conference.geometry, Geometry::new(6.0 * 21.0 + 3.0, 5.0 * 21.0 - 9.0));
}

#[test]
fn test_gesture_session_and_persistence() {
    let dir = tempdir().unwrap();
    let data_path = dir.path().join("bookings.json");
    std::fs::write(&data_path, HOTEL_JSON).unwrap();

    let mut entities = load_entities(&data_path).unwrap();
    let mut timeline = Timeline::new(TimelineSettings::default(), &entities).unwrap();
    let mut view = ViewState::default();
    let key = BlockKey::new(0, 0);

    // Stretch Ada's stay from 2 to 4 nights via the right handle
    timeline
        .begin_gesture(key, GestureKind::Resize(ResizeHandle::Trailing), &entities, &mut view)
        .unwrap();
    let outcome = timeline
        .finish_gesture(key, &mut entities, Geometry::new(3.0, 4.0 * 21.0 - 9.0), &mut view)
        .unwrap();

    assert_eq!(outcome.reconciliation.label, "4");
    assert_eq!(outcome.payload["guest"], "Ada");
    assert_eq!(outcome.payload["name"], "Room 101");
    assert_eq!(outcome.payload["end"], "2024-01-08");

    save_entities(&data_path, &entities).unwrap();
    let reloaded = load_entities(&data_path).unwrap();
    assert_eq!(reloaded[0].blocks[0].range(), Some(DateRange::new(ymd(2024, 1, 4), ymd(2024, 1, 8))));
    assert_eq!(reloaded[0].blocks[0].extra.get("guest"), Some(&serde_json::json!("Ada")));
}

#[test]
fn test_settings_file_drives_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        r#"
        cell_width = 30.0
        slide_width = 300.0
        start = "2023-12-25"
        focus = "2024-01-04"
        "#,
    )
    .unwrap();

    let settings = SettingsService::new(&path).load().unwrap();
    let entities = hotel();
    let timeline = Timeline::new(settings, &entities).unwrap();

    assert_eq!(timeline.boundary().start(), ymd(2023, 12, 25));
    assert_eq!(timeline.initial_view().scroll_left, 10.0 * 30.0);

    let model = timeline.render(&entities);
    assert_eq!(model.months[0].label, "Dec/2023");
    assert_eq!(model.rows[0].blocks[0].geometry.offset, 10.0 * 30.0 + 3.0);
}
