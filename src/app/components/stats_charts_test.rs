use super::*;
use crate::app::stats::daily_activity;
use chrono::NaiveDate;

fn week(counts: [usize; 7]) -> Vec<DayBucket> {
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    daily_activity(&[], today)
        .into_iter()
        .zip(counts)
        .map(|(bucket, count)| DayBucket { count, ..bucket })
        .collect()
}

#[test]
fn donut_skips_zero_values() {
    let segments = donut_segments(&[0, 4]);
    assert!(segments[0].is_none());
    assert!(segments[1].as_deref().is_some_and(|d| d.starts_with("M ") && d.ends_with(" Z")));
}

#[test]
fn donut_is_empty_without_projects() {
    assert_eq!(donut_segments(&[0, 0]), vec![None, None]);
}

#[test]
fn donut_two_slices_both_drawn() {
    let segments = donut_segments(&[1, 3]);
    assert!(segments.iter().all(Option::is_some));
    assert_ne!(segments[0], segments[1]);
}

#[test]
fn axis_ticks_are_integer_and_cover_max() {
    assert_eq!(axis_ticks(0), vec![0, 1]);
    assert_eq!(axis_ticks(4), vec![0, 1, 2, 3, 4]);
    assert_eq!(axis_ticks(7), vec![0, 2, 4, 6, 8]);
    assert!(axis_ticks(123).last().is_some_and(|top| *top >= 123));
}

#[test]
fn bar_geometry_has_one_bar_per_day() {
    let bars = bar_geometry(&week([0, 1, 2, 3, 4, 0, 0]));
    assert_eq!(bars.len(), 7);
    assert!(bars.windows(2).all(|w| w[0].label_x < w[1].label_x));
}

#[test]
fn bar_geometry_scales_to_axis_top() {
    let bars = bar_geometry(&week([0, 0, 0, 0, 0, 0, 4]));
    let plot_height = BAR_HEIGHT - BAR_MARGIN_BOTTOM;

    assert_eq!(bars[0].height, 0.0);
    assert!((bars[6].height - plot_height).abs() < 1e-9);
    assert!(bars[6].y.abs() < 1e-9);
}
