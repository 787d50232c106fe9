//! SVG renderings of the dashboard statistics: a donut for the mobile/web
//! split and a bar chart for the trailing week of messages.

use std::f64::consts::PI;

use leptos::*;

use crate::app::stats::{proportion_view, DayBucket, ProjectStats};

const DONUT_SIZE: f64 = 240.0;
const DONUT_INNER: f64 = 60.0;
const DONUT_OUTER: f64 = 100.0;
const DONUT_PAD_DEG: f64 = 5.0;

const BAR_WIDTH: f64 = 420.0;
const BAR_HEIGHT: f64 = 240.0;
const BAR_MARGIN_LEFT: f64 = 32.0;
const BAR_MARGIN_BOTTOM: f64 = 28.0;
const BAR_MAX_THICKNESS: f64 = 32.0;
const BAR_COLOR: &str = "#6366F1";

fn polar(radius: f64, angle_deg: f64) -> (f64, f64) {
    let center = DONUT_SIZE / 2.0;
    let rad = angle_deg * PI / 180.0;
    (center + radius * rad.sin(), center - radius * rad.cos())
}

fn ring_segment(start_deg: f64, end_deg: f64) -> String {
    let large = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar(DONUT_OUTER, start_deg);
    let (ox1, oy1) = polar(DONUT_OUTER, end_deg);
    let (ix1, iy1) = polar(DONUT_INNER, end_deg);
    let (ix0, iy0) = polar(DONUT_INNER, start_deg);

    format!(
        "M {ox0:.2} {oy0:.2} A {DONUT_OUTER} {DONUT_OUTER} 0 {large} 1 {ox1:.2} {oy1:.2} \
         L {ix1:.2} {iy1:.2} A {DONUT_INNER} {DONUT_INNER} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
    )
}

/// Path data per value, clockwise from twelve o'clock. Zero values get no
/// segment; an all-zero input yields nothing.
pub fn donut_segments(values: &[usize]) -> Vec<Option<String>> {
    let total: usize = values.iter().sum();
    let filled = values.iter().filter(|v| **v > 0).count();
    if total == 0 {
        return vec![None; values.len()];
    }

    let pad = if filled > 1 { DONUT_PAD_DEG } else { 0.0 };
    let available = 360.0 - pad * filled as f64;
    let mut cursor = 0.0;

    values
        .iter()
        .map(|&value| {
            if value == 0 {
                return None;
            }
            // a full circle has coincident endpoints, which SVG arcs can't draw
            let sweep = (available * value as f64 / total as f64).min(359.99);
            let segment = ring_segment(cursor, cursor + sweep);
            cursor += sweep + pad;
            Some(segment)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label_x: f64,
}

/// Integer y-axis ticks from zero covering `max`.
pub fn axis_ticks(max: usize) -> Vec<usize> {
    let top = max.max(1);
    let step = top.div_ceil(4).max(1);
    (0..=top.div_ceil(step)).map(|i| i * step).collect()
}

pub fn bar_geometry(buckets: &[DayBucket]) -> Vec<BarGeometry> {
    let ticks = axis_ticks(buckets.iter().map(|b| b.count).max().unwrap_or(0));
    let top = ticks.last().copied().unwrap_or(1).max(1) as f64;

    let plot_width = BAR_WIDTH - BAR_MARGIN_LEFT;
    let plot_height = BAR_HEIGHT - BAR_MARGIN_BOTTOM;
    let slot = plot_width / buckets.len().max(1) as f64;
    let width = (slot * 0.6).min(BAR_MAX_THICKNESS);

    buckets
        .iter()
        .enumerate()
        .map(|(i, bucket)| {
            let height = plot_height * bucket.count as f64 / top;
            let label_x = BAR_MARGIN_LEFT + slot * (i as f64 + 0.5);
            BarGeometry {
                x: label_x - width / 2.0,
                y: plot_height - height,
                width,
                height,
                label_x,
            }
        })
        .collect()
}

fn tick_y(tick: usize, top: usize) -> f64 {
    let plot_height = BAR_HEIGHT - BAR_MARGIN_BOTTOM;
    plot_height - plot_height * tick as f64 / top.max(1) as f64
}

#[component]
pub fn StatsCharts(projects: ProjectStats, activity: Vec<DayBucket>) -> impl IntoView {
    let shares = proportion_view(&projects);
    let segments = donut_segments(&shares.iter().map(|s| s.value).collect::<Vec<_>>());
    let empty = segments.iter().all(Option::is_none);

    let ticks = axis_ticks(activity.iter().map(|b| b.count).max().unwrap_or(0));
    let top = ticks.last().copied().unwrap_or(1);
    let bars = bar_geometry(&activity);
    let center = DONUT_SIZE / 2.0;
    let ring_width = DONUT_OUTER - DONUT_INNER;
    let ring_radius = (DONUT_OUTER + DONUT_INNER) / 2.0;

    view! {
        <div class="charts">
            <div class="card chart">
                <h3 class="chart__title">"Project Distribution"</h3>
                <svg class="chart__svg" viewBox=format!("0 0 {DONUT_SIZE} {DONUT_SIZE}")>
                    {empty.then(|| view! {
                        <circle
                            cx=center
                            cy=center
                            r=ring_radius
                            fill="none"
                            stroke="#E2E8F0"
                            stroke-width=ring_width
                        />
                    })}
                    {segments
                        .into_iter()
                        .zip(shares.iter())
                        .filter_map(|(segment, share)| segment.map(|d| (d, share.clone())))
                        .map(|(d, share)| view! {
                            <path d=d fill=share.color aria-label=format!("{}: {}", share.label, share.value)></path>
                        })
                        .collect_view()}
                </svg>
                <div class="chart__legend">
                    {shares
                        .iter()
                        .map(|share| view! {
                            <div class="chart__legend-item">
                                <span class="chart__swatch" style=format!("background-color: {}", share.color)></span>
                                <span>{share.label}</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card chart">
                <h3 class="chart__title">"Message Activity (Last 7 Days)"</h3>
                <svg class="chart__svg" viewBox=format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}")>
                    {ticks
                        .iter()
                        .map(|&tick| {
                            let y = tick_y(tick, top);
                            view! {
                                <line
                                    x1=BAR_MARGIN_LEFT
                                    x2=BAR_WIDTH
                                    y1=y
                                    y2=y
                                    stroke="#E2E8F0"
                                    stroke-dasharray="3 3"
                                />
                                <text class="chart__tick" x={BAR_MARGIN_LEFT - 8.0} y={y + 4.0} text-anchor="end">
                                    {tick}
                                </text>
                            }
                        })
                        .collect_view()}
                    {bars
                        .into_iter()
                        .zip(activity)
                        .map(|(bar, bucket)| view! {
                            <rect
                                x=bar.x
                                y=bar.y
                                width=bar.width
                                height=bar.height
                                rx="6"
                                fill=BAR_COLOR
                                aria-label=format!("{}: {} messages", bucket.day, bucket.count)
                            ></rect>
                            <text
                                class="chart__tick"
                                x=bar.label_x
                                y={BAR_HEIGHT - 8.0}
                                text-anchor="middle"
                            >
                                {bucket.label}
                            </text>
                        })
                        .collect_view()}
                </svg>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "stats_charts_test.rs"]
mod stats_charts_test;
