use std::f64::consts::PI;

use serde::Serialize;

use super::{BarOrientation, BranchPoint, ChartPoint};

/// Circumference of the ROI gauge ring (r = 110).
pub const GAUGE_CIRCUMFERENCE: f64 = 691.0;
/// ROI at which the gauge ring is full.
pub const GAUGE_CAP: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarShape {
    pub label: String,
    pub display: String,
    pub color: String,
    pub rect: Rect,
    pub label_x: f64,
    pub label_y: f64,
    pub label_anchor: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliceShape {
    pub label: String,
    pub display: String,
    pub color: String,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeShape {
    pub circumference: f64,
    pub offset: f64,
}

/// Drawing area of a bar chart.
#[derive(Debug, Clone, Copy)]
pub struct BarFrame {
    pub width: f64,
    pub height: f64,
    /// Space reserved for category labels (left/right band for horizontal
    /// charts, bottom band for vertical ones).
    pub label_band: f64,
    pub bar_thickness: f64,
}

impl BarFrame {
    pub const SPEND: BarFrame = BarFrame {
        width: 640.0,
        height: 220.0,
        label_band: 150.0,
        bar_thickness: 48.0,
    };

    pub const BRANCH: BarFrame = BarFrame {
        width: 640.0,
        height: 320.0,
        label_band: 40.0,
        bar_thickness: 50.0,
    };
}

/// Lay out a horizontal bar chart, one row per point, in input order.
pub fn horizontal_bars(
    points: &[ChartPoint],
    orientation: BarOrientation,
    frame: BarFrame,
) -> Vec<BarShape> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = max_value(points.iter().map(|p| p.value));
    let track = (frame.width - frame.label_band).max(0.0);
    let row = frame.height / points.len() as f64;
    let thickness = frame.bar_thickness.min(row);

    points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let length = track * point.value.max(0.0) / max;
            let y = row * idx as f64 + (row - thickness) / 2.0;
            let (x, label_x, label_anchor) = match orientation {
                BarOrientation::Start => (frame.label_band, frame.label_band - 12.0, "end"),
                BarOrientation::End => (
                    frame.width - frame.label_band - length,
                    frame.width - frame.label_band + 12.0,
                    "start",
                ),
            };
            BarShape {
                label: point.label.clone(),
                display: point.display.clone(),
                color: point.color.clone(),
                rect: Rect {
                    x: round2(x),
                    y: round2(y),
                    width: round2(length),
                    height: round2(thickness),
                },
                label_x: round2(label_x),
                label_y: round2(y + thickness / 2.0),
                label_anchor,
            }
        })
        .collect()
}

/// Lay out a vertical bar chart, one column per branch, left to right in
/// input order.
pub fn vertical_bars(points: &[BranchPoint], color: &str, frame: BarFrame) -> Vec<BarShape> {
    if points.is_empty() {
        return Vec::new();
    }
    let max = max_value(points.iter().map(|p| p.value));
    let track = (frame.height - frame.label_band).max(0.0);
    let slot = frame.width / points.len() as f64;
    let thickness = frame.bar_thickness.min(slot * 0.8);

    points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let length = track * point.value.max(0.0) / max;
            let x = slot * idx as f64 + (slot - thickness) / 2.0;
            BarShape {
                label: point.label.clone(),
                display: point.display.clone(),
                color: color.to_string(),
                rect: Rect {
                    x: round2(x),
                    y: round2(track - length),
                    width: round2(thickness),
                    height: round2(length),
                },
                label_x: round2(x + thickness / 2.0),
                label_y: round2(frame.height - frame.label_band / 3.0),
                label_anchor: "middle",
            }
        })
        .collect()
}

/// Donut slices clockwise from twelve o'clock, separated by `pad_degrees`.
pub fn donut(
    points: &[ChartPoint],
    center: (f64, f64),
    inner_radius: f64,
    outer_radius: f64,
    pad_degrees: f64,
) -> Vec<SliceShape> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let pad = if points.len() > 1 { pad_degrees } else { 0.0 };
    let available = 360.0 - pad * points.len() as f64;

    let mut cursor = -90.0;
    points
        .iter()
        .map(|point| {
            let sweep = (available * point.value.max(0.0) / total).min(359.99);
            let start = cursor;
            let end = cursor + sweep;
            cursor = end + pad;
            SliceShape {
                label: point.label.clone(),
                display: point.display.clone(),
                color: point.color.clone(),
                path: arc_path(center, inner_radius, outer_radius, start, end),
            }
        })
        .collect()
}

/// Ring progress for the ROI gauge, capped at [`GAUGE_CAP`].
pub fn gauge(roi: f64) -> GaugeShape {
    let ratio = if roi.is_finite() {
        roi.clamp(0.0, GAUGE_CAP) / GAUGE_CAP
    } else {
        0.0
    };
    GaugeShape {
        circumference: GAUGE_CIRCUMFERENCE,
        offset: round2(GAUGE_CIRCUMFERENCE - GAUGE_CIRCUMFERENCE * ratio),
    }
}

fn arc_path(center: (f64, f64), r_in: f64, r_out: f64, start: f64, end: f64) -> String {
    let large = if end - start > 180.0 { 1 } else { 0 };
    let (osx, osy) = polar(center, r_out, start);
    let (oex, oey) = polar(center, r_out, end);
    let (iex, iey) = polar(center, r_in, end);
    let (isx, isy) = polar(center, r_in, start);
    format!(
        "M {osx:.2} {osy:.2} A {r_out} {r_out} 0 {large} 1 {oex:.2} {oey:.2} \
         L {iex:.2} {iey:.2} A {r_in} {r_in} 0 {large} 0 {isx:.2} {isy:.2} Z"
    )
}

fn polar(center: (f64, f64), radius: f64, degrees: f64) -> (f64, f64) {
    let radians = degrees * PI / 180.0;
    (
        center.0 + radius * radians.cos(),
        center.1 + radius * radians.sin(),
    )
}

fn max_value(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
