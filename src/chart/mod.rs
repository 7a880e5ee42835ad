//! Chart inputs and SVG geometry.
//!
//! [`adapters`] reshape slices of [`ReportData`](crate::data::ReportData) into
//! chart series for a locale and theme. [`geometry`] lays those series out as
//! SVG shapes. Neither touches the source dataset.

pub mod adapters;
pub mod geometry;

use serde::Serialize;

pub use adapters::{allocation, bar_orientation, branch_performance, spend_efficiency};

/// One labeled value in a bar or pie series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    pub color: String,
    /// Value formatted for the active locale.
    pub display: String,
}

/// One branch in the branch-revenue chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BranchPoint {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub tenant_count: u32,
    pub display: String,
}

/// Side the horizontal bars grow from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarOrientation {
    /// Left edge, bars grow rightwards.
    Start,
    /// Right edge, bars grow leftwards.
    End,
}
