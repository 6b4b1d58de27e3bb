// File: crates/chartkit-core/src/lib.rs
// Summary: Core library entry point; exports the geometry engine, scale resolver and chart layout.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod error;
pub mod frame;
pub mod grid;
pub mod legend;
pub mod line;
pub mod math;
pub mod path;
pub mod pie;
pub mod scale;
pub mod series;
pub mod style;
pub mod theme;
pub mod touch;
pub mod types;

pub use chart::Chart;
pub use error::{ChartError, Result};
pub use frame::{Element, Frame, Stroke, TextAlign};
pub use math::{safe_divide, RANGE_EPSILON};
pub use path::{bezier_controls, rounded_rect, CornerRadii, Path, PathCommand};
pub use pie::{arc_segments, ArcSegment};
pub use scale::{Baseline, Scale, Topline};
pub use series::{ChartData, ChartKind, DataPoint, MultiSeries, Series};
pub use style::ChartStyle;
pub use theme::Theme;
pub use touch::TouchInfo;
pub use types::{Insets, Point, Rect, Rgba, Size};
