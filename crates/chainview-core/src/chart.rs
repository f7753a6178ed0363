//! Bar-chart plot geometry.
//!
//! Pure rectangle math for bar overlays: callers map data through [`Axes`]
//! into canvas coordinates (x right, y down), pick a bar width, and fill the
//! returned rects with whatever drawing surface they own.

/// Affine data-to-canvas mapping for one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Axes {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    /// Canvas width in drawing units.
    pub width: f64,
    /// Canvas height in drawing units.
    pub height: f64,
}

impl Axes {
    /// Maps a data x to a canvas x. Degenerate x ranges map to 0.
    pub fn x_to_canvas(&self, x: f64) -> f64 {
        let span = self.x_max - self.x_min;
        if span <= 0.0 {
            return 0.0;
        }
        self.width * (x - self.x_min) / span
    }

    /// Maps a data y to a canvas y. Canvas y grows downward, so `y_max`
    /// lands at 0 and `y_min` at `height`.
    pub fn y_to_canvas(&self, y: f64) -> f64 {
        let span = self.y_max - self.y_min;
        if span <= 0.0 {
            return self.height;
        }
        self.height * (self.y_max - y) / span
    }
}

/// One bar, in canvas coordinates. `y` is the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Widest bar that never overlaps a neighbor: 2/3 of the minimum
/// separation between consecutive canvas x coordinates, floored.
///
/// Returns 0 for fewer than two points; callers clamp to their minimum
/// drawable width.
pub fn fit_width(canvas_xs: &[f64]) -> f64 {
    let mut min_sep = f64::INFINITY;
    for pair in canvas_xs.windows(2) {
        let sep = pair[1] - pair[0];
        if sep < min_sep {
            min_sep = sep;
        }
    }
    if min_sep.is_finite() {
        (2.0 / 3.0 * min_sep).floor()
    } else {
        0.0
    }
}

/// Bar width for a pre-binned series: 2/3 of one bin's canvas span, floored.
pub fn sized_bar_width(axes: &Axes, bin_size: f64) -> f64 {
    let canvas_bin = axes.x_to_canvas(axes.x_min + bin_size) - axes.x_to_canvas(axes.x_min);
    (2.0 / 3.0 * canvas_bin).floor()
}

/// One rect per point: centered on the point's canvas x, spanning from the
/// point's canvas y down to `y_bottom` (the zero line).
pub fn plot_bars(points: &[(f64, f64)], bar_width: f64, y_bottom: f64) -> Vec<BarRect> {
    points
        .iter()
        .map(|&(cx, cy)| BarRect {
            x: cx - bar_width / 2.0,
            y: cy,
            width: bar_width,
            height: y_bottom - cy,
        })
        .collect()
}

/// One sample of a multi-series plot: an x stamp plus one y per series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub x: f64,
    pub ys: Vec<f64>,
}

impl SeriesPoint {
    pub fn new(x: f64, ys: Vec<f64>) -> Self {
        Self { x, ys }
    }
}

/// Pads a series with synthetic end points so edge bars are not clipped:
/// a zero-valued point half a bin before the front, and a point half a bin
/// after the back (zero, or the last values when `sustain` holds the level).
/// Series spanning less than one bin get a wider pad so at least a full bin
/// is covered. Empty series are left alone.
pub fn pad_points(points: &mut Vec<SeriesPoint>, bin_size: f64, sustain: bool) {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return;
    };
    let mut pad = bin_size / 2.0;
    let duration = last.x - first.x;
    if duration < bin_size {
        pad = pad.max((bin_size - duration) / 2.0);
    }
    let series = first.ys.len();
    let front = SeriesPoint::new(first.x - pad, vec![0.0; series]);
    let back_ys = if sustain {
        last.ys.clone()
    } else {
        vec![0.0; series]
    };
    let back = SeriesPoint::new(last.x + pad, back_ys);
    points.insert(0, front);
    points.push(back);
}
