//! Pure SVG geometry for the dashboard charts.

use std::f64::consts::TAU;

/// Maps a numeric domain linearly onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// A degenerate domain (single value) maps to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Round axis maximum and evenly spaced ticks from zero: `nice_ticks(470, 5)`
/// gives `[0, 100, 200, 300, 400, 500]`.
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    let target = target.max(1);
    if !max.is_finite() || max <= 0.0 {
        return vec![0.0, 1.0];
    }
    let raw_step = max / target as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let step = match normalized {
        n if n <= 1.0 => 1.0,
        n if n <= 2.0 => 2.0,
        n if n <= 2.5 => 2.5,
        n if n <= 5.0 => 5.0,
        _ => 10.0,
    } * magnitude;

    let count = (max / step).ceil() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Indices of at most `max_labels` evenly spread points, always including
/// the first and last.
pub fn label_indices(len: usize, max_labels: usize) -> Vec<usize> {
    if len == 0 || max_labels == 0 {
        return Vec::new();
    }
    if len <= max_labels {
        return (0..len).collect();
    }
    if max_labels == 1 {
        return vec![0];
    }
    let last = len - 1;
    let mut indices: Vec<usize> = (0..max_labels)
        .map(|i| (i * last + (max_labels - 1) / 2) / (max_labels - 1))
        .collect();
    indices.dedup();
    indices
}

/// `points` attribute for an SVG polyline through `(x, y)` data points.
pub fn polyline_points(points: &[(f64, f64)], x: &LinearScale, y: &LinearScale) -> String {
    points
        .iter()
        .map(|(px, py)| format!("{:.1},{:.1}", x.map(*px), y.map(*py)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// SVG path for a pie slice between two fractions of a full turn, starting
/// at twelve o'clock and running clockwise.
pub fn slice_path(cx: f64, cy: f64, radius: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(0.0, 1.0);
    if sweep >= 1.0 - 1e-9 {
        // A single arc cannot close on itself; draw two halves.
        return format!(
            "M {cx:.2} {top:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {bottom:.2} A {radius:.2} {radius:.2} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - radius,
            bottom = cy + radius,
        );
    }
    let (x0, y0) = polar(cx, cy, radius, start);
    let (x1, y1) = polar(cx, cy, radius, start + sweep);
    let large_arc = if sweep > 0.5 { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

fn polar(cx: f64, cy: f64, radius: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU;
    (cx + radius * angle.sin(), cy - radius * angle.cos())
}
