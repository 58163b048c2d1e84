//! Geometry for the SVG charts: axes, bars, line and area paths, pie and
//! donut arcs. Pure functions of the data and the drawing frame.

use std::f64::consts::{PI, TAU};

use crate::projection::Point;

/// Default series colours, in order.
pub const PALETTE: [&str; 4] = ["#369936", "#22C55E", "#EAB308", "#EF4444"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Area,
    Pie,
    Donut,
}

impl ChartKind {
    pub fn is_radial(self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }
}

/// One labelled value.
#[derive(Debug, Clone, PartialEq)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

// ─── Cartesian ───────────────────────────────────────────────────────────────

/// Drawing area with margins for the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Frame {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, top: 20.0, right: 30.0, bottom: 30.0, left: 45.0 }
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    /// Y coordinate of the value axis baseline.
    pub fn baseline(&self) -> f64 {
        self.top + self.inner_height()
    }

    /// Y coordinate for `value` on an axis running `0..=max`.
    pub fn value_y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value / max).clamp(0.0, 1.0) * self.inner_height()
    }

    /// Width of one category band.
    pub fn band(&self, count: usize) -> f64 {
        if count == 0 { 0.0 } else { self.inner_width() / count as f64 }
    }

    /// X coordinate at the centre of band `index`.
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.left + self.band(count) * (index as f64 + 0.5)
    }
}

/// Smallest 1/2/2.5/5 × 10ⁿ step that is at least `max`. Never below 1.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 1.0 {
        return 1.0;
    }
    let magnitude = 10f64.powi(max.log10().floor() as i32);
    let normalized = max / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s + 1e-9)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced axis ticks from 0 to `max` inclusive.
pub fn ticks(max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals).map(|i| max * i as f64 / intervals as f64).collect()
}

pub fn max_value(data: &[Datum]) -> f64 {
    data.iter().map(|d| d.value).fold(0.0, f64::max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per datum, 60% of its band wide, rising from the baseline.
pub fn bars(data: &[Datum], frame: &Frame, max: f64) -> Vec<BarRect> {
    let band = frame.band(data.len());
    let width = band * 0.6;
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            let y = frame.value_y(d.value, max);
            BarRect {
                x: frame.band_center(i, data.len()) - width / 2.0,
                y,
                width,
                height: frame.baseline() - y,
            }
        })
        .collect()
}

/// Data points at band centres.
pub fn line_points(data: &[Datum], frame: &Frame, max: f64) -> Vec<Point> {
    data.iter()
        .enumerate()
        .map(|(i, d)| Point::new(frame.band_center(i, data.len()), frame.value_y(d.value, max)))
        .collect()
}

/// `M … L …` path through the points; empty for no points.
pub fn line_path(points: &[Point]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{cmd}{:.1},{:.1}", p.x, p.y));
    }
    path
}

/// The line path closed down to `baseline`.
pub fn area_path(points: &[Point], baseline: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line_path(points),
        last.x,
        baseline,
        first.x,
        baseline
    )
}

// ─── Radial ──────────────────────────────────────────────────────────────────

/// One pie or donut slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Index into the input data, for colour lookup.
    pub index: usize,
    pub start: f64,
    pub end: f64,
    /// Share of the total, 0–100.
    pub percent: f64,
    pub path: String,
    /// Where to anchor the percentage label.
    pub label_at: Point,
}

impl Slice {
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Slices clockwise from twelve o'clock. Zero and negative values produce
/// no slice; an all-zero series produces none at all. A donut has
/// `inner > 0`.
pub fn slices(data: &[Datum], center: Point, outer: f64, inner: f64) -> Vec<Slice> {
    let total: f64 = data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut angle = -PI / 2.0;
    let mut out = Vec::new();
    for (index, d) in data.iter().enumerate() {
        if d.value <= 0.0 {
            continue;
        }
        let sweep = d.value / total * TAU;
        let start = angle;
        let end = angle + sweep;
        angle = end;
        let mid = (start + end) / 2.0;
        let label_radius = if inner > 0.0 { (outer + inner) / 2.0 } else { outer * 0.65 };
        out.push(Slice {
            index,
            start,
            end,
            percent: d.value / total * 100.0,
            path: arc_path(center, outer, inner, start, end),
            label_at: polar(center, label_radius, mid),
        });
    }
    out
}

/// SVG path for an annular sector, or a pie wedge when `inner` is zero. A
/// full turn is drawn as two half arcs; render it with `fill-rule="evenodd"`.
pub fn arc_path(center: Point, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        return ring_path(center, outer, inner);
    }
    let large = if sweep > PI { 1 } else { 0 };
    let o0 = polar(center, outer, start);
    let o1 = polar(center, outer, end);
    if inner <= 0.0 {
        return format!(
            "M{:.2},{:.2} L{:.2},{:.2} A{outer:.2},{outer:.2} 0 {large} 1 {:.2},{:.2} Z",
            center.x, center.y, o0.x, o0.y, o1.x, o1.y
        );
    }
    let i0 = polar(center, inner, start);
    let i1 = polar(center, inner, end);
    format!(
        "M{:.2},{:.2} A{outer:.2},{outer:.2} 0 {large} 1 {:.2},{:.2} \
         L{:.2},{:.2} A{inner:.2},{inner:.2} 0 {large} 0 {:.2},{:.2} Z",
        o0.x, o0.y, o1.x, o1.y, i1.x, i1.y, i0.x, i0.y
    )
}

fn ring_path(center: Point, outer: f64, inner: f64) -> String {
    let circle = |r: f64| {
        format!(
            "M{:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} A{r:.2},{r:.2} 0 1 1 {:.2},{:.2} Z",
            center.x,
            center.y - r,
            center.x,
            center.y + r,
            center.x,
            center.y - r
        )
    };
    if inner <= 0.0 {
        circle(outer)
    } else {
        format!("{} {}", circle(outer), circle(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<Datum> {
        values.iter().enumerate().map(|(i, v)| Datum::new(format!("d{i}"), *v)).collect()
    }

    #[test]
    fn test_nice_max() {
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(18.0), 20.0);
        assert_eq!(nice_max(234.0), 250.0);
        assert_eq!(nice_max(310.0), 500.0);
        assert_eq!(nice_max(1000.0), 1000.0);
    }

    #[test]
    fn test_ticks() {
        assert_eq!(ticks(200.0, 4), vec![0.0, 50.0, 100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_bars_scale_to_max() {
        let frame = Frame::new(400.0, 250.0);
        let rects = bars(&series(&[50.0, 100.0, 0.0]), &frame, 100.0);
        assert_eq!(rects.len(), 3);
        assert!((rects[1].height - frame.inner_height()).abs() < 1e-9);
        assert!((rects[0].height * 2.0 - rects[1].height).abs() < 1e-9);
        assert_eq!(rects[2].height, 0.0);
        assert!(rects[0].x < rects[1].x && rects[1].x < rects[2].x);
    }

    #[test]
    fn test_line_and_area_paths() {
        let frame = Frame::new(300.0, 200.0);
        let pts = line_points(&series(&[1.0, 2.0]), &frame, 2.0);
        let line = line_path(&pts);
        assert!(line.starts_with('M'));
        assert_eq!(line.matches('L').count(), 1);
        let area = area_path(&pts, frame.baseline());
        assert!(area.ends_with('Z'));
        assert_eq!(area_path(&[], 0.0), "");
        assert_eq!(line_path(&[]), "");
    }

    #[test]
    fn test_slices_share_the_circle() {
        let center = Point::new(100.0, 100.0);
        let s = slices(&series(&[30.0, 0.0, 70.0]), center, 80.0, 40.0);
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].index, 2);
        assert!((s[0].percent - 30.0).abs() < 1e-9);
        assert_eq!(s[1].percent_label(), "70%");
        assert!((s[1].end - s[0].start - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_draws_full_ring() {
        let s = slices(&series(&[5.0]), Point::new(50.0, 50.0), 40.0, 20.0);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].path.matches('M').count(), 2);
        assert!(!s[0].path.contains("NaN"));
    }

    #[test]
    fn test_zero_total_has_no_slices() {
        assert!(slices(&series(&[0.0, 0.0]), Point::new(0.0, 0.0), 10.0, 0.0).is_empty());
        assert!(slices(&[], Point::new(0.0, 0.0), 10.0, 0.0).is_empty());
    }

    #[test]
    fn test_pie_wedge_starts_at_center() {
        let p = arc_path(Point::new(10.0, 10.0), 5.0, 0.0, 0.0, PI / 2.0);
        assert!(p.starts_with("M10.00,10.00 L"));
    }
}
