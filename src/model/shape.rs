// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Shapes drawn on the plan: walls, rooms, and the plot boundary.
//!
//! Geometry is stored in world space (feet). A `Shape` keeps its own
//! invariants: rectangles always hold exactly four axis-aligned corners,
//! `is_closed` follows the kind, and `area` is recomputed whenever the
//! points are replaced. Area is only computed for rectangles; every other
//! kind reports `0.0`.

use super::ShapeId;
use crate::theme;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

// ===== Shape Kind =====

/// The geometric kind of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle, four corners
    Rectangle,
    /// Closed polygon, one point per placed vertex
    Polygon,
    /// Straight segment, start and end
    Line,
    /// Open stroke, one point per pointer sample
    Freehand,
}

impl ShapeKind {
    /// Closed kinds are rendered as filled polygons
    pub fn is_closed(self) -> bool {
        matches!(self, ShapeKind::Rectangle | ShapeKind::Polygon)
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Polygon => "polygon",
            ShapeKind::Line => "line",
            ShapeKind::Freehand => "freehand",
        }
    }
}

// ===== Shape Style =====

/// Visual attributes of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeStyle {
    /// Stroke width in millimetres, always positive
    pub stroke_width_mm: f64,
    pub stroke_color: String,
    /// Fill color, or `"transparent"`
    pub fill_color: String,
    pub layer: String,
    pub label_visible: bool,
}

impl ShapeStyle {
    /// Stroke widths must be positive and finite
    pub fn is_valid_stroke_width(width_mm: f64) -> bool {
        width_mm.is_finite() && width_mm > 0.0
    }

    /// This style, with an invalid stroke width replaced by `fallback_mm`
    pub fn with_stroke_width_or(mut self, fallback_mm: f64) -> Self {
        if !Self::is_valid_stroke_width(self.stroke_width_mm) {
            tracing::warn!(
                "Ignoring stroke width {}, using {}",
                self.stroke_width_mm,
                fallback_mm
            );
            self.stroke_width_mm = fallback_mm;
        }
        self
    }

    /// Style of the plot boundary rectangle
    pub fn plot() -> Self {
        Self {
            stroke_width_mm: theme::plot::STROKE_MM,
            stroke_color: theme::plot::STROKE_COLOR.to_string(),
            fill_color: theme::plot::FILL_COLOR.to_string(),
            layer: theme::plot::LAYER.to_string(),
            label_visible: true,
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_width_mm: theme::shape::STROKE_MM,
            stroke_color: theme::shape::STROKE_COLOR.to_string(),
            fill_color: theme::shape::FILL_COLOR.to_string(),
            layer: theme::shape::LAYER.to_string(),
            label_visible: true,
        }
    }
}

// ===== Shape =====

/// A committed or in-progress shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    id: ShapeId,
    #[serde(rename = "type")]
    kind: ShapeKind,
    points: Vec<Point>,
    #[serde(flatten)]
    pub style: ShapeStyle,
    is_closed: bool,
    area: f64,
}

impl Shape {
    /// Create a shape of any kind from raw points.
    ///
    /// Callers building rectangles must pass the four corners produced by
    /// [`rect_corners`]; [`Shape::rectangle`] does that for you.
    pub(crate) fn new(id: ShapeId, kind: ShapeKind, points: Vec<Point>, style: ShapeStyle) -> Self {
        let area = area_of(kind, &points);
        Self {
            id,
            kind,
            points,
            style,
            is_closed: kind.is_closed(),
            area,
        }
    }

    /// Axis-aligned rectangle spanned by two opposite corners
    pub fn rectangle(id: ShapeId, corner: Point, opposite: Point, style: ShapeStyle) -> Self {
        Self::new(
            id,
            ShapeKind::Rectangle,
            rect_corners(corner, opposite).to_vec(),
            style,
        )
    }

    /// Replace the whole point list, recomputing derived fields
    pub(crate) fn with_points(mut self, points: Vec<Point>) -> Self {
        self.area = area_of(self.kind, &points);
        self.points = points;
        self
    }

    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// Area in square feet (rectangles only, `0.0` otherwise)
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Points as an SVG `points` attribute: `"x,y x,y ..."`
    pub fn point_string(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", p.x, p.y);
        }
        out
    }
}

/// The four corners of the axis-aligned rectangle with `start` as its
/// fixed corner: `start, (cur.x, start.y), cur, (start.x, cur.y)`.
pub fn rect_corners(start: Point, cur: Point) -> [Point; 4] {
    [
        start,
        Point::new(cur.x, start.y),
        cur,
        Point::new(start.x, cur.y),
    ]
}

fn area_of(kind: ShapeKind, points: &[Point]) -> f64 {
    match kind {
        ShapeKind::Rectangle => match points {
            [p0, _, p2, _] => ((p2.x - p0.x) * (p2.y - p0.y)).abs(),
            _ => 0.0,
        },
        ShapeKind::Polygon | ShapeKind::Line | ShapeKind::Freehand => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ShapeId {
        ShapeId::from(s)
    }

    #[test]
    fn stroke_width_fallback() {
        let style = ShapeStyle {
            stroke_width_mm: f64::NAN,
            ..ShapeStyle::default()
        };
        assert_eq!(style.with_stroke_width_or(0.4).stroke_width_mm, 0.4);

        let style = ShapeStyle {
            stroke_width_mm: 2.0,
            ..ShapeStyle::default()
        };
        assert_eq!(style.with_stroke_width_or(0.4).stroke_width_mm, 2.0);
        assert!(!ShapeStyle::is_valid_stroke_width(-0.1));
    }

    #[test]
    fn rectangle_has_four_axis_aligned_corners() {
        let rect = Shape::rectangle(
            id("r"),
            Point::new(0.0, 0.0),
            Point::new(5.0, 3.0),
            ShapeStyle::default(),
        );
        assert_eq!(
            rect.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 3.0),
                Point::new(0.0, 3.0),
            ]
        );
        assert_eq!(rect.area(), 15.0);
        assert!(rect.is_closed());
    }

    #[test]
    fn rectangle_area_is_absolute() {
        let rect = Shape::rectangle(
            id("r"),
            Point::new(4.0, 4.0),
            Point::new(1.0, 2.0),
            ShapeStyle::default(),
        );
        assert_eq!(rect.area(), 6.0);
    }

    #[test]
    fn degenerate_rectangle_has_zero_area() {
        let p = Point::new(2.0, 2.0);
        let rect = Shape::rectangle(id("r"), p, p, ShapeStyle::default());
        assert_eq!(rect.points().len(), 4);
        assert_eq!(rect.area(), 0.0);
    }

    #[test]
    fn open_kinds_have_no_area() {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 4.0),
        ];
        for kind in [ShapeKind::Polygon, ShapeKind::Line, ShapeKind::Freehand] {
            let shape = Shape::new(id("s"), kind, pts.clone(), ShapeStyle::default());
            assert_eq!(shape.area(), 0.0);
        }
    }

    #[test]
    fn closedness_follows_kind() {
        assert!(ShapeKind::Rectangle.is_closed());
        assert!(ShapeKind::Polygon.is_closed());
        assert!(!ShapeKind::Line.is_closed());
        assert!(!ShapeKind::Freehand.is_closed());
    }

    #[test]
    fn with_points_recomputes_area() {
        let p = Point::new(1.0, 1.0);
        let rect = Shape::rectangle(id("r"), p, p, ShapeStyle::default());
        let grown = rect.with_points(rect_corners(p, Point::new(3.0, 4.0)).to_vec());
        assert_eq!(grown.area(), 6.0);
    }

    #[test]
    fn point_string_format() {
        let shape = Shape::new(
            id("l"),
            ShapeKind::Line,
            vec![Point::new(1.5, 2.0), Point::new(-3.0, 4.25)],
            ShapeStyle::default(),
        );
        assert_eq!(shape.point_string(), "1.5,2 -3,4.25");
    }

    #[test]
    fn default_and_plot_styles() {
        let style = ShapeStyle::default();
        assert_eq!(style.stroke_width_mm, 0.25);
        assert_eq!(style.stroke_color, "#1a1a1a");
        assert_eq!(style.fill_color, "transparent");
        assert_eq!(style.layer, "default");
        assert!(style.label_visible);

        let plot = ShapeStyle::plot();
        assert_eq!(plot.stroke_width_mm, 0.5);
        assert_eq!(plot.stroke_color, "#9ca3af");
        assert_eq!(plot.layer, "plot");
    }

    #[test]
    fn serializes_kind_as_type() {
        let shape = Shape::new(
            id("f"),
            ShapeKind::Freehand,
            vec![Point::new(0.0, 0.0)],
            ShapeStyle::default(),
        );
        let json = serde_json::to_value(&shape).unwrap();
        assert_eq!(json["type"], "freehand");
        assert_eq!(json["id"], "f");
        assert_eq!(json["layer"], "default");
        assert_eq!(json["is_closed"], false);
    }
}
