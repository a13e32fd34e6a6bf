// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transform and pointer-to-world mapping.
//!
//! The visible region of world space (the *viewbox*) is derived from the
//! plot size plus a 10% margin per axis, then zoomed by `scale` and
//! shifted by the pan offset. Pointer positions travel
//! device pixels → normalized `[0, 1]²` → world feet.
//!
//! Nothing here ever fails: a zero-sized element maps to the origin and
//! unparseable plot dimensions fall back to a `0 0 1 1` viewbox.

use super::mouse::{ClientRect, PointerEvent};
use crate::error::parse_dimension;
use crate::settings;
use kurbo::{Point, Vec2};
use serde::Serialize;
use std::fmt;

// ===== View Transform =====

/// Pan and zoom applied on top of the plot-derived viewbox
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewTransform {
    /// Zoom factor, kept within `[MIN_ZOOM, MAX_ZOOM]`
    scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewTransform {
    pub const IDENTITY: ViewTransform = ViewTransform {
        scale: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.offset_x, self.offset_y)
    }

    /// Shift the visible window by `delta` world units
    pub fn pan(&mut self, delta: Vec2) {
        self.offset_x += delta.x;
        self.offset_y += delta.y;
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale * settings::viewport::ZOOM_IN_FACTOR);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale * settings::viewport::ZOOM_OUT_FACTOR);
    }

    pub fn reset(&mut self) {
        *self = Self::IDENTITY;
    }

    fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(settings::viewport::MIN_ZOOM, settings::viewport::MAX_ZOOM);
        tracing::debug!("Viewport: scale {}", self.scale);
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// ===== Viewbox =====

/// The rectangle of world space currently mapped onto the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewbox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewbox {
    /// Used whenever the plot dimensions cannot be read
    pub const FALLBACK: Viewbox = Viewbox {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Formats as an SVG `viewBox` attribute
impl fmt::Display for Viewbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

// ===== Coordinate Mapping =====

/// Map a device-pixel position into `[0, 1]²` relative to `bounds`.
///
/// A zero-sized element maps everything to the origin.
pub fn device_to_normalized(pos: Point, bounds: &ClientRect) -> Point {
    if bounds.is_degenerate() {
        tracing::warn!("Viewport: zero-sized drawing surface, mapping pointer to origin");
        return Point::ZERO;
    }
    let nx = (pos.x - bounds.left) / bounds.width;
    let ny = (pos.y - bounds.top) / bounds.height;
    Point::new(unit_clamp(nx), unit_clamp(ny))
}

/// `world = viewbox origin + normalized * viewbox size`
pub fn normalized_to_world(normalized: Point, viewbox: &Viewbox) -> Point {
    Point::new(
        viewbox.x + normalized.x * viewbox.width,
        viewbox.y + normalized.y * viewbox.height,
    )
}

/// World position of a pointer event under `viewbox`
pub fn event_to_world(event: &PointerEvent, viewbox: &Viewbox) -> Point {
    let normalized = device_to_normalized(event.client_pos(), &event.bounding_client_rect);
    normalized_to_world(normalized, viewbox)
}

/// Viewbox for a `plot_width` x `plot_height` plot under `transform`.
pub fn compute_viewbox(plot_width: f64, plot_height: f64, transform: &ViewTransform) -> Viewbox {
    if !plot_width.is_finite() || !plot_height.is_finite() {
        tracing::warn!(
            "Viewport: non-finite plot size {} x {}, using fallback viewbox",
            plot_width,
            plot_height
        );
        return Viewbox::FALLBACK;
    }
    let pad_x = plot_width * settings::viewport::PADDING;
    let pad_y = plot_height * settings::viewport::PADDING;
    let base = Viewbox {
        x: -pad_x,
        y: -pad_y,
        width: plot_width + 2.0 * pad_x,
        height: plot_height + 2.0 * pad_y,
    };
    let viewbox = Viewbox {
        x: base.x + transform.offset_x,
        y: base.y + transform.offset_y,
        width: base.width / transform.scale(),
        height: base.height / transform.scale(),
    };
    if [viewbox.x, viewbox.y, viewbox.width, viewbox.height]
        .iter()
        .all(|v| v.is_finite())
    {
        viewbox
    } else {
        tracing::warn!("Viewport: viewbox overflowed, using fallback viewbox");
        Viewbox::FALLBACK
    }
}

/// Viewbox from the user-typed plot dimension fields.
///
/// Text that does not parse as a number yields [`Viewbox::FALLBACK`].
pub fn viewbox_for_plot_text(width: &str, height: &str, transform: &ViewTransform) -> Viewbox {
    match (parse_dimension(width), parse_dimension(height)) {
        (Ok(w), Ok(h)) => compute_viewbox(w, h, transform),
        _ => {
            tracing::warn!(
                "Viewport: unreadable plot size {:?} x {:?}, using fallback viewbox",
                width,
                height
            );
            Viewbox::FALLBACK
        }
    }
}

fn unit_clamp(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn zoom_in_saturates_at_max() {
        let mut t = ViewTransform::new();
        for _ in 0..50 {
            t.zoom_in();
        }
        assert_eq!(t.scale(), 10.0);
    }

    #[test]
    fn zoom_out_saturates_at_min() {
        let mut t = ViewTransform::new();
        for _ in 0..50 {
            t.zoom_out();
        }
        assert_eq!(t.scale(), 0.1);
    }

    #[test]
    fn single_zoom_steps() {
        let mut t = ViewTransform::new();
        t.zoom_in();
        assert!(approx(t.scale(), 1.2));
        t.zoom_out();
        assert!(approx(t.scale(), 0.96));
    }

    #[test]
    fn pan_accumulates_offset() {
        let mut t = ViewTransform::new();
        t.pan(Vec2::new(3.0, -2.0));
        t.pan(Vec2::new(1.0, 1.0));
        assert_eq!(t.offset(), Vec2::new(4.0, -1.0));
        t.reset();
        assert_eq!(t, ViewTransform::IDENTITY);
    }

    #[test]
    fn viewbox_adds_ten_percent_margin() {
        let vb = compute_viewbox(50.0, 90.0, &ViewTransform::IDENTITY);
        assert!(approx(vb.x, -5.0));
        assert!(approx(vb.y, -9.0));
        assert!(approx(vb.width, 60.0));
        assert!(approx(vb.height, 108.0));
    }

    #[test]
    fn viewbox_applies_scale_and_offset() {
        let mut t = ViewTransform::new();
        t.zoom_in();
        t.pan(Vec2::new(2.0, 3.0));
        let vb = compute_viewbox(100.0, 100.0, &t);
        assert!(approx(vb.x, -8.0));
        assert!(approx(vb.y, -7.0));
        assert!(approx(vb.width, 100.0));
        assert!(approx(vb.height, 100.0));
    }

    #[test]
    fn overflowing_plot_text_uses_fallback() {
        let t = ViewTransform::IDENTITY;
        assert_eq!(viewbox_for_plot_text("1.7e308", "10", &t), Viewbox::FALLBACK);
        assert_eq!(compute_viewbox(10.0, 1.7e308, &t), Viewbox::FALLBACK);
    }

    #[test]
    fn malformed_plot_text_uses_fallback() {
        let t = ViewTransform::IDENTITY;
        assert_eq!(viewbox_for_plot_text("abc", "90", &t), Viewbox::FALLBACK);
        assert_eq!(viewbox_for_plot_text("50", "", &t), Viewbox::FALLBACK);
        assert_eq!(compute_viewbox(f64::NAN, 1.0, &t), Viewbox::FALLBACK);
        assert_eq!(Viewbox::FALLBACK.to_string(), "0 0 1 1");
    }

    #[test]
    fn plot_text_matches_numeric_viewbox() {
        let t = ViewTransform::IDENTITY;
        assert_eq!(
            viewbox_for_plot_text("50", "90", &t),
            compute_viewbox(50.0, 90.0, &t)
        );
    }

    #[test]
    fn normalizes_relative_to_bounds() {
        let bounds = ClientRect::new(100.0, 50.0, 200.0, 100.0);
        let n = device_to_normalized(Point::new(150.0, 100.0), &bounds);
        assert_eq!(n, Point::new(0.25, 0.5));
    }

    #[test]
    fn normalization_clamps_outside_points() {
        let bounds = ClientRect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(device_to_normalized(Point::new(-20.0, 250.0), &bounds), Point::new(0.0, 1.0));
    }

    #[test]
    fn zero_sized_bounds_map_to_origin() {
        let n = device_to_normalized(Point::new(15.0, 30.0), &ClientRect::new(0.0, 0.0, 0.0, 80.0));
        assert_eq!(n, Point::ZERO);
        let n = device_to_normalized(Point::new(15.0, 30.0), &ClientRect::new(0.0, 0.0, 80.0, 0.0));
        assert_eq!(n, Point::ZERO);
    }

    #[test]
    fn event_maps_into_world() {
        // 100x100 plot -> viewbox -10 -10 120 120; 240px surface -> 0.5 ft per px
        let vb = compute_viewbox(100.0, 100.0, &ViewTransform::IDENTITY);
        let bounds = ClientRect::new(0.0, 0.0, 240.0, 240.0);
        let event = PointerEvent::new(0, 120.0, 60.0, bounds);
        let world = event_to_world(&event, &vb);
        assert!(approx(world.x, 50.0));
        assert!(approx(world.y, 20.0));
    }

    #[test]
    fn viewbox_string_format() {
        let vb = Viewbox {
            x: -5.0,
            y: -9.5,
            width: 60.0,
            height: 108.25,
        };
        assert_eq!(vb.to_string(), "-5 -9.5 60 108.25");
    }
}
