// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Construction rules for the drawing tools.
//!
//! Each shape kind decides how its point list evolves over a gesture:
//! - Rectangle: four corners recomputed from the fixed first corner
//! - Line: exactly a start and a live end
//! - Polygon: one vertex per press and per move, never auto-committed
//! - Freehand: one point per move, no decimation
//!
//! The rules are pure: they take the current points and return a new list,
//! which the session swaps into the in-progress shape wholesale.

use crate::model::{ShapeKind, rect_corners};
use kurbo::Point;

/// Outcome of releasing the pointer during a drawing gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Release {
    /// Commit the shape with these final points
    Commit(Vec<Point>),
    /// Throw the shape away (e.g. a click-without-drag rectangle)
    Discard,
    /// Keep drawing; the shape waits for more input
    KeepDrawing,
}

impl ShapeKind {
    /// Points of a freshly pressed shape
    pub fn seed_points(self, start: Point) -> Vec<Point> {
        match self {
            ShapeKind::Rectangle => rect_corners(start, start).to_vec(),
            // The end point is duplicated up front so a line always has two
            // points while being dragged.
            ShapeKind::Line => vec![start, start],
            ShapeKind::Polygon | ShapeKind::Freehand => vec![start],
        }
    }

    /// Points after the pointer moved to `current`
    pub fn dragged_points(self, points: &[Point], start: Point, current: Point) -> Vec<Point> {
        match self {
            ShapeKind::Rectangle => rect_corners(start, current).to_vec(),
            ShapeKind::Line => line_to(points, current),
            ShapeKind::Polygon | ShapeKind::Freehand => appended(points, current),
        }
    }

    /// Points after another press while the shape is still in progress
    pub fn pressed_again(self, points: &[Point], current: Point) -> Vec<Point> {
        appended(points, current)
    }

    /// What happens when the pointer is released at `current`
    pub fn released(self, points: &[Point], start: Point, current: Point) -> Release {
        match self {
            ShapeKind::Rectangle => {
                if start.x != current.x && start.y != current.y {
                    Release::Commit(rect_corners(start, current).to_vec())
                } else {
                    Release::Discard
                }
            }
            ShapeKind::Line => Release::Commit(line_to(points, current)),
            ShapeKind::Freehand => Release::Commit(points.to_vec()),
            ShapeKind::Polygon => Release::KeepDrawing,
        }
    }

    /// Whether a new press extends the in-progress shape instead of
    /// starting another one
    pub fn accepts_more_presses(self) -> bool {
        self == ShapeKind::Polygon
    }
}

/// Overwrite the end point, or add one if the line only has its start
fn line_to(points: &[Point], end: Point) -> Vec<Point> {
    match points {
        [] => vec![end],
        [start, ..] => vec![*start, end],
    }
}

fn appended(points: &[Point], p: Point) -> Vec<Point> {
    let mut out = Vec::with_capacity(points.len() + 1);
    out.extend_from_slice(points);
    out.push(p);
    out
}
