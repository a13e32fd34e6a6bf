// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! The committed shape collection of a floorplan.
//!
//! `Plan` is the single owner of committed shapes and keeps them in draw
//! order. It guarantees unique ids and at most one plot boundary, which is
//! always a rectangle. The wizard reads its predicates to gate steps.

use super::{Shape, ShapeId, ShapeKind, ShapeStyle};
use crate::error::PlanError;
use crate::settings;
use kurbo::Point;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    shapes: Vec<Shape>,
}

impl Plan {
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Committed shapes in draw order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Commit a shape at the top of the draw order
    pub fn append(&mut self, shape: Shape) -> Result<(), PlanError> {
        if self.find_by_id(shape.id().as_str()).is_some() {
            return Err(PlanError::DuplicateId(shape.id().to_string()));
        }
        if shape.id().is_plot_boundary() && shape.kind() != ShapeKind::Rectangle {
            return Err(PlanError::ReservedId(shape.id().to_string()));
        }
        tracing::debug!("Plan: committed {} {}", shape.kind().name(), shape.id());
        self.shapes.push(shape);
        Ok(())
    }

    /// Start over with a single plot boundary of `width` x `height` feet.
    ///
    /// The whole collection is replaced, so the plan holds exactly one shape
    /// afterwards. Nothing changes if the size fails [`Plan::check_plot_size`].
    pub fn replace_plot_boundary(&mut self, width: f64, height: f64) -> Result<&Shape, PlanError> {
        Self::check_plot_size(width, height)?;
        let plot = Shape::rectangle(
            ShapeId::plot_boundary(),
            Point::ZERO,
            Point::new(width, height),
            ShapeStyle::plot(),
        );
        self.shapes.clear();
        self.shapes.push(plot);
        Ok(&self.shapes[0])
    }

    /// Both dimensions must be positive, and the area and padded viewbox
    /// must stay finite.
    pub fn check_plot_size(width: f64, height: f64) -> Result<(), PlanError> {
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(PlanError::NonPositive { width, height });
        }
        let span = 1.0 + 2.0 * settings::viewport::PADDING;
        if !(width * height).is_finite() || !(width * span).is_finite() || !(height * span).is_finite() {
            return Err(PlanError::TooLarge { width, height });
        }
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn plot_boundary(&self) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id().is_plot_boundary())
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    // ===== Wizard predicates =====

    /// A plot boundary exists and encloses more than the minimum area
    pub fn has_valid_plot(&self) -> bool {
        self.plot_boundary()
            .is_some_and(|plot| plot.area() > settings::plot::MIN_AREA)
    }

    /// Any committed rectangle other than the plot boundary
    pub fn has_non_boundary_rectangle(&self) -> bool {
        self.shapes
            .iter()
            .any(|s| s.kind() == ShapeKind::Rectangle && !s.id().is_plot_boundary())
    }

    pub fn has_any_shape(&self) -> bool {
        !self.shapes.is_empty()
    }
}
