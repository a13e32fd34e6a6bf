// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for plan editing

pub mod shapes;

use crate::model::{Shape, ShapeKind};
use kurbo::Point;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToolId {
    /// Click empty canvas to deselect
    #[default]
    Select,
    /// Grab and drag the view
    Pan,
    /// Two-point segment
    Line,
    /// Multi-click polygon
    Polygon,
    /// Drag out an axis-aligned rectangle
    Rectangle,
    /// Sample the pointer into an open stroke
    Freehand,
}

impl ToolId {
    pub const ALL: [ToolId; 6] = [
        ToolId::Select,
        ToolId::Pan,
        ToolId::Line,
        ToolId::Polygon,
        ToolId::Rectangle,
        ToolId::Freehand,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ToolId::Select => "select",
            ToolId::Pan => "pan",
            ToolId::Line => "line",
            ToolId::Polygon => "polygon",
            ToolId::Rectangle => "rectangle",
            ToolId::Freehand => "freehand",
        }
    }

    /// The kind of shape this tool draws, if it is a drawing tool
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            ToolId::Select | ToolId::Pan => None,
            ToolId::Line => Some(ShapeKind::Line),
            ToolId::Polygon => Some(ShapeKind::Polygon),
            ToolId::Rectangle => Some(ShapeKind::Rectangle),
            ToolId::Freehand => Some(ShapeKind::Freehand),
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown tool {0:?}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolId {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolId::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

// ===== Cursor =====

/// Cursor hint for the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Crosshair,
    Grab,
    Grabbing,
}

// ===== Gesture State =====

/// State of the pointer gesture in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    /// No button held, nothing under construction
    #[default]
    Idle,
    /// Dragging the view; `anchor` is the world point of the pointer-down
    Panning { anchor: Point },
    /// Building a shape; `start` is the world point of the first press
    Drawing {
        kind: ShapeKind,
        start: Point,
        shape: Shape,
    },
}

impl Gesture {
    pub fn is_panning(&self) -> bool {
        matches!(self, Gesture::Panning { .. })
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Gesture::Drawing { .. })
    }

    /// The in-progress shape, if any
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            Gesture::Drawing { shape, .. } => Some(shape),
            Gesture::Idle | Gesture::Panning { .. } => None,
        }
    }
}
