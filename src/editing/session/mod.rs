// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Edit session - manages editing state for a single floorplan

mod pointer;
mod properties;

use super::selection::Selection;
use super::viewport::{self, ViewTransform, Viewbox};
use crate::config::EditorConfig;
use crate::model::{Plan, Shape, ShapeId, ShapeIdGenerator, ShapeStyle};
use crate::notice::Notice;
use crate::theme;
use crate::tools::{Cursor, Gesture, ToolId};
use std::collections::BTreeMap;

/// Editing session for one floorplan
///
/// This is the aggregate root of the editor core: it owns the committed
/// shapes, the shape under construction, the selection, the active tool,
/// and the viewport. All mutation goes through its methods; the
/// presentation layer only reads the derived views.
#[derive(Debug, Clone)]
pub struct EditorSession {
    /// Committed shapes in draw order
    plan: Plan,

    /// Pointer gesture in progress, including any in-progress shape
    gesture: Gesture,

    /// Currently selected shape (always a committed one)
    selection: Selection,

    /// Current editing tool
    tool: ToolId,

    /// Pan and zoom
    viewport: ViewTransform,

    /// Style copied into every newly drawn shape
    defaults: ShapeStyle,

    /// Plot dimension fields as typed by the user; the viewbox is derived
    /// from these
    plot_width_text: String,
    plot_height_text: String,

    // Display flags. Not wired to any geometry.
    grid_visible: bool,
    snap_enabled: bool,
    lock_aspect_ratio: bool,

    ids: ShapeIdGenerator,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            plan: Plan::new(),
            gesture: Gesture::Idle,
            selection: Selection::new(),
            tool: ToolId::default(),
            viewport: ViewTransform::IDENTITY,
            defaults: config.style.clone().with_stroke_width_or(theme::shape::STROKE_MM),
            plot_width_text: config.plot_width.clone(),
            plot_height_text: config.plot_height.clone(),
            grid_visible: config.grid_visible,
            snap_enabled: config.snap_enabled,
            lock_aspect_ratio: config.lock_aspect_ratio,
            ids: ShapeIdGenerator::new(),
        }
    }

    /// Clear the canvas: no shapes, no selection, identity viewport.
    ///
    /// Any gesture in progress is abandoned. Tool, style defaults, and
    /// the plot dimension fields are kept.
    pub fn reset(&mut self) -> Notice {
        self.clear_canvas();
        tracing::info!("Canvas cleared");
        Notice::info("Canvas has been cleared.")
    }

    fn clear_canvas(&mut self) {
        self.plan.clear();
        self.gesture = Gesture::Idle;
        self.selection.clear();
        self.viewport.reset();
    }

    // ===== Tools and flags =====

    pub fn tool(&self) -> ToolId {
        self.tool
    }

    /// Switch tools by name. Unknown names are ignored.
    pub fn set_active_tool(&mut self, name: &str) {
        match name.parse::<ToolId>() {
            Ok(tool) => self.set_tool(tool),
            Err(err) => tracing::warn!("Ignoring tool change: {}", err),
        }
    }

    /// Switch tools, abandoning any gesture started with the previous one
    pub fn set_tool(&mut self, tool: ToolId) {
        if tool == self.tool {
            return;
        }
        if self.gesture != Gesture::Idle {
            tracing::debug!("Tool change from {} cancels the current gesture", self.tool);
            self.gesture = Gesture::Idle;
        }
        self.tool = tool;
        tracing::debug!("Active tool: {}", tool);
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    pub fn toggle_snap(&mut self) {
        self.snap_enabled = !self.snap_enabled;
    }

    pub fn toggle_lock_aspect_ratio(&mut self) {
        self.lock_aspect_ratio = !self.lock_aspect_ratio;
    }

    pub fn is_grid_visible(&self) -> bool {
        self.grid_visible
    }

    pub fn is_snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    pub fn is_aspect_ratio_locked(&self) -> bool {
        self.lock_aspect_ratio
    }

    // ===== Viewport =====

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn view_transform(&self) -> &ViewTransform {
        &self.viewport
    }

    /// The visible world rectangle
    pub fn viewbox(&self) -> Viewbox {
        viewport::viewbox_for_plot_text(&self.plot_width_text, &self.plot_height_text, &self.viewport)
    }

    /// The visible world rectangle as an SVG `viewBox` attribute
    pub fn viewbox_string(&self) -> String {
        self.viewbox().to_string()
    }

    pub fn plot_width_text(&self) -> &str {
        &self.plot_width_text
    }

    pub fn plot_height_text(&self) -> &str {
        &self.plot_height_text
    }

    /// Mirror the plot width input field
    pub fn set_plot_width_text(&mut self, text: &str) {
        self.plot_width_text = text.to_string();
    }

    /// Mirror the plot height input field
    pub fn set_plot_height_text(&mut self, text: &str) {
        self.plot_height_text = text.to_string();
    }

    // ===== Read-only views =====

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    /// Committed shapes in draw order
    pub fn shapes(&self) -> &[Shape] {
        self.plan.shapes()
    }

    /// The shape under construction, if any
    pub fn drawing_shape(&self) -> Option<&Shape> {
        self.gesture.shape()
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn is_panning(&self) -> bool {
        self.gesture.is_panning()
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_drawing()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        let id = self.selection.id()?;
        self.plan.find_by_id(id.as_str())
    }

    pub fn default_style(&self) -> &ShapeStyle {
        &self.defaults
    }

    /// Cursor hint for the drawing surface
    pub fn cursor(&self) -> Cursor {
        match self.tool {
            ToolId::Pan if self.is_panning() => Cursor::Grabbing,
            ToolId::Pan => Cursor::Grab,
            ToolId::Select => Cursor::Default,
            ToolId::Line | ToolId::Polygon | ToolId::Rectangle | ToolId::Freehand => {
                Cursor::Crosshair
            }
        }
    }

    /// SVG point strings keyed by shape id, including the in-progress shape
    pub fn point_strings(&self) -> BTreeMap<ShapeId, String> {
        self.plan
            .shapes()
            .iter()
            .chain(self.drawing_shape())
            .map(|shape| (shape.id().clone(), shape.point_string()))
            .collect()
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
