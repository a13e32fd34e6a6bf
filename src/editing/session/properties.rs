// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection, shape properties, and plot creation

use super::EditorSession;
use crate::error::{PlanError, parse_dimension};
use crate::model::{Plan, ShapeStyle};
use crate::notice::Notice;

impl EditorSession {
    // ===== Selection =====

    /// Select a committed shape. Ids that do not resolve are ignored.
    pub fn select(&mut self, id: &str) {
        match self.plan.find_by_id(id) {
            Some(shape) => self.selection.set(shape.id().clone()),
            None => tracing::debug!("Ignoring selection of unknown shape {:?}", id),
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ===== Properties of the selected shape =====

    /// Set the stroke width (mm) of the selected shape. Widths that are not
    /// positive and finite are rejected.
    pub fn set_stroke_width(&mut self, width_mm: f64) {
        if !ShapeStyle::is_valid_stroke_width(width_mm) {
            tracing::warn!("Ignoring stroke width {}", width_mm);
            return;
        }
        self.edit_selected_style(|style| style.stroke_width_mm = width_mm);
    }

    pub fn set_stroke_color(&mut self, color: &str) {
        self.edit_selected_style(|style| style.stroke_color = color.to_string());
    }

    pub fn set_fill_color(&mut self, color: &str) {
        self.edit_selected_style(|style| style.fill_color = color.to_string());
    }

    /// Move the selected shape to `layer`. Other shapes on either layer are
    /// not affected.
    pub fn set_layer(&mut self, layer: &str) {
        self.edit_selected_style(|style| style.layer = layer.to_string());
    }

    pub fn set_label_visible(&mut self, visible: bool) {
        self.edit_selected_style(|style| style.label_visible = visible);
    }

    fn edit_selected_style(&mut self, edit: impl FnOnce(&mut ShapeStyle)) {
        let Some(id) = self.selection.id() else {
            return;
        };
        if let Some(shape) = self.plan.find_by_id_mut(id.as_str()) {
            edit(&mut shape.style);
        }
    }

    // ===== Defaults for new shapes =====

    /// Style for shapes drawn from now on. Existing and in-progress shapes
    /// keep the style they were created with. An invalid stroke width is
    /// ignored and the current default width kept.
    pub fn set_default_style(&mut self, style: ShapeStyle) {
        self.defaults = style.with_stroke_width_or(self.defaults.stroke_width_mm);
    }

    // ===== Plot =====

    /// Replace the canvas with a single plot boundary of the typed size.
    ///
    /// On success the canvas is cleared first and the new plot is
    /// selected. Invalid input leaves the shapes untouched and returns an
    /// error notice.
    pub fn create_preset_plot(&mut self, width_text: &str, height_text: &str) -> Notice {
        self.set_plot_width_text(width_text);
        self.set_plot_height_text(height_text);
        match self.try_create_plot(width_text, height_text) {
            Ok(notice) => notice,
            Err(err) => {
                tracing::warn!("Plot not created: {}", err);
                Notice::from(&err)
            }
        }
    }

    fn try_create_plot(&mut self, width_text: &str, height_text: &str) -> Result<Notice, PlanError> {
        let width = parse_dimension(width_text)?;
        let height = parse_dimension(height_text)?;
        Plan::check_plot_size(width, height)?;

        self.clear_canvas();
        let plot_id = self.plan.replace_plot_boundary(width, height)?.id().clone();
        self.selection.set(plot_id);

        tracing::info!("Created {}x{} ft plot", width, height);
        Ok(Notice::success(format!("Created {width:.1}x{height:.1} ft plot.")))
    }
}
