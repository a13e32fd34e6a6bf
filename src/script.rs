// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Scripted sessions.
//!
//! A script is a JSON array of commands, each naming one editor entry
//! point in its `op` field:
//!
//! ```json
//! [
//!   { "op": "create_preset_plot", "width": "50", "height": "90" },
//!   { "op": "next_step" },
//!   { "op": "set_tool", "tool": "rectangle" },
//!   { "op": "pointer_down", "event": { "button": 0, "clientX": 40, "clientY": 40,
//!     "boundingClientRect": { "left": 0, "top": 0, "width": 600, "height": 600 } } }
//! ]
//! ```
//!
//! After the commands run, a [`StateSnapshot`] captures everything the
//! presentation layer would render.

use crate::data::AppState;
use crate::data::export::ExportFormat;
use crate::editing::PointerEvent;
use crate::model::{Shape, ShapeId, ShapeStyle};
use crate::notice::Notice;
use crate::tools::Cursor;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    SetTool { tool: String },
    ToggleGrid,
    ToggleSnap,
    ToggleLockAspectRatio,

    PointerDown { event: PointerEvent },
    PointerMove { event: PointerEvent },
    PointerUp { event: PointerEvent },
    PointerLeave { event: PointerEvent },
    ZoomIn,
    ZoomOut,

    Select { id: String },
    ClearSelection,
    SetStrokeWidth { width_mm: f64 },
    SetStrokeColor { color: String },
    SetFillColor { color: String },
    SetLayer { layer: String },
    SetLabelVisible { visible: bool },
    SetDefaultStyle { style: ShapeStyle },

    SetPlotWidth { text: String },
    SetPlotHeight { text: String },
    CreatePresetPlot { width: String, height: String },
    Reset,

    NextStep,
    PrevStep,
    GoToStep { step: u8 },

    SetExportFormat { format: ExportFormat },
    SetExportDpi { dpi: String },
    ExportDrawing,
    SaveProjectLocal,
    ExportProjectFile,
}

impl Command {
    pub fn apply(&self, app: &mut AppState) {
        tracing::debug!("Applying {:?}", self);
        match self {
            Command::SetTool { tool } => app.session.set_active_tool(tool),
            Command::ToggleGrid => app.session.toggle_grid(),
            Command::ToggleSnap => app.session.toggle_snap(),
            Command::ToggleLockAspectRatio => app.session.toggle_lock_aspect_ratio(),

            Command::PointerDown { event } => app.session.pointer_down(event),
            Command::PointerMove { event } => app.session.pointer_move(event),
            Command::PointerUp { event } => app.session.pointer_up(event),
            Command::PointerLeave { event } => app.session.pointer_leave(event),
            Command::ZoomIn => app.session.zoom_in(),
            Command::ZoomOut => app.session.zoom_out(),

            Command::Select { id } => app.session.select(id),
            Command::ClearSelection => app.session.clear_selection(),
            Command::SetStrokeWidth { width_mm } => app.session.set_stroke_width(*width_mm),
            Command::SetStrokeColor { color } => app.session.set_stroke_color(color),
            Command::SetFillColor { color } => app.session.set_fill_color(color),
            Command::SetLayer { layer } => app.session.set_layer(layer),
            Command::SetLabelVisible { visible } => app.session.set_label_visible(*visible),
            Command::SetDefaultStyle { style } => app.session.set_default_style(style.clone()),

            Command::SetPlotWidth { text } => app.session.set_plot_width_text(text),
            Command::SetPlotHeight { text } => app.session.set_plot_height_text(text),
            Command::CreatePresetPlot { width, height } => {
                app.create_preset_plot(width, height);
            }
            Command::Reset => {
                app.reset();
            }

            Command::NextStep => app.next_step(),
            Command::PrevStep => app.prev_step(),
            Command::GoToStep { step } => app.go_to_step(*step),

            Command::SetExportFormat { format } => app.set_export_format(*format),
            Command::SetExportDpi { dpi } => app.set_export_dpi(dpi),
            Command::ExportDrawing => {
                app.export_drawing();
            }
            Command::SaveProjectLocal => {
                app.save_project_local();
            }
            Command::ExportProjectFile => {
                app.export_project_file();
            }
        }
    }
}

pub fn parse_script(content: &str) -> anyhow::Result<Vec<Command>> {
    serde_json::from_str(content).context("Script must be a JSON array of commands")
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<Command>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("Invalid script {}", path.display()))
}

/// Apply every command in order
pub fn run_script(app: &mut AppState, commands: &[Command]) {
    for command in commands {
        command.apply(app);
    }
    tracing::info!(
        "Ran {} commands, {} shapes committed",
        commands.len(),
        app.session.shapes().len()
    );
}

/// Everything the presentation layer renders from the state
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub step: u8,
    pub step_title: &'static str,
    pub can_proceed: bool,
    pub can_export: bool,
    pub tool: &'static str,
    pub cursor: Cursor,
    pub viewbox: String,
    pub grid_visible: bool,
    pub snap_enabled: bool,
    pub lock_aspect_ratio: bool,
    pub selected: Option<ShapeId>,
    pub shapes: Vec<Shape>,
    pub drawing: Option<Shape>,
    pub point_strings: BTreeMap<ShapeId, String>,
    pub notices: Vec<Notice>,
}

impl StateSnapshot {
    pub fn capture(app: &AppState) -> Self {
        let session = &app.session;
        let step = app.current_step();
        Self {
            step: step.id,
            step_title: step.title,
            can_proceed: app.can_proceed(),
            can_export: app.can_export(),
            tool: session.tool().name(),
            cursor: session.cursor(),
            viewbox: session.viewbox_string(),
            grid_visible: session.is_grid_visible(),
            snap_enabled: session.is_snap_enabled(),
            lock_aspect_ratio: session.is_aspect_ratio_locked(),
            selected: session.selection().id().cloned(),
            shapes: session.shapes().to_vec(),
            drawing: session.drawing_shape().cloned(),
            point_strings: session.point_strings(),
            notices: app.notices().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ShapeKind;
    use std::io::Write;

    const WALKTHROUGH: &str = r#"[
        { "op": "create_preset_plot", "width": "50", "height": "90" },
        { "op": "next_step" },
        { "op": "set_tool", "tool": "rectangle" },
        { "op": "pointer_down", "event": { "button": 0, "clientX": 100, "clientY": 100,
            "boundingClientRect": { "left": 0, "top": 0, "width": 600, "height": 600 } } },
        { "op": "pointer_move", "event": { "clientX": 300, "clientY": 250,
            "boundingClientRect": { "left": 0, "top": 0, "width": 600, "height": 600 } } },
        { "op": "pointer_up", "event": { "clientX": 300, "clientY": 250,
            "boundingClientRect": { "left": 0, "top": 0, "width": 600, "height": 600 } } },
        { "op": "next_step" },
        { "op": "next_step" },
        { "op": "set_export_format", "format": "pdf" },
        { "op": "set_export_dpi", "dpi": "150" },
        { "op": "export_drawing" }
    ]"#;

    #[test]
    fn walkthrough_reaches_export() {
        let commands = parse_script(WALKTHROUGH).unwrap();
        let mut app = AppState::new();
        run_script(&mut app, &commands);

        let snapshot = StateSnapshot::capture(&app);
        assert_eq!(snapshot.step, 4);
        assert_eq!(snapshot.step_title, "Export/Save");
        assert_eq!(snapshot.shapes.len(), 2);
        assert_eq!(snapshot.shapes[1].kind(), ShapeKind::Rectangle);
        assert_eq!(snapshot.tool, "rectangle");
        assert_eq!(snapshot.cursor, Cursor::Crosshair);
        assert_eq!(
            snapshot.notices.last().unwrap(),
            &Notice::success("Exporting as PDF at 150 DPI...")
        );
    }

    #[test]
    fn snapshot_serializes_shape_fields() {
        let mut app = AppState::new();
        app.create_preset_plot("20", "30");
        let json = serde_json::to_value(StateSnapshot::capture(&app)).unwrap();

        assert_eq!(json["viewbox"], "-2 -3 24 36");
        assert_eq!(json["selected"], "plot_boundary");
        let plot = &json["shapes"][0];
        assert_eq!(plot["type"], "rectangle");
        assert_eq!(plot["layer"], "plot");
        assert_eq!(plot["is_closed"], true);
        assert_eq!(json["point_strings"]["plot_boundary"], "0,0 20,0 20,30 0,30");
    }

    #[test]
    fn default_style_op_cannot_zero_the_stroke() {
        let commands = parse_script(
            r#"[
            { "op": "set_default_style", "style": { "stroke_width_mm": 0.0, "layer": "walls" } },
            { "op": "set_tool", "tool": "line" },
            { "op": "pointer_down", "event": { "clientX": 10, "clientY": 10,
                "boundingClientRect": { "left": 0, "top": 0, "width": 100, "height": 100 } } },
            { "op": "pointer_up", "event": { "clientX": 50, "clientY": 60,
                "boundingClientRect": { "left": 0, "top": 0, "width": 100, "height": 100 } } }
        ]"#,
        )
        .unwrap();
        let mut app = AppState::new();
        run_script(&mut app, &commands);

        let line = &app.session.shapes()[0];
        assert_eq!(line.style.layer, "walls");
        assert_eq!(line.style.stroke_width_mm, 0.25);
    }

    #[test]
    fn unknown_op_is_rejected() {
        assert!(parse_script(r#"[{ "op": "explode" }]"#).is_err());
        assert!(parse_script(r#"{ "op": "reset" }"#).is_err());
    }

    #[test]
    fn load_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{ "op": "toggle_grid" }}, {{ "op": "zoom_in" }}]"#).unwrap();
        let commands = load_script(file.path()).unwrap();
        assert_eq!(commands, [Command::ToggleGrid, Command::ZoomIn]);

        let mut app = AppState::new();
        run_script(&mut app, &commands);
        assert!(!app.session.is_grid_visible());
    }

    #[test]
    fn missing_script_has_context() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read script"));
    }
}
