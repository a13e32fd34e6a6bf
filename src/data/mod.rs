// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) behind the planner UI.
//!
//! `AppState` owns the edit session, the wizard position, the export panel
//! selections, and the log of notices shown to the user. Sub-modules split
//! the methods by domain: wizard navigation and export/save actions.

pub mod export;
pub mod wizard;

use crate::config::EditorConfig;
use crate::editing::EditorSession;
use crate::notice::Notice;
use export::ExportSettings;
use wizard::Wizard;

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Drawing, selection, tools, and viewport
    pub session: EditorSession,

    /// Step of the guided workflow
    pub wizard: Wizard,

    /// Export panel selections
    pub export: ExportSettings,

    /// Notices emitted so far, oldest first
    notices: Vec<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            session: EditorSession::with_config(config),
            wizard: Wizard::new(),
            export: ExportSettings {
                format: config.export_format,
                dpi: config.export_dpi.clone(),
            },
            notices: Vec::new(),
        }
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.last()
    }

    fn notify(&mut self, notice: Notice) -> Notice {
        self.notices.push(notice.clone());
        notice
    }

    /// Create the plot boundary from the typed dimensions
    pub fn create_preset_plot(&mut self, width_text: &str, height_text: &str) -> Notice {
        let notice = self.session.create_preset_plot(width_text, height_text);
        self.notify(notice)
    }

    /// Clear the canvas. The wizard stays on its current step.
    pub fn reset(&mut self) -> Notice {
        let notice = self.session.reset();
        self.notify(notice)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
