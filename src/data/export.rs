// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Export and save actions for AppState.
//!
//! No file format is produced yet; each action only reports what it would
//! do.

use super::AppState;
use crate::error::PlanError;
use crate::notice::Notice;
use serde::{Deserialize, Serialize};
use std::fmt;

/// DPI values offered by the export panel
pub const EXPORT_DPI_OPTIONS: [u32; 4] = [96, 150, 300, 600];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Pdf,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Png => f.write_str("PNG"),
            ExportFormat::Pdf => f.write_str("PDF"),
        }
    }
}

/// Export panel selections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    pub format: ExportFormat,
    /// DPI as selected in the panel; parsed when exporting
    pub dpi: String,
}

impl ExportSettings {
    pub fn dpi(&self) -> Result<u32, PlanError> {
        self.dpi
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|dpi| *dpi > 0)
            .ok_or_else(|| PlanError::InvalidDpi(self.dpi.clone()))
    }
}

impl AppState {
    pub fn set_export_format(&mut self, format: ExportFormat) {
        self.export.format = format;
    }

    pub fn set_export_dpi(&mut self, dpi: &str) {
        self.export.dpi = dpi.to_string();
    }

    /// Export the drawing as PNG or PDF at the selected DPI
    pub fn export_drawing(&mut self) -> Notice {
        let notice = match self.export.dpi() {
            Ok(dpi) => {
                tracing::info!("Export requested: {} at {} DPI", self.export.format, dpi);
                Notice::success(format!(
                    "Exporting as {} at {} DPI...",
                    self.export.format, dpi
                ))
            }
            Err(err) => {
                tracing::warn!("Export refused: {}", err);
                Notice::from(&err)
            }
        };
        self.notify(notice)
    }

    /// Save the project to browser storage
    pub fn save_project_local(&mut self) -> Notice {
        tracing::info!("Local save requested ({} shapes)", self.session.shapes().len());
        self.notify(Notice::info("Project auto-saved to browser."))
    }

    /// Export the project as a JSON file
    pub fn export_project_file(&mut self) -> Notice {
        tracing::info!("Project export requested ({} shapes)", self.session.shapes().len());
        self.notify(Notice::success("Project JSON exported."))
    }
}
