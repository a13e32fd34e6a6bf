// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Runtime editor configuration.
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! plot_width = "40"
//! grid_visible = false
//!
//! [style]
//! stroke_color = "#334155"
//! layer = "walls"
//! ```

use crate::data::export::ExportFormat;
use crate::model::ShapeStyle;
use crate::settings;
use crate::theme;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial content of the plot width field (feet)
    pub plot_width: String,
    /// Initial content of the plot height field (feet)
    pub plot_height: String,
    /// Style given to newly drawn shapes
    pub style: ShapeStyle,
    pub grid_visible: bool,
    pub snap_enabled: bool,
    pub lock_aspect_ratio: bool,
    pub export_format: ExportFormat,
    pub export_dpi: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            plot_width: settings::plot::DEFAULT_WIDTH.to_string(),
            plot_height: settings::plot::DEFAULT_HEIGHT.to_string(),
            style: ShapeStyle::default(),
            grid_visible: true,
            snap_enabled: true,
            lock_aspect_ratio: true,
            export_format: ExportFormat::Png,
            export_dpi: "300".to_string(),
        }
    }
}

impl EditorConfig {
    /// Load a config file; an empty file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(content)?;
        Ok(Self {
            style: config.style.with_stroke_width_or(theme::shape::STROKE_MM),
            ..config
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(EditorConfig::from_toml("").unwrap(), EditorConfig::default());
        assert_eq!(EditorConfig::from_toml("  \n").unwrap(), EditorConfig::default());
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = EditorConfig::from_toml(
            r##"
plot_width = "40"
grid_visible = false
export_format = "pdf"

[style]
stroke_color = "#334155"
"##,
        )
        .unwrap();
        assert_eq!(config.plot_width, "40");
        assert_eq!(config.plot_height, "90");
        assert!(!config.grid_visible);
        assert!(config.snap_enabled);
        assert_eq!(config.export_format, ExportFormat::Pdf);
        assert_eq!(config.style.stroke_color, "#334155");
        assert_eq!(config.style.stroke_width_mm, 0.25);
        assert_eq!(config.style.layer, "default");
    }

    #[test]
    fn invalid_stroke_width_falls_back_to_theme() {
        for width in ["0.0", "-3.5", "nan", "inf"] {
            let config = EditorConfig::from_toml(&format!(
                "[style]\nstroke_width_mm = {width}\nlayer = \"walls\"\n"
            ))
            .unwrap();
            assert_eq!(config.style.stroke_width_mm, 0.25, "{width}");
            assert_eq!(config.style.layer, "walls");
        }

        let config = EditorConfig::from_toml("[style]\nstroke_width_mm = 0.75\n").unwrap();
        assert_eq!(config.style.stroke_width_mm, 0.75);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(EditorConfig::from_toml("plot_width = [").is_err());
        assert!(EditorConfig::from_toml("grid_visible = \"yes\"").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "export_dpi = \"600\"").unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert_eq!(config.export_dpi, "600");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(EditorConfig::load(&dir.path().join("nope.toml")).is_err());
    }
}
