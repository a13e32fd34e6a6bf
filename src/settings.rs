// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Editor settings and configuration constants.
//!
//! This module holds non-visual settings that stay stable across theme
//! changes. Visual styling (colors, default stroke) belongs in `theme.rs`.

// ============================================================================
// VIEWPORT SETTINGS
// ============================================================================
/// Minimum zoom level (10% of original size)
const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level (10x original size)
const MAX_ZOOM: f64 = 10.0;

/// Scale multiplier applied by one zoom-in step
const ZOOM_IN_FACTOR: f64 = 1.2;

/// Scale multiplier applied by one zoom-out step
const ZOOM_OUT_FACTOR: f64 = 0.8;

/// Margin around the plot, as a fraction of each plot dimension
const VIEWBOX_PADDING: f64 = 0.1;

// ============================================================================
// PLOT SETTINGS
// ============================================================================
/// Reserved shape id of the outer plot boundary
const PLOT_BOUNDARY_ID: &str = "plot_boundary";

/// A plot must be strictly larger than this (square feet) to be usable
const PLOT_MIN_AREA: f64 = 10.0;

/// Plot width offered before the user types anything (feet)
const PLOT_DEFAULT_WIDTH: &str = "50";

/// Plot height offered before the user types anything (feet)
const PLOT_DEFAULT_HEIGHT: &str = "90";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Viewport settings (zoom, padding)
pub mod viewport {
    /// Minimum zoom level
    pub const MIN_ZOOM: f64 = super::MIN_ZOOM;

    /// Maximum zoom level
    pub const MAX_ZOOM: f64 = super::MAX_ZOOM;

    /// Zoom-in multiplier
    pub const ZOOM_IN_FACTOR: f64 = super::ZOOM_IN_FACTOR;

    /// Zoom-out multiplier
    pub const ZOOM_OUT_FACTOR: f64 = super::ZOOM_OUT_FACTOR;

    /// Viewbox margin per axis, as a fraction of the plot dimension
    pub const PADDING: f64 = super::VIEWBOX_PADDING;
}

/// Plot boundary settings
pub mod plot {
    /// Reserved id of the plot boundary shape
    pub const BOUNDARY_ID: &str = super::PLOT_BOUNDARY_ID;

    /// Minimum area (exclusive) for a plot to count as valid
    pub const MIN_AREA: f64 = super::PLOT_MIN_AREA;

    pub const DEFAULT_WIDTH: &str = super::PLOT_DEFAULT_WIDTH;
    pub const DEFAULT_HEIGHT: &str = super::PLOT_DEFAULT_HEIGHT;
}
