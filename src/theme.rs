// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and stroke constants
//!
//! Colors are CSS color strings, handed to the renderer untouched.

// ============================================================================
// BASE COLORS
// ============================================================================
const INK: &str = "#1a1a1a";
const GRAY_400: &str = "#9ca3af";
const TRANSPARENT: &str = "transparent";

// ============================================================================
// DRAWN SHAPES -- defaults for shapes created with the drawing tools
// ============================================================================
const SHAPE_STROKE_COLOR: &str = INK;
const SHAPE_FILL_COLOR: &str = TRANSPARENT;
const SHAPE_STROKE_MM: f64 = 0.25;
const SHAPE_LAYER: &str = "default";

// ============================================================================
// PLOT BOUNDARY
// ============================================================================
const PLOT_STROKE_COLOR: &str = GRAY_400;
const PLOT_FILL_COLOR: &str = TRANSPARENT;
const PLOT_STROKE_MM: f64 = 0.5;
const PLOT_LAYER: &str = "plot";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Style applied to newly drawn shapes
pub mod shape {
    pub const STROKE_COLOR: &str = super::SHAPE_STROKE_COLOR;
    pub const FILL_COLOR: &str = super::SHAPE_FILL_COLOR;
    pub const STROKE_MM: f64 = super::SHAPE_STROKE_MM;
    pub const LAYER: &str = super::SHAPE_LAYER;
}

/// Style of the plot boundary rectangle
pub mod plot {
    pub const STROKE_COLOR: &str = super::PLOT_STROKE_COLOR;
    pub const FILL_COLOR: &str = super::PLOT_FILL_COLOR;
    pub const STROKE_MM: f64 = super::PLOT_STROKE_MM;
    pub const LAYER: &str = super::PLOT_LAYER;
}
