// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer events as delivered by the presentation layer.
//!
//! Field names follow the DOM (`clientX`, `boundingClientRect`, ...) so
//! events can be forwarded as JSON without translation.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Which button was pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Middle,
    Secondary,
    Other(i32),
}

impl MouseButton {
    /// Decode a DOM `MouseEvent.button` value
    pub fn from_dom(button: i32) -> Self {
        match button {
            0 => MouseButton::Primary,
            1 => MouseButton::Middle,
            2 => MouseButton::Secondary,
            other => MouseButton::Other(other),
        }
    }

    pub fn is_primary(self) -> bool {
        self == MouseButton::Primary
    }
}

/// Bounding box of the drawing surface in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A zero-sized box cannot map pointer positions
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

/// A pointer down/move/up/leave event
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    #[serde(default)]
    pub button: i32,
    pub client_x: f64,
    pub client_y: f64,
    pub bounding_client_rect: ClientRect,
}

impl PointerEvent {
    pub fn new(button: i32, client_x: f64, client_y: f64, bounds: ClientRect) -> Self {
        Self {
            button,
            client_x,
            client_y,
            bounding_client_rect: bounds,
        }
    }

    pub fn button(&self) -> MouseButton {
        MouseButton::from_dom(self.button)
    }

    /// Pointer position in device pixels
    pub fn client_pos(&self) -> Point {
        Point::new(self.client_x, self.client_y)
    }
}
