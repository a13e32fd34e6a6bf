// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod mouse;
pub mod selection;
pub mod session;
pub mod viewport;

pub use mouse::{ClientRect, MouseButton, PointerEvent};
pub use selection::Selection;
pub use session::EditorSession;
pub use viewport::{ViewTransform, Viewbox};
