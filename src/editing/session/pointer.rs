// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Pointer event handling: the drawing state machine.
//!
//! Every handler takes the current [`Gesture`] out of the session, computes
//! the next one, and stores it back, so the in-progress shape is replaced
//! wholesale on each transition and never aliases the committed plan.

use super::EditorSession;
use crate::editing::mouse::{MouseButton, PointerEvent};
use crate::editing::viewport;
use crate::model::Shape;
use crate::tools::shapes::Release;
use crate::tools::{Gesture, ToolId};
use kurbo::Point;

impl EditorSession {
    // ============================================================================
    // POINTER EVENT HANDLERS
    // ============================================================================

    pub fn pointer_down(&mut self, event: &PointerEvent) {
        let world = self.event_to_world(event);
        tracing::debug!(
            "Pointer down at {:?} (world {:?}), tool {}",
            event.client_pos(),
            world,
            self.tool
        );
        self.press(world, event.button());
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let world = self.event_to_world(event);
        self.drag(world);
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        let world = self.event_to_world(event);
        self.release(world);
    }

    pub fn pointer_leave(&mut self, _event: &PointerEvent) {
        self.leave();
    }

    /// World position of `event` under the current viewbox
    pub fn event_to_world(&self, event: &PointerEvent) -> Point {
        viewport::event_to_world(event, &self.viewbox())
    }

    // ============================================================================
    // TRANSITIONS (world space)
    // ============================================================================

    pub(crate) fn press(&mut self, world: Point, button: MouseButton) {
        if self.tool == ToolId::Pan {
            // Any button may grab the view
            self.gesture = Gesture::Panning { anchor: world };
            tracing::debug!("Pan started at {:?}", world);
            return;
        }
        let Some(kind) = self.tool.shape_kind() else {
            // Select tool: selection changes on release
            return;
        };
        if !button.is_primary() {
            tracing::debug!("Ignoring {:?} press for {} tool", button, self.tool);
            return;
        }

        self.gesture = match std::mem::take(&mut self.gesture) {
            Gesture::Drawing {
                kind: current,
                start,
                shape,
            } if current == kind && kind.accepts_more_presses() => {
                let points = kind.pressed_again(shape.points(), world);
                tracing::debug!("Added vertex {} to {}", points.len(), shape.id());
                Gesture::Drawing {
                    kind,
                    start,
                    shape: shape.with_points(points),
                }
            }
            _ => {
                let shape = Shape::new(
                    self.ids.next_id(),
                    kind,
                    kind.seed_points(world),
                    self.defaults.clone(),
                );
                tracing::debug!("Started {} {} at {:?}", kind.name(), shape.id(), world);
                Gesture::Drawing {
                    kind,
                    start: world,
                    shape,
                }
            }
        };
    }

    pub(crate) fn drag(&mut self, world: Point) {
        self.gesture = match std::mem::take(&mut self.gesture) {
            Gesture::Idle => Gesture::Idle,
            Gesture::Panning { anchor } => {
                // Measured against the press point every time; the anchor
                // is not advanced.
                self.viewport.pan(anchor - world);
                Gesture::Panning { anchor }
            }
            Gesture::Drawing { kind, start, shape } => {
                let points = kind.dragged_points(shape.points(), start, world);
                Gesture::Drawing {
                    kind,
                    start,
                    shape: shape.with_points(points),
                }
            }
        };
    }

    pub(crate) fn release(&mut self, world: Point) {
        self.gesture = match std::mem::take(&mut self.gesture) {
            Gesture::Idle => {
                if self.tool == ToolId::Select && !self.selection.is_empty() {
                    tracing::debug!("Click on empty canvas clears selection");
                    self.selection.clear();
                }
                Gesture::Idle
            }
            Gesture::Panning { .. } => {
                tracing::debug!("Pan ended at offset {:?}", self.viewport.offset());
                Gesture::Idle
            }
            Gesture::Drawing { kind, start, shape } => {
                match kind.released(shape.points(), start, world) {
                    Release::Commit(points) => {
                        self.commit(shape.with_points(points));
                        Gesture::Idle
                    }
                    Release::Discard => {
                        tracing::debug!("Discarded degenerate {} {}", kind.name(), shape.id());
                        Gesture::Idle
                    }
                    Release::KeepDrawing => Gesture::Drawing { kind, start, shape },
                }
            }
        };
    }

    /// The pointer left the drawing surface
    pub(crate) fn leave(&mut self) {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing { shape, .. } => {
                tracing::debug!(
                    "Pointer left canvas, abandoning {} {}",
                    shape.kind().name(),
                    shape.id()
                );
            }
            Gesture::Panning { .. } => {
                tracing::debug!("Pointer left canvas, pan ended");
            }
            Gesture::Idle => {}
        }
    }

    fn commit(&mut self, shape: Shape) {
        let id = shape.id().clone();
        let kind = shape.kind();
        match self.plan.append(shape) {
            Ok(()) => tracing::info!("Committed {} {}", kind.name(), id),
            Err(err) => tracing::warn!("Could not commit {}: {}", id, err),
        }
    }
}
