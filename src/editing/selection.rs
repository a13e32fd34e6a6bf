// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-shape selection.
//!
//! The editor selects at most one committed shape at a time. `Selection`
//! only stores the id; the session is responsible for checking that the id
//! resolves to a committed shape before storing it.

use crate::model::ShapeId;

/// The currently selected shape, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    inner: Option<ShapeId>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self { inner: None }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    pub fn id(&self) -> Option<&ShapeId> {
        self.inner.as_ref()
    }

    pub fn contains(&self, id: &ShapeId) -> bool {
        self.inner.as_ref() == Some(id)
    }

    /// Select `id`, replacing any previous selection
    pub fn set(&mut self, id: ShapeId) {
        self.inner = Some(id);
    }

    pub fn clear(&mut self) {
        self.inner = None;
    }
}
