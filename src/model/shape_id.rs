// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Stable string identifiers for shapes.
//!
//! Drawn shapes get ids of the form `shape-<epoch-ms>-<seq>`, where the
//! epoch is taken once when the generator is created and `seq` increases
//! monotonically. Each editing session owns its own generator, so ids are
//! never reused within a session. The id `plot_boundary` is reserved for
//! the outer plot and can never come out of the generator.

use crate::settings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The identifier of a shape
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// The reserved id of the plot boundary rectangle
    pub fn plot_boundary() -> Self {
        Self(settings::plot::BOUNDARY_ID.to_string())
    }

    pub fn is_plot_boundary(&self) -> bool {
        self.0 == settings::plot::BOUNDARY_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ShapeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ShapeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for ShapeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ShapeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-session source of fresh shape ids
#[derive(Debug, Clone)]
pub struct ShapeIdGenerator {
    epoch_ms: i64,
    next: u64,
}

impl ShapeIdGenerator {
    pub fn new() -> Self {
        Self {
            epoch_ms: chrono::Utc::now().timestamp_millis(),
            next: 1,
        }
    }

    /// Produce an id that this generator has never produced before
    pub fn next_id(&mut self) -> ShapeId {
        let seq = self.next;
        self.next += 1;
        ShapeId(format!("shape-{}-{}", self.epoch_ms, seq))
    }
}

impl Default for ShapeIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_unique() {
        let mut ids = ShapeIdGenerator::new();
        let seen: HashSet<ShapeId> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 500);
    }

    #[test]
    fn generated_ids_never_collide_with_plot_boundary() {
        let mut ids = ShapeIdGenerator::new();
        for _ in 0..50 {
            assert!(!ids.next_id().is_plot_boundary());
        }
    }

    #[test]
    fn plot_boundary_id() {
        let id = ShapeId::plot_boundary();
        assert!(id.is_plot_boundary());
        assert_eq!(id, "plot_boundary");
        assert_eq!(id.to_string(), "plot_boundary");
    }

    #[test]
    fn clone_of_generator_continues_independently() {
        let mut a = ShapeIdGenerator::new();
        let first = a.next_id();
        let mut b = a.clone();
        assert_eq!(a.next_id(), b.next_id());
        assert_ne!(first, a.next_id());
    }
}
