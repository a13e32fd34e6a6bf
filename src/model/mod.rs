// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Floorplan data model

pub mod plan;
pub mod shape;
pub mod shape_id;

pub use plan::Plan;
pub use shape::{Shape, ShapeKind, ShapeStyle, rect_corners};
pub use shape_id::{ShapeId, ShapeIdGenerator};
