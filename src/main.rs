// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Floorsketch: run a floorplan editing script

fn main() -> anyhow::Result<()> {
    floorsketch::run()
}
