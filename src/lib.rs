// Copyright 2025 the Floorsketch Authors
// SPDX-License-Identifier: Apache-2.0

//! Floorsketch: the editing core of a guided floorplan sketcher
//!
//! The crate owns the drawing state (plot boundary, drawn shapes,
//! selection, tools, viewport) and the four-step wizard around it. A
//! presentation layer feeds it pointer events and renders the derived
//! views; the bundled binary drives it from a JSON command script.

pub mod config;
pub mod data;
pub mod editing;
pub mod error;
pub mod model;
pub mod notice;
pub mod script;
pub mod settings;
pub mod theme;
pub mod tools;

use config::EditorConfig;
use data::AppState;
use script::StateSnapshot;
use std::path::PathBuf;

/// Entry point for the floorsketch binary
///
/// Usage: `floorsketch <script.json> [config.toml]`. The final state is
/// printed to stdout as JSON.
pub fn run() -> anyhow::Result<()> {
    // Controlled via RUST_LOG; logs go to stderr so stdout stays JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("floorsketch=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(script_path) = args.get(1).map(PathBuf::from) else {
        tracing::error!("Usage: floorsketch <script.json> [config.toml]");
        anyhow::bail!("missing script path");
    };

    let config = match args.get(2) {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading config from: {}", path.display());
            EditorConfig::load(&path)?
        }
        None => EditorConfig::default(),
    };

    tracing::info!("Running script: {}", script_path.display());
    let commands = script::load_script(&script_path)?;
    let mut state = AppState::with_config(&config);
    script::run_script(&mut state, &commands);

    let snapshot = StateSnapshot::capture(&state);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
