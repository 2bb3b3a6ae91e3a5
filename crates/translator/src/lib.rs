// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # translator
//!
//! Translates a parsed architecture plus a weight store into the ordered
//! per-layer IR the firmware generator consumes, persisting every weight
//! and bias tensor as a fixed-precision literal header along the way.
//!
//! The pass is a single-threaded, run-to-completion fold over the layer
//! sequence (see [`TopologyBuilder`]):
//!
//! 1. The whole sequence is checked against the layer whitelist.
//! 2. The first explicitly declared input shape seeds the [`ShapeState`].
//! 3. Each layer transitions the shape and, for Dense/Conv1D, emits a
//!    [`model_ir::LayerIr`] record while its tensors are written out as
//!    `w{i}`/`b{i}` in emission order.
//!
//! Any failure aborts the run; no partial IR is handed downstream.
//!
//! # Example
//! ```no_run
//! use model_ir::Architecture;
//! use std::path::Path;
//! use weight_store::SafeTensorsStore;
//!
//! let arch = Architecture::from_file(Path::new("architecture.json")).unwrap();
//! let store = SafeTensorsStore::open(Path::new("weights.safetensors")).unwrap();
//! let layers = translator::translate(&arch, &store, Path::new("build")).unwrap();
//! println!("emitted {} layers", layers.len());
//! ```

mod builder;
mod config;
mod error;
mod shape_state;

pub use builder::TopologyBuilder;
pub use config::{IoType, TranslateConfig};
pub use error::TranslateError;
pub use shape_state::ShapeState;

use model_ir::{Architecture, LayerIr};
use std::path::{Path, PathBuf};
use weight_store::WeightStore;

/// Returns the directory weight headers are written to.
pub fn weights_dir(output_dir: &Path) -> PathBuf {
    output_dir.join("firmware").join("weights")
}

/// Translates an architecture into the ordered layer IR, writing weight
/// headers under `<output_dir>/firmware/weights`.
pub fn translate<S: WeightStore>(
    arch: &Architecture,
    store: &S,
    output_dir: &Path,
) -> Result<Vec<LayerIr>, TranslateError> {
    // Whitelist the whole sequence before anything touches the filesystem.
    let checked = arch.checked_layers()?;

    let initial = arch
        .batch_input_shape()
        .map(ShapeState::from_batch_input_shape)
        .transpose()?;
    match &initial {
        Some(shape) => tracing::info!("input shape: {shape}"),
        None => tracing::debug!("no explicit input shape declared"),
    }

    let weights_dir = weights_dir(output_dir);
    std::fs::create_dir_all(&weights_dir).map_err(|e| TranslateError::OutputDir {
        path: weights_dir.display().to_string(),
        source: e,
    })?;

    let mut builder = TopologyBuilder::new(store, weights_dir, initial);
    let mut layers = Vec::new();
    for (kind, spec) in checked {
        if let Some(ir) = builder.apply(kind, spec)? {
            layers.push(ir);
        }
    }

    tracing::info!(
        "translated {} layers, {} emitted",
        arch.layers().len(),
        layers.len(),
    );
    Ok(layers)
}

/// The hand-off document for the downstream generator: the layer list plus
/// the opaque generator configuration.
#[derive(serde::Serialize)]
struct IrDocument<'a> {
    io_type: IoType,
    layers: &'a [LayerIr],
}

/// Writes the IR hand-off document to `<output_dir>/firmware/model_ir.json`
/// and returns its path.
pub fn write_ir(
    layers: &[LayerIr],
    io_type: IoType,
    output_dir: &Path,
) -> Result<PathBuf, TranslateError> {
    let firmware_dir = output_dir.join("firmware");
    std::fs::create_dir_all(&firmware_dir).map_err(|e| TranslateError::OutputDir {
        path: firmware_dir.display().to_string(),
        source: e,
    })?;

    let path = firmware_dir.join("model_ir.json");
    let doc = IrDocument { io_type, layers };
    let json = serde_json::to_string_pretty(&doc).map_err(|e| TranslateError::IrWrite {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;
    std::fs::write(&path, json).map_err(|e| TranslateError::IrWrite {
        path: path.display().to_string(),
        detail: e.to_string(),
    })?;

    tracing::info!("wrote IR document '{}'", path.display());
    Ok(path)
}
