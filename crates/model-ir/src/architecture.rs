// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Architecture descriptor parsing and normalization.
//!
//! A descriptor is a nested JSON mapping whose top-level `class_name`
//! selects where the layer sequence lives:
//!
//! - `"Sequential"` — the layers are the `config` array itself.
//! - `"Model"` — the layers are at `config.layers`.
//!
//! Both kinds normalize to the same ordered [`LayerSpec`] sequence. Any
//! other top-level kind is an explicit error; translation never proceeds
//! with an undefined layer sequence.

use crate::{ArchitectureError, LayerKind, LayerSpec};
use std::path::Path;

/// Raw top-level descriptor, before kind normalization.
#[derive(Debug, serde::Deserialize)]
struct RawArchitecture {
    class_name: String,
    config: serde_json::Value,
}

/// The parsed architecture: an ordered sequence of layer entries.
///
/// Immutable once loaded. [`checked_layers`](Architecture::checked_layers)
/// validates the whole sequence against the [`LayerKind`] whitelist in one
/// pass, so a caller holding its result knows no unsupported layer can turn
/// up mid-translation.
#[derive(Debug, Clone)]
pub struct Architecture {
    class_name: String,
    layers: Vec<LayerSpec>,
}

impl Architecture {
    /// Loads a descriptor from a JSON file path.
    pub fn from_file(path: &Path) -> Result<Self, ArchitectureError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses a descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ArchitectureError> {
        let raw: RawArchitecture = serde_json::from_str(json)?;

        let layers_value = match raw.class_name.as_str() {
            "Sequential" => raw.config,
            "Model" => raw
                .config
                .get("layers")
                .cloned()
                .ok_or_else(|| {
                    ArchitectureError::Malformed(
                        "'Model' descriptor has no 'config.layers' array".into(),
                    )
                })?,
            other => {
                return Err(ArchitectureError::UnknownArchitectureKind {
                    class_name: other.to_string(),
                })
            }
        };

        let layers: Vec<LayerSpec> = serde_json::from_value(layers_value)?;
        Ok(Self {
            class_name: raw.class_name,
            layers,
        })
    }

    /// Returns the top-level descriptor kind (`"Sequential"` or `"Model"`).
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the ordered layer sequence.
    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    /// Validates every layer against the whitelist and returns the ordered
    /// `(kind, spec)` pairs.
    ///
    /// Fails on the first layer whose class is outside [`LayerKind`]. This
    /// runs before any weight file is written, so an unsupported layer
    /// anywhere in the sequence leaves no partial output behind.
    pub fn checked_layers(
        &self,
    ) -> Result<Vec<(LayerKind, &LayerSpec)>, ArchitectureError> {
        self.layers
            .iter()
            .map(|spec| {
                LayerKind::parse(&spec.class_name)
                    .map(|kind| (kind, spec))
                    .ok_or_else(|| ArchitectureError::UnsupportedLayer {
                        layer: spec.config.name.clone(),
                        class_name: spec.class_name.clone(),
                    })
            })
            .collect()
    }

    /// Returns the first explicit input shape declared by any layer.
    ///
    /// The first element is the nullable batch size; the remaining elements
    /// are spatial/feature extents.
    pub fn batch_input_shape(&self) -> Option<&[Option<usize>]> {
        self.layers
            .iter()
            .find_map(|l| l.config.batch_input_shape.as_deref())
    }
}
