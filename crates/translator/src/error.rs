// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the translation pass.
//!
//! Every error is fatal: the run aborts before any further IR record is
//! produced or weight file written, so the downstream generator never sees
//! inconsistent partial output.

/// Errors that can occur while translating an architecture.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// Descriptor parsing or whitelist validation failed.
    #[error(transparent)]
    Architecture(#[from] model_ir::ArchitectureError),

    /// Weight serialization failed.
    #[error(transparent)]
    Export(#[from] weight_export::ExportError),

    /// Configuration file error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A declared input shape is unusable.
    #[error("invalid input shape: {detail}")]
    InvalidInputShape { detail: String },

    /// A shape-dependent step ran before any layer declared an input shape.
    #[error("no input shape declared before layer '{layer}'")]
    MissingInputShape { layer: String },

    /// A weight or bias key is absent from the store.
    #[error("weight tensor '{key}' not found for layer '{layer}'")]
    MissingWeightKey { layer: String, key: String },

    /// The store failed for a reason other than a missing key.
    #[error("weight store error for layer '{layer}': {source}")]
    Store {
        layer: String,
        #[source]
        source: weight_store::StoreError,
    },

    /// A fetched weight tensor does not have the axes its layer kind needs.
    #[error("malformed weights for layer '{layer}': {detail}")]
    MalformedWeights { layer: String, detail: String },

    /// A layer omits a config key its kind requires.
    #[error("layer '{layer}' is missing required config key '{key}'")]
    MissingLayerConfig { layer: String, key: String },

    /// A layer's config value is out of range.
    #[error("layer '{layer}' has invalid config: {detail}")]
    InvalidLayerConfig { layer: String, detail: String },

    /// The running shape cannot support the layer's computation.
    #[error("current shape is unusable for layer '{layer}': {detail}")]
    InvalidShape { layer: String, detail: String },

    /// The output directory could not be created.
    #[error("cannot create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The IR hand-off document could not be written.
    #[error("cannot write IR document '{path}': {detail}")]
    IrWrite { path: String, detail: String },
}
