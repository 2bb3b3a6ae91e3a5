// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for descriptor parsing and validation.

/// Errors that can occur when working with architecture descriptors.
#[derive(Debug, thiserror::Error)]
pub enum ArchitectureError {
    /// The descriptor file could not be read.
    #[error("failed to read architecture descriptor: {0}")]
    DescriptorRead(#[from] std::io::Error),

    /// The descriptor JSON is malformed.
    #[error("failed to parse architecture descriptor: {0}")]
    DescriptorParse(#[from] serde_json::Error),

    /// The descriptor is structurally valid JSON but not a usable model.
    #[error("malformed architecture descriptor: {0}")]
    Malformed(String),

    /// The top-level discriminator matches neither recognized kind.
    #[error("unrecognized architecture kind '{class_name}'; expected 'Sequential' or 'Model'")]
    UnknownArchitectureKind { class_name: String },

    /// A layer's class is outside the supported whitelist.
    #[error("unsupported layer type '{class_name}' in layer '{layer}'")]
    UnsupportedLayer { layer: String, class_name: String },
}
