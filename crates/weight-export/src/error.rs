// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for weight serialization.

/// Errors that can occur when serializing an array.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The array name matches neither the weight nor the bias role marker.
    #[error("array name '{name}' matches neither weight nor bias role")]
    UnknownRole { name: String },

    /// The tensor has no elements; there is no literal (or minimum or
    /// maximum) to write.
    #[error("array '{name}' has no elements")]
    Empty { name: String },

    /// The header file could not be written.
    #[error("cannot write array '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
