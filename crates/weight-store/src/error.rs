// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for weight-store access.

/// Errors that can occur when opening or reading a weight store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The weight file could not be opened or mapped.
    #[error("cannot open weight store '{path}': {detail}")]
    Open { path: String, detail: String },

    /// The weight file is not a valid SafeTensors container.
    #[error("weight store parse error: {0}")]
    Format(String),

    /// No tensor is stored under the requested key.
    #[error("weight tensor not found: {key}")]
    KeyNotFound { key: String },

    /// The stored tensor uses an element type the translator cannot widen
    /// to `f64`.
    #[error("unsupported element type {dtype} for tensor '{key}'")]
    UnsupportedDtype { key: String, dtype: String },

    /// The stored payload disagrees with its declared shape.
    #[error(transparent)]
    Tensor(#[from] tensor_core::TensorError),
}
