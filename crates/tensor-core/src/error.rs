// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for tensor construction.

/// Errors that can occur when constructing tensors.
#[derive(Debug, thiserror::Error)]
pub enum TensorError {
    /// The element buffer does not match the declared shape.
    #[error("element count mismatch: shape declares {expected}, buffer holds {actual}")]
    ElementCountMismatch { expected: usize, actual: usize },
}
