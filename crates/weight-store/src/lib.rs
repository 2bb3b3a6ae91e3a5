// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # weight-store
//!
//! Read-only access to the named weight/bias tensors of a trained model.
//!
//! The store is an opaque mapping from string keys to numeric arrays. Keys
//! follow the convention `"<layer>/<layer>/kernel"` for weights and
//! `"<layer>/<layer>/bias"` for biases (see [`kernel_key`] / [`bias_key`]).
//!
//! Two implementations are provided:
//! - [`SafeTensorsStore`] — memory-maps a SafeTensors weight file; the
//!   production path.
//! - [`MemoryStore`] — an in-memory map for tests and synthetic runs.

mod error;
mod store;

pub use error::StoreError;
pub use store::{MemoryStore, SafeTensorsStore, WeightStore};

/// Builds the weight-tensor key for a layer name.
pub fn kernel_key(layer: &str) -> String {
    format!("{layer}/{layer}/kernel")
}

/// Builds the bias-tensor key for a layer name.
pub fn bias_key(layer: &str) -> String {
    format!("{layer}/{layer}/bias")
}
