// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Weight store implementations.
//!
//! [`SafeTensorsStore`] memory-maps the weight file once and extracts
//! tensors on demand; only the requested tensor's payload is copied out of
//! the map. [`MemoryStore`] backs tests and synthetic runs with a plain map.

use crate::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tensor_core::{Shape, Tensor};

/// Read-only access to named numeric tensors.
pub trait WeightStore {
    /// Fetches the tensor stored under `key`.
    ///
    /// Returns [`StoreError::KeyNotFound`] when the key is absent.
    fn fetch(&self, key: &str) -> Result<Tensor, StoreError>;
}

/// A weight store backed by a memory-mapped SafeTensors file.
#[derive(Debug)]
pub struct SafeTensorsStore {
    path: PathBuf,
    mmap: memmap2::Mmap,
}

impl SafeTensorsStore {
    /// Opens and memory-maps a SafeTensors weight file.
    ///
    /// The header is parsed once up front so a malformed file fails here
    /// rather than on the first fetch.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;

        // Map the file for zero-copy access to tensor payloads.
        let mmap = unsafe { memmap2::Mmap::map(&file) }.map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            detail: format!("mmap failed: {e}"),
        })?;

        let tensors = safetensors::SafeTensors::deserialize(&mmap)
            .map_err(|e| StoreError::Format(format!("SafeTensors parse error: {e}")))?;
        tracing::info!(
            "weight store: mapped '{}' ({} tensors, {:.2} MB)",
            path.display(),
            tensors.len(),
            mmap.len() as f64 / (1024.0 * 1024.0),
        );
        drop(tensors);

        Ok(Self {
            path: path.to_path_buf(),
            mmap,
        })
    }

    /// Returns the path of the underlying weight file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the keys present in the store, in file order.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let tensors = safetensors::SafeTensors::deserialize(&self.mmap)
            .map_err(|e| StoreError::Format(format!("SafeTensors parse error: {e}")))?;
        Ok(tensors.names().into_iter().map(String::from).collect())
    }
}

impl WeightStore for SafeTensorsStore {
    fn fetch(&self, key: &str) -> Result<Tensor, StoreError> {
        let tensors = safetensors::SafeTensors::deserialize(&self.mmap)
            .map_err(|e| StoreError::Format(format!("SafeTensors parse error: {e}")))?;

        let view = tensors
            .tensor(key)
            .map_err(|_| StoreError::KeyNotFound {
                key: key.to_string(),
            })?;

        let shape = Shape::new(view.shape().to_vec());
        let data = view.data();

        // SafeTensors payloads are little-endian.
        let tensor = match view.dtype() {
            safetensors::Dtype::F32 => {
                let values: Vec<f64> = data
                    .chunks_exact(4)
                    .map(|b| f64::from(f32::from_le_bytes([b[0], b[1], b[2], b[3]])))
                    .collect();
                Tensor::from_vec(shape, values)?
            }
            safetensors::Dtype::F64 => {
                let values: Vec<f64> = data
                    .chunks_exact(8)
                    .map(|b| {
                        f64::from_le_bytes([
                            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
                        ])
                    })
                    .collect();
                Tensor::from_vec(shape, values)?
            }
            other => {
                return Err(StoreError::UnsupportedDtype {
                    key: key.to_string(),
                    dtype: format!("{other:?}"),
                })
            }
        };

        Ok(tensor)
    }
}

/// An in-memory weight store for tests and synthetic runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tensors: HashMap<String, Tensor>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a tensor under the given key, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, tensor: Tensor) {
        self.tensors.insert(key.into(), tensor);
    }

    /// Returns the number of stored tensors.
    pub fn len(&self) -> usize {
        self.tensors.len()
    }

    /// Returns `true` if the store holds no tensors.
    pub fn is_empty(&self) -> bool {
        self.tensors.is_empty()
    }
}

impl WeightStore for MemoryStore {
    fn fetch(&self, key: &str) -> Result<Tensor, StoreError> {
        self.tensors
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::KeyNotFound {
                key: key.to_string(),
            })
    }
}
