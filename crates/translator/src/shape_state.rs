// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The running shape threaded through translation.

use crate::TranslateError;
use std::fmt;

/// The single mutable quantity of the shape fold: a nullable batch size
/// followed by positive spatial/feature extents.
///
/// A `ShapeState` is replaced whole on every shape-affecting layer; it is
/// never partially mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeState {
    batch: Option<usize>,
    dims: Vec<usize>,
}

impl ShapeState {
    /// Creates a shape state from a batch size and non-batch extents.
    pub fn new(batch: Option<usize>, dims: Vec<usize>) -> Self {
        Self { batch, dims }
    }

    /// Builds the initial state from a descriptor `batch_input_shape`.
    ///
    /// The first element is the nullable batch size; every following
    /// element must be a positive integer.
    pub fn from_batch_input_shape(raw: &[Option<usize>]) -> Result<Self, TranslateError> {
        let (batch, rest) = raw.split_first().ok_or_else(|| {
            TranslateError::InvalidInputShape {
                detail: "input shape is empty".into(),
            }
        })?;

        let dims = rest
            .iter()
            .map(|d| {
                d.ok_or_else(|| TranslateError::InvalidInputShape {
                    detail: "only the batch dimension may be null".into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if dims.iter().any(|&d| d == 0) {
            return Err(TranslateError::InvalidInputShape {
                detail: "non-batch dimensions must be positive".into(),
            });
        }

        Ok(Self {
            batch: *batch,
            dims,
        })
    }

    /// Returns the nullable batch size.
    pub fn batch(&self) -> Option<usize> {
        self.batch
    }

    /// Returns the non-batch extents.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns a specific non-batch extent, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Collapses all non-batch extents into one.
    pub fn flatten(&self) -> Self {
        Self {
            batch: self.batch,
            dims: vec![self.dims.iter().product()],
        }
    }
}

impl fmt::Display for ShapeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        match self.batch {
            Some(b) => write!(f, "{b}")?,
            None => write!(f, "None")?,
        }
        for d in &self.dims {
            write!(f, ", {d}")?;
        }
        write!(f, "]")
    }
}
