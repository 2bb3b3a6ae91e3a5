// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Owned numeric tensors.

use crate::{Shape, TensorError};

/// An owned, n-dimensional tensor of `f64` elements in row-major order.
///
/// `Tensor` is the data carrier between the weight store and the weight
/// serializer. Elements are stored flat with the last axis fastest-varying,
/// so [`values`](Tensor::values) enumerates them in the exact order the
/// serializer writes them out.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f64>,
}

impl Tensor {
    /// Creates a tensor from a row-major element vector.
    ///
    /// Returns an error if the buffer length does not match the shape's
    /// element count.
    ///
    /// # Examples
    /// ```
    /// use tensor_core::{Shape, Tensor};
    /// let t = Tensor::from_vec(Shape::matrix(2, 2), vec![1.0, 0.0, 0.0, 4.0]).unwrap();
    /// assert_eq!(t.num_zeros(), 2);
    /// ```
    pub fn from_vec(shape: Shape, data: Vec<f64>) -> Result<Self, TensorError> {
        let expected = shape.num_elements();
        if data.len() != expected {
            return Err(TensorError::ElementCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a tensor from a slice of `f32` values, widening to `f64`.
    ///
    /// Weight files commonly store single precision; widening is lossless.
    pub fn from_f32(shape: Shape, values: &[f32]) -> Result<Self, TensorError> {
        let data = values.iter().map(|&v| f64::from(v)).collect();
        Self::from_vec(shape, data)
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the elements in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Returns the number of elements.
    pub fn num_elements(&self) -> usize {
        self.data.len()
    }

    /// Counts the elements exactly equal to zero.
    ///
    /// Scans [`values`](Tensor::values) in order, so the count corresponds
    /// element-for-element to any row-major enumeration of this tensor.
    pub fn num_zeros(&self) -> usize {
        self.data.iter().filter(|&&v| v == 0.0).count()
    }

    /// Returns the smallest element, or `None` for an empty tensor.
    pub fn min(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }

    /// Returns the largest element, or `None` for an empty tensor.
    pub fn max(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }
}
