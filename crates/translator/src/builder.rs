// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The topology builder: folds the ordered layer sequence into IR records.
//!
//! Each layer is a state transition `(ShapeState, LayerSpec) -> (ShapeState,
//! Option<LayerIr>)` applied in sequence order. The builder carries the two
//! pieces of fold state — the running shape and the 1-based emitted-layer
//! counter — and nothing else; per-layer weight fetches are independent of
//! one another.

use crate::{ShapeState, TranslateError};
use model_ir::{LayerIr, LayerKind, LayerParams, LayerSpec, Padding};
use std::path::PathBuf;
use tensor_core::Tensor;
use weight_export::write_array;
use weight_store::{bias_key, kernel_key, StoreError, WeightStore};

/// Folds layer specifications into [`LayerIr`] records, persisting weight
/// and bias tensors along the way.
pub struct TopologyBuilder<'a, S: WeightStore> {
    store: &'a S,
    weights_dir: PathBuf,
    shape: Option<ShapeState>,
    emitted: usize,
}

impl<'a, S: WeightStore> TopologyBuilder<'a, S> {
    /// Creates a builder over a weight store and a destination directory.
    ///
    /// `initial_shape` is the first explicit input shape the architecture
    /// declares, if any; shape-dependent layers fail without one. The
    /// destination directory must already exist.
    pub fn new(
        store: &'a S,
        weights_dir: PathBuf,
        initial_shape: Option<ShapeState>,
    ) -> Self {
        Self {
            store,
            weights_dir,
            shape: initial_shape,
            emitted: 0,
        }
    }

    /// Returns the current shape state.
    pub fn shape(&self) -> Option<&ShapeState> {
        self.shape.as_ref()
    }

    /// Returns the number of layers emitted so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Applies one layer in sequence order.
    ///
    /// Returns the layer's IR record if its kind emits one. InputLayer and
    /// Dropout are identity transitions; Flatten rewrites the shape without
    /// emitting; Dense and Conv1D emit a record, persist their tensors as
    /// `w{i}`/`b{i}`, and replace the shape.
    pub fn apply(
        &mut self,
        kind: LayerKind,
        spec: &LayerSpec,
    ) -> Result<Option<LayerIr>, TranslateError> {
        match kind {
            LayerKind::InputLayer | LayerKind::Dropout => Ok(None),
            LayerKind::Flatten => {
                let next = self.current_shape(&spec.config.name)?.flatten();
                tracing::info!(
                    "layer '{}' ({kind}): shape -> {next}",
                    spec.config.name,
                );
                self.shape = Some(next);
                Ok(None)
            }
            LayerKind::Dense => self.emit_dense(spec).map(Some),
            LayerKind::Conv1D => self.emit_conv1d(spec).map(Some),
        }
    }

    fn emit_dense(&mut self, spec: &LayerSpec) -> Result<LayerIr, TranslateError> {
        let name = spec.config.name.clone();
        let weights = self.fetch(&name, kernel_key(&name))?;
        let biases = self.fetch(&name, bias_key(&name))?;

        // Input/output widths come from the weights, which sidesteps
        // InputLayer and Flatten bookkeeping.
        let n_in = self.weight_dim(&name, &weights, 0)?;
        let n_out = self.weight_dim(&name, &weights, 1)?;
        let batch = self.current_shape(&name)?.batch();

        let n_zeros = self.persist(&weights, &biases)?;

        let next = ShapeState::new(batch, vec![n_out]);
        tracing::info!(
            "layer '{name}' (Dense): shape -> {next}, {n_zeros} zero weights",
        );
        self.shape = Some(next);

        Ok(LayerIr {
            name,
            activation: spec.config.activation.clone(),
            weights_n_zeros: n_zeros,
            params: LayerParams::Dense { n_in, n_out },
        })
    }

    fn emit_conv1d(&mut self, spec: &LayerSpec) -> Result<LayerIr, TranslateError> {
        let name = spec.config.name.clone();
        let weights = self.fetch(&name, kernel_key(&name))?;
        let biases = self.fetch(&name, bias_key(&name))?;

        // weights shape: (filter_width, n_channels, n_filters)
        let y_filt = self.weight_dim(&name, &weights, 0)?;
        let n_chan = self.weight_dim(&name, &weights, 1)?;
        let n_filt = self.weight_dim(&name, &weights, 2)?;

        let stride = spec
            .config
            .strides
            .as_ref()
            .and_then(|s| s.first().copied())
            .ok_or_else(|| TranslateError::MissingLayerConfig {
                layer: name.clone(),
                key: "strides".into(),
            })?;
        if stride == 0 {
            return Err(TranslateError::InvalidLayerConfig {
                layer: name,
                detail: "stride must be at least 1".into(),
            });
        }
        let padding = spec.config.padding.ok_or_else(|| {
            TranslateError::MissingLayerConfig {
                layer: name.clone(),
                key: "padding".into(),
            }
        })?;

        let (batch, y_in) = {
            let state = self.current_shape(&name)?;
            let y_in = state.dim(0).ok_or_else(|| TranslateError::InvalidShape {
                layer: name.clone(),
                detail: format!("current shape {state} has no spatial dimension"),
            })?;
            (state.batch(), y_in)
        };

        let (y_out, pad_left, pad_right) = match padding {
            Padding::Same => {
                let y_out = y_in.div_ceil(stride);
                let rem = y_in % stride;
                let pad_total = if rem == 0 {
                    y_filt.saturating_sub(stride)
                } else {
                    y_filt.saturating_sub(rem)
                };
                let pad_left = pad_total / 2;
                (y_out, pad_left, pad_total - pad_left)
            }
            Padding::Valid => {
                let y_out = (y_in + 1).saturating_sub(y_filt).div_ceil(stride);
                (y_out, 0, 0)
            }
        };

        let n_zeros = self.persist(&weights, &biases)?;

        let next = ShapeState::new(batch, vec![y_out, n_filt]);
        tracing::info!(
            "layer '{name}' (Conv1D): shape -> {next}, {n_zeros} zero weights",
        );
        self.shape = Some(next);

        Ok(LayerIr {
            name,
            activation: spec.config.activation.clone(),
            weights_n_zeros: n_zeros,
            params: LayerParams::Conv1D {
                y_in,
                y_filt,
                n_chan,
                n_filt,
                stride,
                padding,
                y_out,
                pad_left,
                pad_right,
            },
        })
    }

    /// Writes the weight and bias arrays under the next emitted index and
    /// returns the weight tensor's zero-count.
    ///
    /// Numbering is 1-based and advances only here, so it reflects emission
    /// order rather than raw sequence position.
    fn persist(&mut self, weights: &Tensor, biases: &Tensor) -> Result<usize, TranslateError> {
        self.emitted += 1;
        let idx = self.emitted;
        let n_zeros = write_array(&format!("w{idx}"), weights, &self.weights_dir)?;
        // The bias zero-count is reported by the writer but not carried in
        // the IR.
        write_array(&format!("b{idx}"), biases, &self.weights_dir)?;
        Ok(n_zeros)
    }

    fn fetch(&self, layer: &str, key: String) -> Result<Tensor, TranslateError> {
        match self.store.fetch(&key) {
            Ok(tensor) => Ok(tensor),
            Err(StoreError::KeyNotFound { key }) => Err(TranslateError::MissingWeightKey {
                layer: layer.to_string(),
                key,
            }),
            Err(source) => Err(TranslateError::Store {
                layer: layer.to_string(),
                source,
            }),
        }
    }

    fn weight_dim(
        &self,
        layer: &str,
        tensor: &Tensor,
        axis: usize,
    ) -> Result<usize, TranslateError> {
        tensor
            .shape()
            .dim(axis)
            .ok_or_else(|| TranslateError::MalformedWeights {
                layer: layer.to_string(),
                detail: format!(
                    "weight tensor of rank {} has no axis {axis}",
                    tensor.shape().rank(),
                ),
            })
    }

    fn current_shape(&self, layer: &str) -> Result<&ShapeState, TranslateError> {
        self.shape
            .as_ref()
            .ok_or_else(|| TranslateError::MissingInputShape {
                layer: layer.to_string(),
            })
    }
}
