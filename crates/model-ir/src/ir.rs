// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-layer intermediate representation records.
//!
//! Only Dense and Conv1D layers emit IR; the record carries just enough
//! shape and parameter data to drive firmware code generation. Kind-specific
//! fields live in [`LayerParams`], an internally tagged enum, so a Dense
//! record can never carry convolution fields and vice versa.

use crate::{LayerKind, Padding};

/// The output record for one emitted layer.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerIr {
    /// Layer name from the descriptor; also the weight-store key prefix.
    pub name: String,
    /// Activation function tag, copied verbatim when the descriptor has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation: Option<String>,
    /// Count of weight elements exactly equal to zero.
    pub weights_n_zeros: usize,
    /// Kind-specific parameters, tagged by `class_name`.
    #[serde(flatten)]
    pub params: LayerParams,
}

/// Kind-specific parameter sets.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "class_name")]
pub enum LayerParams {
    /// Fully connected layer.
    Dense {
        /// Input width, taken from the weight tensor's first axis.
        n_in: usize,
        /// Output width, taken from the weight tensor's second axis.
        n_out: usize,
    },
    /// One-dimensional convolution.
    Conv1D {
        /// Input spatial extent.
        y_in: usize,
        /// Filter width.
        y_filt: usize,
        /// Input channel count.
        n_chan: usize,
        /// Filter (output channel) count.
        n_filt: usize,
        /// Stride along the spatial axis.
        stride: usize,
        /// Output-sizing policy.
        padding: Padding,
        /// Output spatial extent.
        y_out: usize,
        /// Elements padded before the input.
        pad_left: usize,
        /// Elements padded after the input.
        pad_right: usize,
    },
}

impl LayerIr {
    /// Returns the layer's kind.
    pub fn kind(&self) -> LayerKind {
        match self.params {
            LayerParams::Dense { .. } => LayerKind::Dense,
            LayerParams::Conv1D { .. } => LayerKind::Conv1D,
        }
    }

    /// Returns the descriptor class name.
    pub fn class_name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns a concise summary string for display.
    pub fn summary(&self) -> String {
        match &self.params {
            LayerParams::Dense { n_in, n_out } => format!(
                "{} ({}) {} -> {}, {} zero weights",
                self.name,
                self.class_name(),
                n_in,
                n_out,
                self.weights_n_zeros,
            ),
            LayerParams::Conv1D {
                y_in,
                n_filt,
                y_out,
                padding,
                ..
            } => format!(
                "{} ({}) {} -> {} x {} ({}), {} zero weights",
                self.name,
                self.class_name(),
                y_in,
                y_out,
                n_filt,
                padding,
                self.weights_n_zeros,
            ),
        }
    }
}
