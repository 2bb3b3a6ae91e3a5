// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Raw layer entries and the supported layer-kind whitelist.

use std::fmt;

/// The closed set of layer classes the translator accepts.
///
/// Anything outside this whitelist aborts translation before any output is
/// written. The two capability flags replace the separately maintained
/// "supported" and "skip" lists of descriptor-driven converters: a kind
/// either contributes an IR record, transforms the running shape, or is
/// passed over entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    /// Declares the network input; carries the initial shape.
    InputLayer,
    /// Training-time regularization; identity at translation time.
    Dropout,
    /// Collapses all non-batch dimensions into one.
    Flatten,
    /// Fully connected projection.
    Dense,
    /// One-dimensional convolution.
    Conv1D,
}

impl LayerKind {
    /// Parses a descriptor `class_name` into a kind.
    ///
    /// Matching is ordinary value equality on the exact class names the
    /// descriptor format uses.
    pub fn parse(class_name: &str) -> Option<Self> {
        match class_name {
            "InputLayer" => Some(Self::InputLayer),
            "Dropout" => Some(Self::Dropout),
            "Flatten" => Some(Self::Flatten),
            "Dense" => Some(Self::Dense),
            "Conv1D" => Some(Self::Conv1D),
            _ => None,
        }
    }

    /// Returns the descriptor class name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InputLayer => "InputLayer",
            Self::Dropout => "Dropout",
            Self::Flatten => "Flatten",
            Self::Dense => "Dense",
            Self::Conv1D => "Conv1D",
        }
    }

    /// Returns `true` if this kind produces an IR record (and advances the
    /// emitted-layer counter).
    pub fn emits_ir(self) -> bool {
        matches!(self, Self::Dense | Self::Conv1D)
    }

    /// Returns `true` if this kind changes the running shape state.
    pub fn transforms_shape(self) -> bool {
        matches!(self, Self::Flatten | Self::Dense | Self::Conv1D)
    }
}

impl fmt::Display for LayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convolution output-sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// Pad the input so the output width is `ceil(in / stride)`.
    Same,
    /// No padding; the output shrinks by the filter extent.
    Valid,
}

impl Padding {
    /// Returns the descriptor spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Same => "same",
            Self::Valid => "valid",
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw layer entry of the descriptor.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LayerSpec {
    /// Layer class tag (e.g., `"Dense"`). Checked against [`LayerKind`]
    /// before translation begins.
    pub class_name: String,
    /// Layer-specific attributes.
    pub config: LayerConfig,
}

/// The recognized keys of a layer's `config` mapping.
///
/// Descriptors carry many more keys (initializers, constraints, trainable
/// flags); everything unrecognized is ignored on deserialization.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct LayerConfig {
    /// Layer name; also the key prefix for its weights in the store.
    pub name: String,
    /// Activation function tag, copied verbatim into the IR when present.
    #[serde(default)]
    pub activation: Option<String>,
    /// Explicit input shape; first element is the nullable batch size.
    #[serde(default)]
    pub batch_input_shape: Option<Vec<Option<usize>>>,
    /// Convolution strides; only the first element is used.
    #[serde(default)]
    pub strides: Option<Vec<usize>>,
    /// Convolution padding policy.
    #[serde(default)]
    pub padding: Option<Padding>,
}
