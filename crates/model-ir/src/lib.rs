// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # model-ir
//!
//! The architecture descriptor model and the per-layer intermediate
//! representation for network-to-firmware translation.
//!
//! This crate defines:
//! - [`Architecture`] — the parsed descriptor, normalized from either of the
//!   two recognized top-level kinds (`Sequential`, `Model`) into one ordered
//!   layer sequence.
//! - [`LayerSpec`] / [`LayerConfig`] — a single raw layer entry.
//! - [`LayerKind`] — the closed whitelist of layer classes the translator
//!   accepts, with per-variant capability flags.
//! - [`LayerIr`] / [`LayerParams`] — the output record for one emitted
//!   layer, carrying exactly the fields its kind defines.
//!
//! # Example
//! ```
//! use model_ir::Architecture;
//!
//! let json = r#"{
//!     "class_name": "Sequential",
//!     "config": [
//!         { "class_name": "Dense",
//!           "config": { "name": "fc1", "activation": "relu",
//!                       "batch_input_shape": [null, 16] } }
//!     ]
//! }"#;
//! let arch = Architecture::from_json(json).unwrap();
//! assert_eq!(arch.layers().len(), 1);
//! ```

mod architecture;
mod error;
mod ir;
mod layer;

pub use architecture::Architecture;
pub use error::ArchitectureError;
pub use ir::{LayerIr, LayerParams};
pub use layer::{LayerConfig, LayerKind, LayerSpec, Padding};
