// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: end-to-end translation pipeline.
//!
//! These tests exercise the complete flow from descriptor parsing through
//! shape propagation, weight serialization, and the generator hand-off,
//! proving that the crates compose correctly.

use model_ir::{Architecture, LayerParams, Padding};
use tensor_core::{Shape, Tensor};
use translator::{IoType, TranslateError};
use weight_store::{bias_key, kernel_key, MemoryStore};

// ── Helpers ────────────────────────────────────────────────────

/// A small convolutional network: two Conv1D stages, Flatten, Dense head.
fn network_json() -> &'static str {
    r#"{
        "class_name": "Sequential",
        "config": [
            { "class_name": "InputLayer",
              "config": { "name": "in1", "batch_input_shape": [null, 100, 7] } },
            { "class_name": "Conv1D",
              "config": { "name": "conv1", "activation": "relu",
                          "strides": [1], "padding": "same" } },
            { "class_name": "Dropout", "config": { "name": "drop1" } },
            { "class_name": "Conv1D",
              "config": { "name": "conv2", "activation": "relu",
                          "strides": [2], "padding": "valid" } },
            { "class_name": "Flatten", "config": { "name": "flatten1" } },
            { "class_name": "Dense",
              "config": { "name": "fc1", "activation": "softmax" } }
        ]
    }"#
}

/// Deterministic synthetic values with a known zero pattern.
fn synthetic_values(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            if i % 10 == 0 {
                0.0
            } else {
                (i as f64) * 0.125 - 3.0
            }
        })
        .collect()
}

fn kernel(store: &mut MemoryStore, layer: &str, dims: Vec<usize>) {
    let shape = Shape::new(dims);
    let n = shape.num_elements();
    store.insert(
        kernel_key(layer),
        Tensor::from_vec(shape, synthetic_values(n)).unwrap(),
    );
}

fn bias(store: &mut MemoryStore, layer: &str, len: usize) {
    store.insert(
        bias_key(layer),
        Tensor::from_vec(Shape::vector(len), synthetic_values(len)).unwrap(),
    );
}

fn network_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    // conv1: 3-wide filters over 7 channels, 4 filters.
    kernel(&mut store, "conv1", vec![3, 7, 4]);
    bias(&mut store, "conv1", 4);
    // conv2: 5-wide filters over 4 channels, 8 filters.
    kernel(&mut store, "conv2", vec![5, 4, 8]);
    bias(&mut store, "conv2", 8);
    // fc1: flattened 48 * 8 inputs down to 10.
    kernel(&mut store, "fc1", vec![384, 10]);
    bias(&mut store, "fc1", 10);
    store
}

// ── End-to-end flow ────────────────────────────────────────────

#[test]
fn test_full_translation() {
    let arch = Architecture::from_json(network_json()).unwrap();
    let store = network_store();
    let dir = tempfile::tempdir().unwrap();

    let layers = translator::translate(&arch, &store, dir.path()).unwrap();

    // Three emitting layers out of six.
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].name, "conv1");
    assert_eq!(layers[1].name, "conv2");
    assert_eq!(layers[2].name, "fc1");

    // conv1, same padding: width preserved.
    assert_eq!(
        layers[0].params,
        LayerParams::Conv1D {
            y_in: 100,
            y_filt: 3,
            n_chan: 7,
            n_filt: 4,
            stride: 1,
            padding: Padding::Same,
            y_out: 100,
            pad_left: 1,
            pad_right: 1,
        }
    );

    // conv2, valid padding, stride 2: ceil((100 - 5 + 1) / 2) = 48.
    assert_eq!(
        layers[1].params,
        LayerParams::Conv1D {
            y_in: 100,
            y_filt: 5,
            n_chan: 4,
            n_filt: 8,
            stride: 2,
            padding: Padding::Valid,
            y_out: 48,
            pad_left: 0,
            pad_right: 0,
        }
    );

    // Dense head over the flattened 48 x 8 feature map.
    assert_eq!(
        layers[2].params,
        LayerParams::Dense {
            n_in: 384,
            n_out: 10
        }
    );
    assert_eq!(layers[2].activation.as_deref(), Some("softmax"));

    // One header pair per emitted layer, numbered in emission order.
    let weights_dir = translator::weights_dir(dir.path());
    for file in ["w1.h", "b1.h", "w2.h", "b2.h", "w3.h", "b3.h"] {
        assert!(weights_dir.join(file).exists(), "missing {file}");
    }

    // Zero-counts flow from the store through the writer into the IR.
    let w1 = std::fs::read_to_string(weights_dir.join("w1.h")).unwrap();
    assert!(w1.contains(&format!("// Zero count: {}", layers[0].weights_n_zeros)));
    // conv1's kernel is rank 3: declared flat as 3 * 7 * 4 elements.
    assert!(w1.contains("weight_default_t w1[84] = {"));
}

#[test]
fn test_model_kind_descriptor_translates_identically() {
    // The same network expressed as a 'Model' descriptor normalizes to the
    // same layer sequence and therefore the same IR.
    let sequential = Architecture::from_json(network_json()).unwrap();
    let model_json = format!(
        r#"{{ "class_name": "Model", "config": {{ "name": "m", "layers": {} }} }}"#,
        &network_json()[network_json().find('[').unwrap()
            ..network_json().rfind(']').unwrap() + 1]
    );
    let model = Architecture::from_json(&model_json).unwrap();
    let store = network_store();

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let from_sequential = translator::translate(&sequential, &store, dir_a.path()).unwrap();
    let from_model = translator::translate(&model, &store, dir_b.path()).unwrap();

    assert_eq!(from_sequential, from_model);
}

#[test]
fn test_translation_is_deterministic() {
    let arch = Architecture::from_json(network_json()).unwrap();
    let store = network_store();

    let dir_a = tempfile::tempdir().unwrap();
    let dir_b = tempfile::tempdir().unwrap();
    let first = translator::translate(&arch, &store, dir_a.path()).unwrap();
    let second = translator::translate(&arch, &store, dir_b.path()).unwrap();

    assert_eq!(first, second);

    // Byte-identical weight headers as well.
    let w1_a = std::fs::read(translator::weights_dir(dir_a.path()).join("w1.h")).unwrap();
    let w1_b = std::fs::read(translator::weights_dir(dir_b.path()).join("w1.h")).unwrap();
    assert_eq!(w1_a, w1_b);
}

#[test]
fn test_ir_document_handoff() {
    let arch = Architecture::from_json(network_json()).unwrap();
    let store = network_store();
    let dir = tempfile::tempdir().unwrap();

    let layers = translator::translate(&arch, &store, dir.path()).unwrap();
    let path = translator::write_ir(&layers, IoType::IoParallel, dir.path()).unwrap();

    assert_eq!(path, dir.path().join("firmware").join("model_ir.json"));
    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(doc["io_type"], "io_parallel");
    let json_layers = doc["layers"].as_array().unwrap();
    assert_eq!(json_layers.len(), 3);
    assert_eq!(json_layers[0]["class_name"], "Conv1D");
    assert_eq!(json_layers[0]["padding"], "same");
    assert_eq!(json_layers[2]["class_name"], "Dense");
    assert_eq!(json_layers[2]["n_in"], 384);
}

#[test]
fn test_unsupported_layer_leaves_no_output() {
    let json = r#"{
        "class_name": "Sequential",
        "config": [
            { "class_name": "InputLayer",
              "config": { "name": "in1", "batch_input_shape": [null, 100, 7] } },
            { "class_name": "Conv1D",
              "config": { "name": "conv1", "strides": [1], "padding": "same" } },
            { "class_name": "GRU", "config": { "name": "gru1" } }
        ]
    }"#;
    let arch = Architecture::from_json(json).unwrap();
    let store = network_store();
    let dir = tempfile::tempdir().unwrap();

    let err = translator::translate(&arch, &store, dir.path()).unwrap_err();
    assert!(matches!(err, TranslateError::Architecture(_)));
    assert!(!translator::weights_dir(dir.path()).exists());
}
