// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nn2hdl translate` command: run a full translation.
//!
//! Loads the configuration, parses the descriptor, opens the weight store,
//! folds the topology into IR, and writes the generator hand-off document.

use model_ir::Architecture;
use std::path::PathBuf;
use translator::TranslateConfig;
use weight_store::SafeTensorsStore;

pub fn execute(config_path: PathBuf) -> anyhow::Result<()> {
    let config = TranslateConfig::from_file(&config_path).map_err(|e| {
        anyhow::anyhow!("failed to load config '{}': {e}", config_path.display())
    })?;

    tracing::info!(
        "translating '{}' ({})",
        config.architecture.display(),
        config.io_type,
    );

    let arch = Architecture::from_file(&config.architecture).map_err(|e| {
        anyhow::anyhow!(
            "failed to load architecture from '{}': {e}",
            config.architecture.display()
        )
    })?;
    let store = SafeTensorsStore::open(&config.weights)?;

    let layers = translator::translate(&arch, &store, &config.output_dir)?;
    let ir_path = translator::write_ir(&layers, config.io_type, &config.output_dir)?;

    println!(
        "Translated {} of {} layers:",
        layers.len(),
        arch.layers().len(),
    );
    for (i, layer) in layers.iter().enumerate() {
        println!("  w{n}/b{n}  {}", layer.summary(), n = i + 1);
    }
    println!();
    println!("  IR document: {}", ir_path.display());
    println!(
        "  Weights:     {}",
        translator::weights_dir(&config.output_dir).display(),
    );

    Ok(())
}
