// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nn2hdl inspect` command: display a descriptor's layer table.
//!
//! Parses the architecture JSON and prints each layer's class, activation,
//! and capability flags, without opening the weight store. Unsupported
//! classes are flagged rather than failing, so the command doubles as a
//! pre-flight check.

use crate::commands::truncate;
use model_ir::{Architecture, LayerKind};
use std::path::PathBuf;

pub fn execute(model: PathBuf) -> anyhow::Result<()> {
    let arch = Architecture::from_file(&model).map_err(|e| {
        anyhow::anyhow!("failed to load architecture from '{}': {e}", model.display())
    })?;

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║             nn2hdl · Architecture Inspector          ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Summary ────────────────────────────────────────────────
    println!("  Kind: {}", arch.class_name());
    println!("  Layers: {}", arch.layers().len());
    match arch.batch_input_shape() {
        Some(shape) => println!("  Input shape: {}", format_raw_shape(shape)),
        None => println!("  Input shape: (none declared)"),
    }
    println!();

    // ── Per-Layer Detail ───────────────────────────────────────
    println!(
        "  {:<4} {:<24} {:<12} {:<12} {:>6} {:>6}",
        "Idx", "Name", "Class", "Activation", "Emits", "Shape",
    );
    println!("  {}", "-".repeat(70));

    let mut unsupported = 0usize;
    for (i, spec) in arch.layers().iter().enumerate() {
        let kind = LayerKind::parse(&spec.class_name);
        let (emits, shapes) = match kind {
            Some(k) => (k.emits_ir(), k.transforms_shape()),
            None => {
                unsupported += 1;
                (false, false)
            }
        };
        let class = match kind {
            Some(k) => k.as_str().to_string(),
            None => format!("{}!", spec.class_name),
        };
        println!(
            "  {:<4} {:<24} {:<12} {:<12} {:>6} {:>6}",
            i,
            truncate(&spec.config.name, 24),
            truncate(&class, 12),
            spec.config.activation.as_deref().unwrap_or("-"),
            if emits { "yes" } else { "-" },
            if shapes { "yes" } else { "-" },
        );
    }
    println!();

    if unsupported > 0 {
        println!(
            "  {unsupported} layer(s) outside the supported set (marked '!'); \
             translation would abort.",
        );
    } else {
        let emitting = arch
            .layers()
            .iter()
            .filter(|l| {
                LayerKind::parse(&l.class_name).is_some_and(LayerKind::emits_ir)
            })
            .count();
        println!("  All layers supported; {emitting} would emit IR.");
    }
    println!();

    Ok(())
}

/// Formats a raw `batch_input_shape` with its nullable batch element.
fn format_raw_shape(shape: &[Option<usize>]) -> String {
    let parts: Vec<String> = shape
        .iter()
        .map(|d| match d {
            Some(v) => v.to_string(),
            None => "None".to_string(),
        })
        .collect();
    format!("[{}]", parts.join(", "))
}
