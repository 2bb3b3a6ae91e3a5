// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nn2hdl
//!
//! Command-line interface for the network-to-firmware translator.
//!
//! ## Usage
//! ```bash
//! # Translate a trained network into firmware sources
//! nn2hdl translate --config my-model.toml
//!
//! # Inspect a descriptor without touching weights
//! nn2hdl inspect --model architecture.json
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nn2hdl",
    about = "Translates trained sequential networks into firmware IR and weight literals",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging (repeat for more: -v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full translation from a TOML configuration file.
    Translate {
        /// Path to the configuration file.
        #[arg(short, long)]
        config: std::path::PathBuf,
    },

    /// Inspect an architecture descriptor: layer table and input shape.
    Inspect {
        /// Path to the architecture descriptor JSON.
        #[arg(short, long)]
        model: std::path::PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Translate { config } => commands::translate::execute(config),
        Commands::Inspect { model } => commands::inspect::execute(model),
    }
}
