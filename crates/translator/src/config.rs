// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Translation run configuration loaded from TOML files.
//!
//! # TOML Format
//! ```toml
//! architecture = "model/architecture.json"
//! weights = "model/weights.safetensors"
//! output_dir = "build/engine"
//! io_type = "io_parallel"
//! ```
//!
//! Relative paths are resolved against the directory containing the config
//! file, so a config travels with its model.

use crate::TranslateError;
use std::path::{Path, PathBuf};

/// How the generated firmware moves data between layers.
///
/// Validated here, at the caller layer; the translation core carries it
/// opaquely through to the generator hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IoType {
    /// Fully unrolled, parallel layer I/O.
    #[serde(rename = "io_parallel")]
    IoParallel,
    /// Streamed, element-serial layer I/O.
    #[serde(rename = "io_serial")]
    IoSerial,
}

impl IoType {
    /// Returns the configuration spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::IoParallel => "io_parallel",
            Self::IoSerial => "io_serial",
        }
    }
}

impl std::fmt::Display for IoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one translation run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TranslateConfig {
    /// Path to the architecture descriptor JSON.
    pub architecture: PathBuf,
    /// Path to the SafeTensors weight file.
    pub weights: PathBuf,
    /// Destination directory; weight headers land under `firmware/weights`.
    pub output_dir: PathBuf,
    /// Generator I/O mode, passed through opaquely.
    pub io_type: IoType,
}

impl TranslateConfig {
    /// Loads configuration from a TOML file, resolving relative paths
    /// against the file's directory.
    pub fn from_file(path: &Path) -> Result<Self, TranslateError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TranslateError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        let mut config = Self::from_toml(&content)?;
        if let Some(dir) = path.parent() {
            config.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, TranslateError> {
        toml::from_str(toml_str)
            .map_err(|e| TranslateError::Config(format!("TOML parse error: {e}")))
    }

    /// Serializes configuration to TOML.
    pub fn to_toml(&self) -> Result<String, TranslateError> {
        toml::to_string_pretty(self)
            .map_err(|e| TranslateError::Config(format!("TOML serialize error: {e}")))
    }

    /// Makes every relative path absolute with respect to `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for path in [
            &mut self.architecture,
            &mut self.weights,
            &mut self.output_dir,
        ] {
            if path.is_relative() {
                let joined = base.join(&*path);
                *path = joined;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_toml() {
        let toml = r#"
architecture = "model/architecture.json"
weights = "model/weights.safetensors"
output_dir = "build/engine"
io_type = "io_parallel"
"#;
        let c = TranslateConfig::from_toml(toml).unwrap();
        assert_eq!(c.architecture, PathBuf::from("model/architecture.json"));
        assert_eq!(c.weights, PathBuf::from("model/weights.safetensors"));
        assert_eq!(c.output_dir, PathBuf::from("build/engine"));
        assert_eq!(c.io_type, IoType::IoParallel);
    }

    #[test]
    fn test_invalid_io_type_rejected() {
        let toml = r#"
architecture = "a.json"
weights = "w.safetensors"
output_dir = "out"
io_type = "io_streaming"
"#;
        assert!(matches!(
            TranslateConfig::from_toml(toml),
            Err(TranslateError::Config(_))
        ));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let c = TranslateConfig {
            architecture: "a.json".into(),
            weights: "w.safetensors".into(),
            output_dir: "out".into(),
            io_type: IoType::IoSerial,
        };
        let toml = c.to_toml().unwrap();
        let back = TranslateConfig::from_toml(&toml).unwrap();
        assert_eq!(back.io_type, IoType::IoSerial);
        assert_eq!(back.architecture, c.architecture);
    }

    #[test]
    fn test_resolve_relative_paths() {
        let mut c = TranslateConfig {
            architecture: "a.json".into(),
            weights: "/abs/w.safetensors".into(),
            output_dir: "out".into(),
            io_type: IoType::IoParallel,
        };
        c.resolve_relative_to(Path::new("/project"));
        assert_eq!(c.architecture, PathBuf::from("/project/a.json"));
        // Absolute paths are left alone.
        assert_eq!(c.weights, PathBuf::from("/abs/w.safetensors"));
        assert_eq!(c.output_dir, PathBuf::from("/project/out"));
    }

    #[test]
    fn test_io_type_display() {
        assert_eq!(IoType::IoParallel.to_string(), "io_parallel");
        assert_eq!(IoType::IoSerial.to_string(), "io_serial");
    }
}
