// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Rendering and persistence of array literal definitions.

use crate::{ArrayRole, ExportError};
use std::path::Path;
use tensor_core::Tensor;

/// Fractional digits used for every rendered element.
///
/// Fixed notation at this width keeps the literal lossless ahead of the
/// downstream fixed-point conversion, independent of the source precision.
/// TODO: confirm against the firmware fixed-point width before changing.
const FRACTION_DIGITS: usize = 32;

/// Renders one array to its literal definition.
///
/// Returns the rendered text and the count of elements exactly equal to
/// zero. Both the element list and the zero-count come from the same
/// row-major enumeration, so the reported count always matches the literal.
pub fn render_array(name: &str, tensor: &Tensor) -> Result<(String, usize), ExportError> {
    let role = ArrayRole::from_name(name).ok_or_else(|| ExportError::UnknownRole {
        name: name.to_string(),
    })?;

    let values = tensor.values();
    let (min, max) = match (tensor.min(), tensor.max()) {
        (Some(min), Some(max)) => (min, max),
        _ => {
            return Err(ExportError::Empty {
                name: name.to_string(),
            })
        }
    };
    let n_zeros = tensor.num_zeros();

    let mut out = String::new();
    out.push_str(&format!("// Tensor shape: {}\n", tensor.shape()));
    out.push_str(&format!("// Min: {min}\n"));
    out.push_str(&format!("// Max: {max}\n"));
    out.push_str(&format!("// Zero count: {n_zeros}\n"));
    out.push('\n');

    out.push_str(&format!("{} {}", role.c_type(), name));
    // The literal syntax has no native multi-dimensional form beyond two
    // axes, so higher-rank tensors are declared flat; the comment above
    // preserves the original shape.
    if tensor.shape().rank() >= 3 {
        out.push_str(&format!("[{}]", tensor.num_elements()));
    } else {
        for d in tensor.shape().dims() {
            out.push_str(&format!("[{d}]"));
        }
    }

    out.push_str(" = {");
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&format!("{v:.prec$}", prec = FRACTION_DIGITS));
    }
    out.push_str("};\n");

    Ok((out, n_zeros))
}

/// Renders an array and writes it to `<dir>/<name>.h`.
///
/// Returns the zero-count of the array. The destination directory must
/// already exist; callers create it once, idempotently, before the first
/// write.
pub fn write_array(name: &str, tensor: &Tensor, dir: &Path) -> Result<usize, ExportError> {
    let (text, n_zeros) = render_array(name, tensor)?;

    let path = dir.join(format!("{name}.h"));
    std::fs::write(&path, text).map_err(|e| ExportError::Io {
        name: name.to_string(),
        source: e,
    })?;

    tracing::debug!(
        "wrote '{}' ({} elements, {} zeros)",
        path.display(),
        tensor.num_elements(),
        n_zeros,
    );
    Ok(n_zeros)
}
