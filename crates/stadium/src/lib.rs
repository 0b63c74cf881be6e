//! stadium-rs: turns stadium definitions into hexahedral cell complexes.
//!
//! A stadium is a stack of layers. Each layer uses a rectangular grid of block
//! types, and each block type says how finely its grid cell is cut into
//! hexahedra. This crate reads such a definition, expands it into points and
//! cells, and writes the result in a compact binary format.
//!
//! # Quick Start
//!
//! ```no_run
//! use stadium::*;
//!
//! fn main() -> Result<()> {
//!     let stadium = read_stadium_definition("assets/stadium.def")?;
//!     let complex = CellComplex::from_stadium(&stadium, &GeneratorOptions::default())?;
//!     write_cell_complex("stadium.bin", &complex)?;
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - [`read_stadium_definition`] parses the text definition into a [`Stadium`]
//! - [`CellComplex::from_stadium`] expands every layer and computes cell boxes
//! - [`write_cell_complex`] serializes the complex
//!
//! [`WireframeMesh::from_stadium`] runs the same expansion for line rendering.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]

mod binary;

use std::path::Path;

pub use binary::{encode_cell_complex, section_counts, write_cell_complex, NUM_SECTIONS};

// Re-export core types
pub use stadium_core::{
    Aabb, GeneratorOptions, Result, StadiumError, UVec3, Vec3, WireframeOptions,
};

// Re-export structures
pub use stadium_structures::{
    expand_layer, layer_extent, read_stadium_definition, CellComplex, Hexahedron, LayerMesh,
    LayerType, Stadium, WireframeMesh, HEX_CORNERS, HEX_EDGE_STENCIL, HEX_POINT_COUNT,
};

/// Sizes of a finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub num_points: usize,
    pub num_cells: usize,
}

/// Reads `definition`, expands it, and writes the cell complex to `output`.
pub fn convert(
    definition: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &GeneratorOptions,
) -> Result<ConversionSummary> {
    let stadium = read_stadium_definition(definition)?;
    let complex = CellComplex::from_stadium(&stadium, options)?;
    write_cell_complex(output, &complex)?;
    Ok(ConversionSummary {
        num_points: complex.num_points(),
        num_cells: complex.num_cells(),
    })
}

/// Installs the `env_logger` backend, defaulting to `info` when `RUST_LOG` is unset.
///
/// Calling this more than once is harmless.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
