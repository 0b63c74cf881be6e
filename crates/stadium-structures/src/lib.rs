//! Stadium definitions and the hexahedral structures expanded from them.
//!
//! # Structures
//!
//! - [`Stadium`] - block types, layer-type grids, and the layer stack
//! - [`LayerMesh`] - points and hexahedra of one expanded layer
//! - [`CellComplex`] - every layer assembled, with cell boxes and fields
//! - [`WireframeMesh`] - positions, colors, and edge lines for drawing

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod cell_complex;
pub mod definition;
pub mod expand;
pub mod wireframe;

pub use cell_complex::{CellComplex, CellComplexBuilder, HEX_POINT_COUNT};
pub use definition::{read_stadium_definition, LayerType, Stadium};
pub use expand::{expand_block, expand_layer, layer_extent, Hexahedron, LayerMesh, HEX_CORNERS};
pub use wireframe::{WireframeMesh, HEX_EDGE_STENCIL};
