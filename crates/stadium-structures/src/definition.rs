//! Stadium definitions and the reader for their text format.
//!
//! # Format
//!
//! A definition is a stream of whitespace-separated non-negative integers;
//! line breaks carry no meaning.
//!
//! ```text
//! num_blocks
//! dx dy dz            (once per block type)
//! num_layer_types
//! rows cols           (once per layer type, followed by rows * cols
//! b b b ...            block-type indices in row-major order)
//! num_layers
//! t t t ...           (one layer-type index per physical layer, bottom first)
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::str::FromStr;

use glam::UVec3;
use stadium_core::{Aabb, Result, StadiumError};

use crate::expand::{expand_layer, layer_extent, LayerMesh};

/// A reusable rectangular grid of block-type indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerType {
    rows: usize,
    cols: usize,
    blocks: Vec<u32>, // row-major, rows * cols entries
}

impl LayerType {
    /// Creates a layer type from its dimensions and row-major block indices.
    pub fn new(rows: usize, cols: usize, blocks: Vec<u32>) -> Result<Self> {
        if rows.checked_mul(cols) != Some(blocks.len()) {
            return Err(StadiumError::MalformedDefinition(format!(
                "a {rows}x{cols} layer grid needs {} block indices, got {}",
                rows.saturating_mul(cols),
                blocks.len()
            )));
        }
        Ok(Self { rows, cols, blocks })
    }

    /// Creates a layer type from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(StadiumError::MalformedDefinition(format!(
                "layer grid row {i} has {} columns, expected {cols}",
                row.len()
            )));
        }
        let num_rows = rows.len();
        Self::new(num_rows, cols, rows.into_iter().flatten().collect())
    }

    /// Number of grid rows (along x).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns (along y).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Iterates `(row, col, block_type)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        let cols = self.cols.max(1);
        self.blocks
            .iter()
            .enumerate()
            .map(move |(k, &b)| (k / cols, k % cols, b))
    }
}

/// A parsed stadium: block types, layer-type grids, and the layer stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stadium {
    block_sizes: Vec<UVec3>,
    layer_types: Vec<LayerType>,
    layers: Vec<usize>,
}

impl Stadium {
    /// Creates a stadium, checking that every index and dimension is usable.
    pub fn new(
        block_sizes: Vec<UVec3>,
        layer_types: Vec<LayerType>,
        layers: Vec<usize>,
    ) -> Result<Self> {
        if let Some((b, dims)) = block_sizes
            .iter()
            .enumerate()
            .find(|(_, d)| d.cmpeq(UVec3::ZERO).any())
        {
            return Err(StadiumError::MalformedDefinition(format!(
                "block type {b} has a zero dimension ({}, {}, {})",
                dims.x, dims.y, dims.z
            )));
        }

        for (t, layer_type) in layer_types.iter().enumerate() {
            if let Some((i, j, b)) = layer_type
                .iter()
                .find(|&(_, _, b)| b as usize >= block_sizes.len())
            {
                return Err(StadiumError::MalformedDefinition(format!(
                    "layer type {t} references block type {b} at ({i}, {j}), but only {} are defined",
                    block_sizes.len()
                )));
            }
        }

        if let Some((l, &t)) = layers
            .iter()
            .enumerate()
            .find(|(_, t)| **t >= layer_types.len())
        {
            return Err(StadiumError::MalformedDefinition(format!(
                "layer {l} references layer type {t}, but only {} are defined",
                layer_types.len()
            )));
        }

        Ok(Self {
            block_sizes,
            layer_types,
            layers,
        })
    }

    /// Parses a definition from its text form.
    pub fn parse(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);

        let num_blocks = tokens.next_usize("number of block types")?;
        let mut block_sizes = Vec::new();
        for b in 0..num_blocks {
            let what = format!("dimensions of block type {b}");
            let x = tokens.next_u32(&what)?;
            let y = tokens.next_u32(&what)?;
            let z = tokens.next_u32(&what)?;
            block_sizes.push(UVec3::new(x, y, z));
        }

        let num_layer_types = tokens.next_usize("number of layer types")?;
        let mut layer_types = Vec::new();
        for t in 0..num_layer_types {
            let what = format!("grid size of layer type {t}");
            let rows = tokens.next_usize(&what)?;
            let cols = tokens.next_usize(&what)?;
            let what = format!("grid of layer type {t}");
            let count = rows.checked_mul(cols).ok_or_else(|| {
                StadiumError::MalformedDefinition(format!("{rows}x{cols} grid is too large"))
            })?;
            let blocks = (0..count)
                .map(|_| tokens.next_u32(&what))
                .collect::<Result<Vec<_>>>()?;
            layer_types.push(LayerType::new(rows, cols, blocks)?);
        }

        let num_layers = tokens.next_usize("number of layers")?;
        let layers = (0..num_layers)
            .map(|_| tokens.next_usize("layer stack"))
            .collect::<Result<Vec<_>>>()?;

        let trailing = tokens.remaining();
        if trailing > 0 {
            log::warn!("ignoring {trailing} trailing tokens after the layer stack");
        }

        let stadium = Self::new(block_sizes, layer_types, layers)?;
        log::debug!(
            "parsed stadium: {} block types, {} layer types, {} layers",
            stadium.num_block_types(),
            stadium.num_layer_types(),
            stadium.num_layers()
        );
        Ok(stadium)
    }

    /// Block subdivision counts, indexed by block type.
    pub fn block_sizes(&self) -> &[UVec3] {
        &self.block_sizes
    }

    /// Layer-type grids, indexed by layer type.
    pub fn layer_types(&self) -> &[LayerType] {
        &self.layer_types
    }

    /// Layer-type index of each physical layer, bottom first.
    pub fn layers(&self) -> &[usize] {
        &self.layers
    }

    pub fn num_block_types(&self) -> usize {
        self.block_sizes.len()
    }

    pub fn num_layer_types(&self) -> usize {
        self.layer_types.len()
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// The grid used by physical layer `layer`.
    ///
    /// # Panics
    /// Panics if `layer >= num_layers()`.
    pub fn layer_type_of(&self, layer: usize) -> &LayerType {
        &self.layer_types[self.layers[layer]]
    }

    /// The unit-space box occupied by physical layer `layer`.
    pub fn layer_extent(&self, layer: usize) -> Aabb {
        layer_extent(layer, self.num_layers())
    }

    /// Expands physical layer `layer` into unit-space points and hexahedra.
    ///
    /// # Panics
    /// Panics if `layer >= num_layers()`.
    pub fn expand_layer(&self, layer: usize) -> Result<LayerMesh> {
        expand_layer(
            self.layer_type_of(layer),
            &self.block_sizes,
            &self.layer_extent(layer),
        )
    }
}

impl FromStr for Stadium {
    type Err = StadiumError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Reads a stadium definition file.
pub fn read_stadium_definition(path: impl AsRef<Path>) -> Result<Stadium> {
    let path = path.as_ref();
    let mut file = File::open(path).map_err(|source| StadiumError::DefinitionNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("reading stadium definition {}", path.display());

    let mut text = String::new();
    file.read_to_string(&mut text).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => StadiumError::MalformedDefinition(format!(
            "{} is not valid UTF-8 text",
            path.display()
        )),
        _ => StadiumError::IoError(e),
    })?;
    Stadium::parse(&text)
}

/// Whitespace token stream over a definition.
struct Tokens<'a> {
    iter: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
        }
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.iter.next().ok_or_else(|| StadiumError::UnexpectedEof {
            expected: what.to_owned(),
        })
    }

    fn next_u32(&mut self, what: &str) -> Result<u32> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| StadiumError::InvalidToken {
            token: token.to_owned(),
            expected: what.to_owned(),
        })
    }

    fn next_usize(&mut self, what: &str) -> Result<usize> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| StadiumError::InvalidToken {
            token: token.to_owned(),
            expected: what.to_owned(),
        })
    }

    fn remaining(self) -> usize {
        self.iter.count()
    }
}
