//! The cell complex assembled from all expanded layers.
//!
//! # Overview
//!
//! A [`CellComplex`] holds seven parallel arrays:
//! - `points` - world-space positions, indexed by point id
//! - `cell_points` - flattened connectivity; each cell is its point count
//!   followed by that many point ids
//! - `cell_points_beg_indices` - offset of each cell's count entry in `cell_points`
//! - `cell_boxes` - tight bounding box of each cell's points
//! - `cell_vectors` / `point_vectors` - a constant direction per cell / point
//! - `cell_volumes` - one scalar per cell, currently always zero
//!
//! Every cell produced from a stadium is a hexahedron, so each cell occupies
//! nine entries of `cell_points`.

use glam::Vec3;
use stadium_core::{Aabb, GeneratorOptions, Result, StadiumError};

use crate::definition::Stadium;
use crate::expand::{Hexahedron, LayerMesh};

/// Number of point ids stored for every hexahedral cell.
pub const HEX_POINT_COUNT: u32 = 8;

/// Points, hexahedral cells, and per-cell/per-point fields of an expanded stadium.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellComplex {
    points: Vec<Vec3>,
    cell_points: Vec<u32>,
    cell_points_beg_indices: Vec<u32>,
    cell_boxes: Vec<Aabb>,
    cell_vectors: Vec<Vec3>,
    point_vectors: Vec<Vec3>,
    cell_volumes: Vec<f32>,
}

impl CellComplex {
    /// Expands every layer of `stadium` and assembles the complex.
    pub fn from_stadium(stadium: &Stadium, options: &GeneratorOptions) -> Result<Self> {
        let mut builder = CellComplexBuilder::new(options.clone());
        for layer in 0..stadium.num_layers() {
            let mesh = stadium.expand_layer(layer)?;
            log::debug!(
                "layer {layer}: {} points, {} cells",
                mesh.num_points(),
                mesh.num_cells()
            );
            builder.append(&mesh)?;
        }
        let complex = builder.finish();
        log::info!(
            "built cell complex: {} points, {} cells",
            complex.num_points(),
            complex.num_cells()
        );
        Ok(complex)
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of cells.
    pub fn num_cells(&self) -> usize {
        self.cell_points_beg_indices.len()
    }

    /// Returns true if the complex has no cells.
    pub fn is_empty(&self) -> bool {
        self.cell_points_beg_indices.is_empty()
    }

    /// Point ids of cell `k`.
    ///
    /// # Panics
    /// Panics if `k >= num_cells()`.
    pub fn cell(&self, k: usize) -> &[u32] {
        let beg = self.cell_points_beg_indices[k] as usize;
        let count = self.cell_points[beg] as usize;
        &self.cell_points[beg + 1..beg + 1 + count]
    }

    /// Iterates the point ids of every cell.
    pub fn cells(&self) -> impl Iterator<Item = &[u32]> + '_ {
        (0..self.num_cells()).map(|k| self.cell(k))
    }

    /// Returns the axis-aligned bounding box of all points.
    ///
    /// Returns `None` if the complex has no points.
    pub fn bounding_box(&self) -> Option<Aabb> {
        Aabb::from_points(self.points.iter().copied())
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn cell_points(&self) -> &[u32] {
        &self.cell_points
    }

    pub fn cell_points_beg_indices(&self) -> &[u32] {
        &self.cell_points_beg_indices
    }

    pub fn cell_boxes(&self) -> &[Aabb] {
        &self.cell_boxes
    }

    pub fn cell_vectors(&self) -> &[Vec3] {
        &self.cell_vectors
    }

    pub fn point_vectors(&self) -> &[Vec3] {
        &self.point_vectors
    }

    pub fn cell_volumes(&self) -> &[f32] {
        &self.cell_volumes
    }
}

/// Accumulates layer meshes into a [`CellComplex`].
#[derive(Debug)]
pub struct CellComplexBuilder {
    options: GeneratorOptions,
    points: Vec<Vec3>,
    cell_points: Vec<u32>,
    cell_points_beg_indices: Vec<u32>,
}

impl CellComplexBuilder {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            points: Vec::new(),
            cell_points: Vec::new(),
            cell_points_beg_indices: Vec::new(),
        }
    }

    /// Appends a unit-space layer mesh, scaling its points to world space.
    pub fn append(&mut self, mesh: &LayerMesh) -> Result<()> {
        let offset = to_u32(self.points.len(), "points")?;
        to_u32(self.points.len() + mesh.num_points(), "points")?;
        // Each cell takes its count entry plus eight ids.
        to_u32(
            self.cell_points.len() + mesh.num_cells() * (HEX_POINT_COUNT as usize + 1),
            "cell point entries",
        )?;

        let scale = self.options.length_scale;
        self.points.extend(mesh.points.iter().map(|&p| p * scale));

        self.cell_points_beg_indices.reserve(mesh.num_cells());
        self.cell_points
            .reserve(mesh.num_cells() * (HEX_POINT_COUNT as usize + 1));
        for hex in &mesh.hexes {
            self.push_hex(hex, offset)?;
        }
        Ok(())
    }

    fn push_hex(&mut self, hex: &Hexahedron, offset: u32) -> Result<()> {
        let beg = to_u32(self.cell_points.len(), "cell point entries")?;
        self.cell_points_beg_indices.push(beg);
        self.cell_points.push(HEX_POINT_COUNT);
        self.cell_points.extend(hex.iter().map(|&id| offset + id));
        Ok(())
    }

    /// Computes cell boxes and fills the vector and volume fields.
    pub fn finish(self) -> CellComplex {
        let Self {
            options,
            points,
            cell_points,
            cell_points_beg_indices,
        } = self;

        let cell_boxes = cell_points_beg_indices
            .iter()
            .map(|&beg| {
                let beg = beg as usize;
                let count = cell_points[beg] as usize;
                let mut aabb = Aabb::EMPTY;
                for &id in &cell_points[beg + 1..=beg + count] {
                    aabb.extend(points[id as usize]);
                }
                aabb
            })
            .collect();

        let num_cells = cell_points_beg_indices.len();
        CellComplex {
            cell_vectors: vec![options.cell_vector; num_cells],
            point_vectors: vec![options.point_vector; points.len()],
            // Volumes are a zero placeholder; nothing derives them yet.
            cell_volumes: vec![0.0; num_cells],
            cell_boxes,
            points,
            cell_points,
            cell_points_beg_indices,
        }
    }
}

pub(crate) fn to_u32(count: usize, what: &'static str) -> Result<u32> {
    u32::try_from(count).map_err(|_| StadiumError::IndexOverflow { what, count })
}
