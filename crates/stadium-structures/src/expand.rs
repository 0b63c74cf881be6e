//! Expansion of layer grids into structured hexahedral sub-grids.
//!
//! Every grid cell of a layer is filled with its block type's sub-grid:
//! `(d0 + 1) * (d1 + 1) * (d2 + 1)` points and `d0 * d1 * d2` hexahedra.
//! Points are never shared between neighboring blocks.
//!
//! All coordinates produced here are in unit stadium space, where the whole
//! stack spans `[0, 1]` along x and y. Callers scale them to world space.

#![allow(clippy::cast_precision_loss)]

use glam::{UVec3, Vec3};
use stadium_core::{Aabb, Result, StadiumError};

use crate::definition::LayerType;

/// Point ids of one hexahedron.
///
/// Corners are in binary-counting order of their `(dx, dy, dz)` offsets, see
/// [`HEX_CORNERS`].
pub type Hexahedron = [u32; 8];

/// Offset of each hexahedron corner within its sub-grid cell.
pub const HEX_CORNERS: [UVec3; 8] = [
    UVec3::new(0, 0, 0),
    UVec3::new(0, 0, 1),
    UVec3::new(0, 1, 0),
    UVec3::new(0, 1, 1),
    UVec3::new(1, 0, 0),
    UVec3::new(1, 0, 1),
    UVec3::new(1, 1, 0),
    UVec3::new(1, 1, 1),
];

/// Points and hexahedra of one expanded layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerMesh {
    /// Points in unit stadium space.
    pub points: Vec<Vec3>,
    /// Hexahedra; ids index into `points`.
    pub hexes: Vec<Hexahedron>,
}

impl LayerMesh {
    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Returns the number of hexahedra.
    pub fn num_cells(&self) -> usize {
        self.hexes.len()
    }

    /// Returns true if the layer produced no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Unit-space box occupied by layer `layer` out of `num_layers`.
///
/// The z range is cut into `num_layers - 1` slabs: layer `l` starts at
/// `l / (num_layers - 1)` and is `1 / (num_layers - 1)` deep, so the top
/// layer reaches past 1. A lone layer spans the full unit extent.
pub fn layer_extent(layer: usize, num_layers: usize) -> Aabb {
    if num_layers <= 1 {
        return Aabb::unit();
    }
    let slabs = (num_layers - 1) as f32;
    let offset_z = layer as f32 / slabs;
    let depth = 1.0 / slabs;
    Aabb::new(
        Vec3::new(0.0, 0.0, offset_z),
        Vec3::new(1.0, 1.0, offset_z + depth),
    )
}

/// Expands every grid cell of `layer_type` inside `extent`.
///
/// Row `i` of a `rows x cols` grid covers `1 / rows` of the extent along x and
/// column `j` covers `1 / cols` along y; each cell spans the full z depth.
pub fn expand_layer(
    layer_type: &LayerType,
    block_sizes: &[UVec3],
    extent: &Aabb,
) -> Result<LayerMesh> {
    let size = extent.size();
    let elem_size = Vec3::new(
        size.x / layer_type.rows() as f32,
        size.y / layer_type.cols() as f32,
        size.z,
    );

    let mut mesh = LayerMesh::default();
    for (i, j, block_type) in layer_type.iter() {
        let dims = *block_sizes.get(block_type as usize).ok_or_else(|| {
            StadiumError::MalformedDefinition(format!(
                "grid cell ({i}, {j}) references block type {block_type}, but only {} are defined",
                block_sizes.len()
            ))
        })?;
        let min = extent.min + Vec3::new(i as f32 * elem_size.x, j as f32 * elem_size.y, 0.0);
        expand_block(&mut mesh, &Aabb::new(min, min + elem_size), dims)?;
    }
    Ok(mesh)
}

/// Appends the sub-grid of one block, spanning `cell`.
///
/// Point `(a, b, c)` of the block gets id
/// `first + a * (d1 + 1) * (d2 + 1) + b * (d2 + 1) + c`.
pub fn expand_block(mesh: &mut LayerMesh, cell: &Aabb, dims: UVec3) -> Result<()> {
    if dims.cmpeq(UVec3::ZERO).any() {
        return Err(StadiumError::MalformedDefinition(format!(
            "block dimensions ({}, {}, {}) must all be positive",
            dims.x, dims.y, dims.z
        )));
    }

    let first = mesh.points.len();
    let requested = [dims.x, dims.y, dims.z]
        .iter()
        .fold(1usize, |n, &d| n.saturating_mul((d as usize).saturating_add(1)));
    let end = first.saturating_add(requested);
    if u32::try_from(end).is_err() {
        return Err(StadiumError::IndexOverflow {
            what: "points",
            count: end,
        });
    }
    mesh.points.reserve(requested);

    let dims_f = dims.as_vec3();
    for a in 0..=dims.x {
        for b in 0..=dims.y {
            for c in 0..=dims.z {
                mesh.points.push(cell.lerp(UVec3::new(a, b, c).as_vec3() / dims_f));
            }
        }
    }

    // Checked above: every id up to `end` fits in a u32.
    #[allow(clippy::cast_possible_truncation)]
    let first = first as u32;
    let nodes = dims + UVec3::ONE;
    let stride = UVec3::new(nodes.y * nodes.z, nodes.z, 1);
    for a in 0..dims.x {
        for b in 0..dims.y {
            for c in 0..dims.z {
                let base = UVec3::new(a, b, c);
                mesh.hexes
                    .push(HEX_CORNERS.map(|corner| first + (base + corner).dot(stride)));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<u32>>) -> LayerType {
        LayerType::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_layer_spans_unit_extent() {
        assert_eq!(layer_extent(0, 1), Aabb::unit());
    }

    #[test]
    fn test_layer_slabs() {
        let extents: Vec<Aabb> = (0..3).map(|l| layer_extent(l, 3)).collect();
        assert_eq!(extents[0].min.z, 0.0);
        assert_eq!(extents[0].max.z, 0.5);
        assert_eq!(extents[1].min.z, 0.5);
        assert_eq!(extents[2].min.z, 1.0);
        assert_eq!(extents[2].max.z, 1.5);
        for extent in &extents {
            assert_eq!(extent.min.x, 0.0);
            assert_eq!(extent.max.y, 1.0);
        }
    }

    #[test]
    fn test_unit_block() {
        let mesh = expand_layer(&grid(vec![vec![0]]), &[UVec3::ONE], &Aabb::unit()).unwrap();

        assert_eq!(mesh.num_points(), 8);
        assert_eq!(mesh.hexes, vec![[0, 1, 2, 3, 4, 5, 6, 7]]);
        for (k, corner) in HEX_CORNERS.iter().enumerate() {
            assert_eq!(mesh.points[k], corner.as_vec3());
        }
    }

    #[test]
    fn test_adjacent_blocks_do_not_share_points() {
        let block_sizes = [UVec3::new(1, 1, 1), UVec3::new(2, 1, 1)];
        let mesh = expand_layer(&grid(vec![vec![0, 1]]), &block_sizes, &Aabb::unit()).unwrap();

        assert_eq!(mesh.num_points(), 8 + 12);
        assert_eq!(mesh.num_cells(), 1 + 2);

        // The shared face y = 0.5 appears once per block.
        let on_seam = mesh.points.iter().filter(|p| p.y == 0.5).count();
        assert_eq!(on_seam, 4 + 6);

        // Second block starts right after the first.
        assert_eq!(mesh.hexes[1][0], 8);
        assert_eq!(mesh.points[8], Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(mesh.points[19], Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_structured_indexing() {
        let dims = UVec3::new(2, 3, 4);
        let mut mesh = LayerMesh::default();
        expand_block(&mut mesh, &Aabb::unit(), dims).unwrap();

        assert_eq!(mesh.num_points(), 3 * 4 * 5);
        assert_eq!(mesh.num_cells(), 2 * 3 * 4);

        // Last cell, last corner is the last point.
        assert_eq!(mesh.hexes.last().unwrap()[7] as usize, mesh.num_points() - 1);

        for hex in &mesh.hexes {
            for (k, corner) in HEX_CORNERS.iter().enumerate() {
                let offset = mesh.points[hex[k] as usize] - mesh.points[hex[0] as usize];
                let expected = corner.as_vec3() / dims.as_vec3();
                assert!((offset - expected).length() < 1e-6);
            }
        }
    }

    #[test]
    fn test_grid_cell_placement() {
        let extent = layer_extent(1, 2);
        let layer = grid(vec![vec![0, 0], vec![0, 0]]);
        let mesh = expand_layer(&layer, &[UVec3::ONE], &extent).unwrap();

        assert_eq!(mesh.num_cells(), 4);
        // Row 1, column 0 starts at x = 0.5, y = 0 on top of the first slab.
        let origin = mesh.points[mesh.hexes[2][0] as usize];
        assert_eq!(origin, Vec3::new(0.5, 0.0, 1.0));
        let far = mesh.points[mesh.hexes[2][7] as usize];
        assert_eq!(far, Vec3::new(1.0, 0.5, 2.0));
    }

    #[test]
    fn test_unknown_block_type() {
        let err = expand_layer(&grid(vec![vec![2]]), &[UVec3::ONE], &Aabb::unit()).unwrap_err();
        assert!(matches!(err, StadiumError::MalformedDefinition(_)));
    }

    #[test]
    fn test_empty_grid() {
        let mesh = expand_layer(&grid(Vec::new()), &[UVec3::ONE], &Aabb::unit()).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.num_cells(), 0);
    }

    #[test]
    fn test_index_overflow() {
        let mut mesh = LayerMesh::default();
        let dims = UVec3::new(1, 1, u32::MAX / 2);
        let err = expand_block(&mut mesh, &Aabb::unit(), dims).unwrap_err();
        match err {
            StadiumError::IndexOverflow { what, count } => {
                assert_eq!(what, "points");
                assert_eq!(count, 4 * (u32::MAX as usize / 2 + 1));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(mesh.is_empty());
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let layer = grid(vec![vec![0]]);
        let err = expand_layer(&layer, &[UVec3::new(1, 0, 1)], &Aabb::unit()).unwrap_err();
        assert!(matches!(err, StadiumError::MalformedDefinition(_)), "{err}");

        let mut mesh = LayerMesh::default();
        assert!(expand_block(&mut mesh, &Aabb::unit(), UVec3::new(2, 2, 0)).is_err());
        assert!(mesh.is_empty());
    }
}
