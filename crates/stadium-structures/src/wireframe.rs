//! Wireframe geometry for drawing an expanded stadium as lines.

use glam::Vec3;
use stadium_core::{Result, WireframeOptions};

use crate::cell_complex::to_u32;
use crate::definition::Stadium;

/// Corner pairs forming the 12 edges of a hexahedron.
///
/// Corners follow [`crate::expand::HEX_CORNERS`]; each pair differs along a
/// single axis.
pub const HEX_EDGE_STENCIL: [[usize; 2]; 12] = [
    // along z
    [0, 1],
    [2, 3],
    [4, 5],
    [6, 7],
    // along y
    [0, 2],
    [1, 3],
    [4, 6],
    [5, 7],
    // along x
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Per-point positions and colors plus a line index list, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WireframeMesh {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
    line_indices: Vec<u32>,
}

impl WireframeMesh {
    /// Expands every layer of `stadium` and collects the edges of each hexahedron.
    pub fn from_stadium(stadium: &Stadium, options: &WireframeOptions) -> Result<Self> {
        let mut wireframe = Self::default();
        for layer in 0..stadium.num_layers() {
            let mesh = stadium.expand_layer(layer)?;
            to_u32(wireframe.positions.len() + mesh.num_points(), "points")?;
            let offset = to_u32(wireframe.positions.len(), "points")?;

            for &p in &mesh.points {
                wireframe.positions.push(p * options.length_scale);
                wireframe.colors.push(point_color(p, options));
            }
            for hex in &mesh.hexes {
                for [a, b] in HEX_EDGE_STENCIL {
                    wireframe.line_indices.push(offset + hex[a]);
                    wireframe.line_indices.push(offset + hex[b]);
                }
            }
        }
        log::debug!(
            "built wireframe: {} points, {} edges",
            wireframe.num_points(),
            wireframe.num_edges()
        );
        Ok(wireframe)
    }

    /// Returns the number of points.
    pub fn num_points(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of line segments.
    pub fn num_edges(&self) -> usize {
        self.line_indices.len() / 2
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Flattened segment endpoints, two ids per edge.
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Iterates segments as `[tail, tip]` pairs.
    pub fn edges(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        self.line_indices.chunks_exact(2).map(|e| [e[0], e[1]])
    }
}

/// Colors a unit-space point by its position once past the threshold.
fn point_color(p: Vec3, options: &WireframeOptions) -> Vec3 {
    if p.x + p.y + p.z > options.color_threshold {
        p
    } else {
        options.base_color
    }
}
