//! Configuration options for cell complex and wireframe generation.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StadiumError};

/// Options for building the serialized cell complex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Per-axis factor mapping the unit stadium extent to world coordinates.
    pub length_scale: Vec3,

    /// Value stored for every cell in the cell vector field.
    pub cell_vector: Vec3,

    /// Value stored for every point in the point vector field.
    pub point_vector: Vec3,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length_scale: Vec3::new(1.0, 1.0, 4.0),
            cell_vector: Vec3::Z,
            point_vector: Vec3::Z,
        }
    }
}

impl GeneratorOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path.as_ref())
    }
}

/// Options for building the wireframe handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WireframeOptions {
    /// Per-axis factor mapping the unit stadium extent to world coordinates.
    pub length_scale: Vec3,

    /// Points whose unit-space coordinate sum exceeds this are colored by position.
    pub color_threshold: f32,

    /// Color of the points at or below the threshold.
    pub base_color: Vec3,
}

impl Default for WireframeOptions {
    fn default() -> Self {
        Self {
            length_scale: Vec3::splat(0.25),
            color_threshold: 0.6,
            base_color: Vec3::splat(0.2),
        }
    }
}

impl WireframeOptions {
    /// Loads options from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        load_json(path.as_ref())
    }
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)?;
    let options = serde_json::from_str(&text).map_err(StadiumError::from)?;
    log::debug!("loaded options from {}", path.display());
    Ok(options)
}
