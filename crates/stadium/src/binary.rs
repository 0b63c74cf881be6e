//! Binary serialization of cell complexes.
//!
//! The file starts with seven decimal counts, one per line:
//!
//! ```text
//! <cell boxes>
//! <points>
//! <cell vectors>
//! <cell point entries>
//! <cell point begin indices>
//! <point vectors>
//! <cell volumes>
//! ```
//!
//! followed directly by the seven arrays in native byte order, in this
//! order: cell boxes (6 x f32), points (3 x f32), cell vectors (3 x f32),
//! cell point entries (u32), begin indices (u32), point vectors (3 x f32),
//! and cell volumes (f32).

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use stadium_core::{Result, StadiumError};
use stadium_structures::CellComplex;

/// Number of arrays (and count lines) in a serialized cell complex.
pub const NUM_SECTIONS: usize = 7;

/// Element counts of the seven arrays, in file order.
pub fn section_counts(complex: &CellComplex) -> [usize; NUM_SECTIONS] {
    [
        complex.cell_boxes().len(),
        complex.num_points(),
        complex.cell_vectors().len(),
        complex.cell_points().len(),
        complex.cell_points_beg_indices().len(),
        complex.point_vectors().len(),
        complex.cell_volumes().len(),
    ]
}

/// Writes the count header and the raw arrays to `out`.
pub fn encode_cell_complex<W: Write>(out: &mut W, complex: &CellComplex) -> io::Result<()> {
    for count in section_counts(complex) {
        writeln!(out, "{count}")?;
    }

    out.write_all(bytemuck::cast_slice(complex.cell_boxes()))?;
    out.write_all(bytemuck::cast_slice(complex.points()))?;
    out.write_all(bytemuck::cast_slice(complex.cell_vectors()))?;
    out.write_all(bytemuck::cast_slice(complex.cell_points()))?;
    out.write_all(bytemuck::cast_slice(complex.cell_points_beg_indices()))?;
    out.write_all(bytemuck::cast_slice(complex.point_vectors()))?;
    out.write_all(bytemuck::cast_slice(complex.cell_volumes()))?;
    Ok(())
}

/// Writes `complex` to a new file at `path`, replacing any existing file.
pub fn write_cell_complex(path: impl AsRef<Path>, complex: &CellComplex) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| StadiumError::OutputOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("saving {}", path.display());

    let mut out = BufWriter::new(file);
    encode_cell_complex(&mut out, complex)?;
    out.flush()?;
    Ok(())
}
