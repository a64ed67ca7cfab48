//! Deviation of an affine transform from the identity.
//!
//! The metric bounds the largest singular value of `D = M - I` without an
//! eigendecomposition: `Q = DᵀD` is symmetric positive-semidefinite, so its
//! largest eigenvalue is bounded by the Gershgorin circle theorem via the
//! maximum absolute row sum, and the square root of that bound measures the
//! size of `D` itself. The result can be compared against a caller-supplied
//! tolerance to decide whether a transform is effectively the identity.

use log::debug;
use nalgebra::Matrix4;
use std::path::Path;

use crate::aff12::Aff12;
use crate::error::Aff12Error;
use crate::table::Table;

/// Gershgorin-bound estimate of how far `aff` is from the identity
/// transform with zero translation.
pub fn deviation_from_identity(aff: &Aff12) -> f64 {
    // Embed the 3x4 block into a 4x4 with a zero fourth row, then subtract
    // the identity on the first three diagonal entries only. The (3,3)
    // entry is left alone: the embedded fourth row is zero, not [0,0,0,1].
    let mut d = Matrix4::zeros();
    d.fixed_view_mut::<3, 4>(0, 0).copy_from(aff.matrix());
    for i in 0..3 {
        d[(i, i)] -= 1.0;
    }

    let q = d.transpose() * d;

    let mut max_sum = 0.0f64;
    for i in 0..4 {
        let sum: f64 = q.row(i).iter().map(|v| v.abs()).sum();
        max_sum = max_sum.max(sum);
    }
    max_sum.sqrt()
}

/// Validating wrapper over [`deviation_from_identity`] for runtime-shaped
/// input: the rows must form exactly a 3x4 matrix.
pub fn deviation_from_identity_rows(rows: &[Vec<f64>]) -> Result<f64, Aff12Error> {
    Ok(deviation_from_identity(&Aff12::from_rows(rows)?))
}

/// Load an aff12 parameter file and compute its deviation from identity.
///
/// Accepts the two standard layouts: MATRIX (3 lines of 4 columns) and
/// ONELINE (a single line of 12 values, reshaped row-major into 3x4). Any
/// other shape is an [`Aff12Error::InputFormat`] naming the file and the
/// observed dimensions.
pub fn deviation_from_identity_file(path: &Path) -> Result<f64, Aff12Error> {
    let mut table = Table::read(path)?;
    table.transpose();

    let (nrows, ncols) = (table.nrows(), table.ncols());
    debug!(
        "{}: {}x{} parameter table after transposition",
        path.display(),
        nrows,
        ncols
    );

    let aff = if nrows == 3 && ncols == 4 {
        Aff12::from_rows(table.rows())?
    } else if nrows == 1 && ncols == 12 {
        let mut flat = [0.0f64; 12];
        flat.copy_from_slice(table.row(0));
        Aff12::from_flat(&flat)
    } else {
        return Err(Aff12Error::InputFormat {
            path: path.to_path_buf(),
            rows: nrows,
            cols: ncols,
        });
    };

    Ok(deviation_from_identity(&aff))
}
