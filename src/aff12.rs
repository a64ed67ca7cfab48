//! 12-parameter affine transform type.

use nalgebra::{Matrix3, Matrix3x4, Vector3};
use serde::Serialize;

use crate::error::Aff12Error;

/// A 3x4 affine transform: 3x3 linear part plus a translation column.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Aff12(Matrix3x4<f64>);

impl Aff12 {
    /// Build from runtime-shaped rows, validating the 3x4 shape.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, Aff12Error> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows != 3 || rows.iter().any(|r| r.len() != 4) {
            return Err(Aff12Error::Shape {
                rows: nrows,
                cols: ncols,
            });
        }
        Ok(Self(Matrix3x4::from_fn(|i, j| rows[i][j])))
    }

    /// Build from 12 values in row-major order.
    pub fn from_flat(values: &[f64; 12]) -> Self {
        Self(Matrix3x4::from_row_slice(values))
    }

    /// The identity transform (identity linear part, zero translation).
    pub fn identity() -> Self {
        let mut m = Matrix3x4::zeros();
        for i in 0..3 {
            m[(i, i)] = 1.0;
        }
        Self(m)
    }

    /// The underlying 3x4 matrix.
    pub fn matrix(&self) -> &Matrix3x4<f64> {
        &self.0
    }

    /// The 3x3 linear (rotation/scale/shear) block.
    pub fn linear(&self) -> Matrix3<f64> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation column.
    pub fn translation(&self) -> Vector3<f64> {
        self.0.column(3).into_owned()
    }
}
