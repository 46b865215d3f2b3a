use std::sync::Arc;

use ndarray::Array2;
use rustdct::{DctPlanner, TransformType2And3};

use crate::error::{Error, Result};

/// Separable 2D DCT-II over a square matrix of fixed size.
///
/// Uses rustdct's unnormalised scaling, `X[k] = sum x[n] cos(pi (n + 0.5) k / N)`
/// along each axis.
pub struct Dct2d {
    size: usize,
    dct: Arc<dyn TransformType2And3<f64>>,
}

impl Dct2d {
    /// Plan a transform for `size x size` matrices
    pub fn new(size: usize) -> Self {
        let mut planner = DctPlanner::new();
        Self {
            size,
            dct: planner.plan_dct2(size),
        }
    }

    /// Transform `input` in the frequency domain.
    ///
    /// The output keeps the input orientation: `out[[v, u]]` is vertical
    /// frequency `v` and horizontal frequency `u`, so `out[[0, 0]]` is the DC term.
    pub fn transform(&self, input: Array2<f64>) -> Result<Array2<f64>> {
        if input.dim() != (self.size, self.size) {
            return Err(Error::Dimension(format!(
                "expected {0}x{0} matrix, got {1}x{2}",
                self.size,
                input.nrows(),
                input.ncols()
            )));
        }

        // Rows, then columns via a transpose, then back
        let rows = self.transform_rows(input.as_standard_layout().into_owned())?;
        let cols = self.transform_rows(rows.t().as_standard_layout().into_owned())?;
        Ok(cols.t().as_standard_layout().into_owned())
    }

    fn transform_rows(&self, mut matrix: Array2<f64>) -> Result<Array2<f64>> {
        for mut row in matrix.rows_mut() {
            let buffer = row
                .as_slice_mut()
                .ok_or_else(|| Error::Dimension("matrix row is not contiguous".to_string()))?;
            self.dct.process_dct2(buffer);
        }
        Ok(matrix)
    }
}
