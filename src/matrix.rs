//! Dense weight storage.

use rand::Rng;
use rand::distributions::{Distribution, Uniform};

use crate::{Error, Result};

/// Dense `rows x cols` matrix of `f32`, stored row-major.
///
/// Rows index the source unit of a connection and columns the destination unit.
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// A `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build from a flat row-major buffer.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidShape(format!(
                "matrix dims must be > 0, got {rows}x{cols}"
            )));
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidShape(format!(
                "matrix data length {} does not match {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build from per-row vectors.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidShape(format!(
                    "matrix row {i} has len {}, expected {cols}",
                    row.len()
                )));
            }
        }
        Self::from_flat(rows.len(), cols, rows.concat())
    }

    /// A matrix with every entry drawn uniformly from `[-range, range]`.
    pub fn random_uniform<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        range: f32,
        rng: &mut R,
    ) -> Self {
        let dist = Uniform::new_inclusive(-range, range);
        let data = (0..rows * cols).map(|_| dist.sample(rng)).collect();
        Self { rows, cols, data }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[self.index(row, col)]
    }

    /// Panics if `row >= rows` or `col >= cols`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// All weights leaving source unit `row`.
    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        assert!(row < self.rows, "row {row} out of range for {} rows", self.rows);
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of range for {}x{} matrix",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn get_set_are_row_major() {
        let mut m = Matrix::zeros(2, 3);
        m.set(1, 2, 4.5);
        m.set(0, 1, -1.0);
        assert_eq!(m.get(1, 2), 4.5);
        assert_eq!(m.get(0, 1), -1.0);
        assert_eq!(m.as_slice(), &[0.0, -1.0, 0.0, 0.0, 0.0, 4.5]);
        assert_eq!(m.row(1), &[0.0, 0.0, 4.5]);
        assert_eq!((m.rows(), m.cols()), (2, 3));
    }

    #[test]
    fn from_rows_validates_shape() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 0), 3.0);

        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(Matrix::from_rows(&[]).is_err());
        assert!(Matrix::from_flat(2, 2, vec![0.0; 3]).is_err());
    }

    #[test]
    fn random_uniform_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_uniform(20, 30, 0.1, &mut rng);
        assert!(m.as_slice().iter().all(|w| (-0.1..=0.1).contains(w)));
        // Not zero-initialized.
        assert!(m.as_slice().iter().any(|&w| w != 0.0));
    }

    #[test]
    #[should_panic]
    fn get_panics_out_of_range() {
        let m = Matrix::zeros(2, 2);
        m.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn set_panics_out_of_range() {
        let mut m = Matrix::zeros(2, 2);
        m.set(2, 0, 1.0);
    }
}
