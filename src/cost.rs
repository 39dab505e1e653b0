//! Read-only views over dense cost matrices.

use nalgebra::{Dim, Matrix, RawStorage, Scalar};

use crate::{Error, Result};

/// A dense, row-major addressable matrix of costs.
///
/// `dimensions` reports `(rows, cols)`; it only fails when the layout itself is
/// malformed (ragged nested slices). Squareness is checked by the matcher.
pub trait CostMatrix<T> {
    fn dimensions(&self) -> Result<(usize, usize)>;

    /// Cost of pairing `row` with `col`. Both indices are in bounds.
    fn cost(&self, row: usize, col: usize) -> T;
}

impl<T, R, C, S> CostMatrix<T> for Matrix<T, R, C, S>
where
    T: Scalar + Copy,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    fn dimensions(&self) -> Result<(usize, usize)> {
        Ok(self.shape())
    }

    #[inline]
    fn cost(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

fn nested_dimensions<T, Row: AsRef<[T]>>(rows: &[Row]) -> Result<(usize, usize)> {
    let expected = rows.first().map_or(0, |r| r.as_ref().len());
    for (row, r) in rows.iter().enumerate() {
        let len = r.as_ref().len();
        if len != expected {
            return Err(Error::RaggedRow { row, len, expected });
        }
    }
    Ok((rows.len(), expected))
}

impl<T: Copy, Row: AsRef<[T]>> CostMatrix<T> for [Row] {
    fn dimensions(&self) -> Result<(usize, usize)> {
        nested_dimensions(self)
    }

    #[inline]
    fn cost(&self, row: usize, col: usize) -> T {
        self[row].as_ref()[col]
    }
}

impl<T: Copy, Row: AsRef<[T]>> CostMatrix<T> for Vec<Row> {
    fn dimensions(&self) -> Result<(usize, usize)> {
        nested_dimensions(self)
    }

    #[inline]
    fn cost(&self, row: usize, col: usize) -> T {
        self[row].as_ref()[col]
    }
}

impl<T: Copy, Row: AsRef<[T]>, const N: usize> CostMatrix<T> for [Row; N] {
    fn dimensions(&self) -> Result<(usize, usize)> {
        nested_dimensions(self)
    }

    #[inline]
    fn cost(&self, row: usize, col: usize) -> T {
        self[row].as_ref()[col]
    }
}

/// Presents `costs` with every entry negated, turning a maximisation into a
/// minimisation without copying the matrix.
pub(crate) struct Negated<'a, M: ?Sized>(pub(crate) &'a M);

impl<T, M> CostMatrix<T> for Negated<'_, M>
where
    T: std::ops::Neg<Output = T>,
    M: CostMatrix<T> + ?Sized,
{
    fn dimensions(&self) -> Result<(usize, usize)> {
        self.0.dimensions()
    }

    #[inline]
    fn cost(&self, row: usize, col: usize) -> T {
        -self.0.cost(row, col)
    }
}
