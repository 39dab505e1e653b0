/// A perfect matching between the rows and columns of a square cost matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matching<T> {
    cost: T,
    row_to_col: Vec<usize>,
    col_to_row: Vec<usize>,
}

impl<T: Copy> Matching<T> {
    pub(crate) fn new(cost: T, row_to_col: Vec<usize>, col_to_row: Vec<usize>) -> Self {
        debug_assert_eq!(row_to_col.len(), col_to_row.len());
        Self {
            cost,
            row_to_col,
            col_to_row,
        }
    }

    /// Sum of the matched entries of the input matrix.
    pub fn cost(&self) -> T {
        self.cost
    }

    /// Column matched to each row, indexed by row.
    pub fn row_assignment(&self) -> &[usize] {
        &self.row_to_col
    }

    /// Row matched to each column, indexed by column.
    pub fn column_assignment(&self) -> &[usize] {
        &self.col_to_row
    }

    pub fn column_for(&self, row: usize) -> Option<usize> {
        self.row_to_col.get(row).copied()
    }

    pub fn row_for(&self, col: usize) -> Option<usize> {
        self.col_to_row.get(col).copied()
    }

    /// `(row, col)` pairs in row order. Each pair indexes a `nalgebra` matrix directly.
    pub fn assignment(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.row_to_col.iter().copied().enumerate()
    }

    /// Number of matched pairs, equal to the matrix dimension.
    pub fn len(&self) -> usize {
        self.row_to_col.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_to_col.is_empty()
    }

    /// `(cost, row -> col, col -> row)`
    pub fn into_parts(self) -> (T, Vec<usize>, Vec<usize>) {
        (self.cost, self.row_to_col, self.col_to_row)
    }
}
