use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::cost::{CostMatrix, Negated};
use crate::{Error, Matching, Result};

/// Absolute tolerance below which a reduced cost counts as zero.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Min-cost perfect matching on dense square matrices.
///
/// Primal-dual shortest augmenting path variant of the Hungarian method, O(n³).
/// Row and column potentials start dual feasible, zero reduced cost edges seed
/// the matching greedily, and every remaining free row is matched through a
/// Dijkstra search over reduced costs followed by a potential update.
///
/// Ties are broken in scan order (lowest row, then lowest column), so equal
/// inputs always produce the same assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matcher<T> {
    epsilon: T,
}

impl<T: Float> Default for Matcher<T> {
    fn default() -> Self {
        Self {
            epsilon: num_traits::cast(DEFAULT_EPSILON).unwrap_or_else(T::epsilon),
        }
    }
}

impl<T> Matcher<T>
where
    T: Float + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the zero-test tolerance. Checked when solving.
    pub fn with_epsilon(mut self, epsilon: T) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn epsilon(&self) -> T {
        self.epsilon
    }

    /// Matching that minimises the sum of the chosen entries.
    pub fn min_cost_matching<M>(&self, costs: &M) -> Result<Matching<T>>
    where
        M: CostMatrix<T> + ?Sized,
    {
        let n = self.validate(costs)?;
        let (row_to_col, col_to_row) = self.solve(n, costs);
        let cost = total_cost(costs, &row_to_col);
        debug!("matched {n}x{n} costs, total = {cost:?}");
        Ok(Matching::new(cost, row_to_col, col_to_row))
    }

    /// Matching that maximises the sum of the chosen entries.
    ///
    /// Solved as the min-cost matching of the negated matrix; the reported cost
    /// is the sum of the original entries.
    pub fn max_cost_matching<M>(&self, costs: &M) -> Result<Matching<T>>
    where
        M: CostMatrix<T> + ?Sized,
    {
        let negated = Negated(costs);
        let n = self.validate(&negated)?;
        let (row_to_col, col_to_row) = self.solve(n, &negated);
        let cost = total_cost(costs, &row_to_col);
        debug!("matched {n}x{n} costs, maximal total = {cost:?}");
        Ok(Matching::new(cost, row_to_col, col_to_row))
    }

    fn validate<M>(&self, costs: &M) -> Result<usize>
    where
        M: CostMatrix<T> + ?Sized,
    {
        if !self.epsilon.is_finite() || self.epsilon < T::zero() {
            return Err(Error::InvalidEpsilon);
        }

        let (rows, cols) = costs.dimensions()?;
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }
        if rows != cols {
            return Err(Error::NotSquare { rows, cols });
        }

        for row in 0..rows {
            for col in 0..cols {
                if !costs.cost(row, col).is_finite() {
                    return Err(Error::NonFinite { row, col });
                }
            }
        }

        Ok(rows)
    }

    #[inline]
    fn is_zero(&self, x: T) -> bool {
        x.abs() < self.epsilon
    }

    /// Returns `(row -> col, col -> row)` for a validated `n`x`n` matrix.
    fn solve<M>(&self, n: usize, costs: &M) -> (Vec<usize>, Vec<usize>)
    where
        M: CostMatrix<T> + ?Sized,
    {
        let cost = |i: usize, j: usize| costs.cost(i, j);

        // dual feasible starting potentials
        let mut u: Vec<T> = (0..n)
            .map(|i| (1..n).fold(cost(i, 0), |min, j| min.min(cost(i, j))))
            .collect();
        let mut v: Vec<T> = (0..n)
            .map(|j| (1..n).fold(cost(0, j) - u[0], |min, i| min.min(cost(i, j) - u[i])))
            .collect();

        let mut row_mate: Vec<Option<usize>> = vec![None; n];
        let mut col_mate: Vec<Option<usize>> = vec![None; n];

        // seed with zero reduced cost edges
        let mut mated = 0;
        for i in 0..n {
            for j in 0..n {
                if col_mate[j].is_some() {
                    continue;
                }

                if self.is_zero(cost(i, j) - u[i] - v[j]) {
                    row_mate[i] = Some(j);
                    col_mate[j] = Some(i);
                    mated += 1;
                    break;
                }
            }
        }
        debug!("greedy pass matched {mated} of {n} rows");

        let mut dist = vec![T::zero(); n];
        let mut dad: Vec<Option<usize>> = vec![None; n];
        let mut seen = vec![false; n];

        // rows never lose their partner, so this visits free rows in the same
        // order as rescanning for the first free row every round
        for s in 0..n {
            if row_mate[s].is_some() {
                continue;
            }

            dad.fill(None);
            seen.fill(false);
            for k in 0..n {
                dist[k] = cost(s, k) - u[s] - v[k];
            }

            let mut settled = 0;
            let j = loop {
                let j = closest_unsettled(&dist, &seen)
                    .expect("a free column remains while a row is unmatched");
                seen[j] = true;
                settled += 1;

                let Some(i) = col_mate[j] else {
                    break j;
                };

                for k in 0..n {
                    if seen[k] {
                        continue;
                    }
                    let new_dist = dist[j] + cost(i, k) - u[i] - v[k];
                    if new_dist < dist[k] {
                        dist[k] = new_dist;
                        dad[k] = Some(j);
                    }
                }
            };

            // shift potentials of the settled columns and their rows
            for k in 0..n {
                if k == j || !seen[k] {
                    continue;
                }
                let i = col_mate[k].expect("settled columns other than the last are matched");
                let w = dist[k] - dist[j];
                v[k] = v[k] + w;
                u[i] = u[i] - w;
            }
            u[s] = u[s] + dist[j];

            trace!("row {s}: augmenting to column {j} after settling {settled} columns");

            // flip the path back to s
            let mut j = j;
            while let Some(d) = dad[j] {
                let i = col_mate[d].expect("path columns are matched");
                col_mate[j] = Some(i);
                row_mate[i] = Some(j);
                j = d;
            }
            col_mate[j] = Some(s);
            row_mate[s] = Some(j);
            mated += 1;
        }
        debug_assert_eq!(mated, n);

        let row_to_col = row_mate
            .into_iter()
            .map(|j| j.expect("every row is matched"))
            .collect();
        let col_to_row = col_mate
            .into_iter()
            .map(|i| i.expect("every column is matched"))
            .collect();
        (row_to_col, col_to_row)
    }
}

/// First unsettled column with the smallest distance.
fn closest_unsettled<T: Float>(dist: &[T], seen: &[bool]) -> Option<usize> {
    let mut closest: Option<usize> = None;
    for (k, &d) in dist.iter().enumerate() {
        if seen[k] {
            continue;
        }
        if closest.map_or(true, |c| d < dist[c]) {
            closest = Some(k);
        }
    }
    closest
}

fn total_cost<T, M>(costs: &M, row_to_col: &[usize]) -> T
where
    T: Float,
    M: CostMatrix<T> + ?Sized,
{
    row_to_col
        .iter()
        .enumerate()
        .fold(T::zero(), |acc, (i, &j)| acc + costs.cost(i, j))
}
