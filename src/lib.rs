//! Minimum (and maximum) cost perfect matching on dense square cost matrices.
//!
//! ```
//! let costs = nalgebra::Matrix3::new(
//!     4., 1., 3.,
//!     2., 0., 5.,
//!     3., 2., 2.,
//! );
//! let matching = jv_matching::min_cost_matching(&costs).unwrap();
//! assert_eq!(matching.cost(), 5.);
//! assert_eq!(matching.row_assignment(), &[1, 0, 2]);
//! ```
//!
//! Costs may be any `nalgebra` matrix or nested rows (`Vec<Vec<f64>>`,
//! `[[f32; N]; N]`, ...). Rectangular, empty and non-finite inputs are
//! rejected with an [`Error`].

use std::fmt::Debug;

use num_traits::Float;

mod cost;
mod error;
mod matcher;
mod matching;

pub use cost::CostMatrix;
pub use error::{Error, Result};
pub use matcher::{Matcher, DEFAULT_EPSILON};
pub use matching::Matching;

/// Min-cost perfect matching with the default tolerance.
pub fn min_cost_matching<T, M>(costs: &M) -> Result<Matching<T>>
where
    T: Float + Debug,
    M: CostMatrix<T> + ?Sized,
{
    Matcher::new().min_cost_matching(costs)
}

/// Max-cost perfect matching with the default tolerance.
pub fn max_cost_matching<T, M>(costs: &M) -> Result<Matching<T>>
where
    T: Float + Debug,
    M: CostMatrix<T> + ?Sized,
{
    Matcher::new().max_cost_matching(costs)
}
