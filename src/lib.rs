mod error;
pub mod pivot_rule;
pub mod problem;
pub mod solver;
pub mod tableau;
mod util;

pub use crate::error::{SimplexError, SimplexResult, ValidationError};
pub use crate::pivot_rule::{entering_column, PivotCoordinate, RatioRule};
pub use crate::problem::LinearProgram;
pub use crate::solver::{Solution, TableauSimplexSolver, DEFAULT_MAX_ITER};
pub use crate::tableau::Tableau;
pub use crate::util::EPS;
