use crate::error::{SimplexError, SimplexResult};
use crate::pivot_rule::{entering_column, PivotCoordinate, RatioRule};
use crate::problem::LinearProgram;
use crate::tableau::Tableau;
use crate::util::ITER_WIDTH;

use log::{debug, info, trace};

pub const DEFAULT_MAX_ITER: u64 = 1000;

#[derive(Debug, Clone)]
pub struct TableauSimplexSolver {
    max_iter: u64,
    ratio_rule: RatioRule,
}

impl std::default::Default for TableauSimplexSolver {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            ratio_rule: RatioRule::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    Running,
    Optimal,
}

impl TableauSimplexSolver {
    pub fn new(max_iter: Option<u64>) -> Self {
        Self {
            max_iter: max_iter.unwrap_or(DEFAULT_MAX_ITER),
            ..Default::default()
        }
    }

    pub fn with_ratio_rule(mut self, ratio_rule: RatioRule) -> Self {
        self.ratio_rule = ratio_rule;
        self
    }

    pub fn max_iter(&self) -> u64 {
        self.max_iter
    }

    pub fn ratio_rule(&self) -> RatioRule {
        self.ratio_rule
    }

    pub fn solve(&self, prob: LinearProgram) -> SimplexResult<Solution> {
        if let Err(err) = prob.validate() {
            debug!("rejected problem: {}", err);
            return Err(err.into());
        }

        info!(
            "solving problem with {} variables and {} constraints ({} rule)",
            prob.num_vars(),
            prob.num_constraints(),
            self.ratio_rule,
        );

        trace!("problem:\n{}", prob);

        let mut tableau = Tableau::from(&prob);
        let iterations = self.solve_tableau(&mut tableau)?;
        let solution = Solution::extract(prob, &tableau, iterations);

        info!(
            "found optimal point with objective value {} after {} iterations",
            solution.obj(),
            iterations
        );

        Ok(solution)
    }

    /// Pivots `tableau` in place until no objective-row entry is positive.
    /// Returns the number of pivots performed.
    ///
    /// At least one pivot is attempted before the optimality test.
    pub fn solve_tableau(&self, tableau: &mut Tableau) -> SimplexResult<u64> {
        trace!("initial tableau:{}", tableau);
        info!("Iteration  |  Objective");

        let mut state = DriverState::Running;
        let mut iter = 0u64;

        while state == DriverState::Running {
            if iter >= self.max_iter {
                info!("reached maximum iterations");
                return Err(SimplexError::IterationLimit {
                    max_iter: self.max_iter,
                });
            }

            let col = entering_column(tableau);

            state = match self.ratio_rule.leaving_row(tableau, col) {
                Some(row) => {
                    let at = PivotCoordinate::new(row, col);
                    debug!("pivot on {:?}", at);

                    tableau.pivot(at);
                    iter += 1;

                    info!("{:it$}  |  {:.8E}", iter, tableau.obj(), it = ITER_WIDTH);
                    trace!("tableau:{}", tableau);

                    if tableau.is_optimal() {
                        DriverState::Optimal
                    } else {
                        DriverState::Running
                    }
                }

                None if tableau.is_improving(col) => {
                    info!("problem is unbounded");
                    return Err(SimplexError::Unbounded { column: col });
                }

                None => {
                    debug!("no leaving row for column {} and nothing to improve", col);
                    DriverState::Optimal
                }
            };
        }

        Ok(iter)
    }
}

#[derive(Debug, Clone)]
pub struct Solution {
    prob: LinearProgram,
    quantities: Vec<f64>,
    remaining_capacities: Vec<f64>,
    obj: f64,
    iterations: u64,
}

impl Solution {
    /// Reads the solution off a terminal tableau built from `prob`.
    ///
    /// Each constraint row credits its right-hand side to the one variable that is basic
    /// in it: a product quantity or the remaining capacity of a constraint. Every nonbasic
    /// variable is 0.
    pub fn extract(prob: LinearProgram, tableau: &Tableau, iterations: u64) -> Self {
        let n = tableau.num_vars();
        let m = tableau.num_constraints();
        let mut quantities = vec![0.; n];
        let mut remaining_capacities = vec![0.; m];

        for (row, &col) in tableau.basic_vars().iter().enumerate() {
            if col < n {
                quantities[col] = tableau.rhs(row);
            } else if col < n + m {
                remaining_capacities[col - n] = tableau.rhs(row);
            }
        }

        Self {
            prob,
            quantities,
            remaining_capacities,
            obj: tableau.obj(),
            iterations,
        }
    }

    pub fn prob(&self) -> &LinearProgram {
        &self.prob
    }

    pub fn quantities(&self) -> &[f64] {
        &self.quantities
    }

    pub fn remaining_capacities(&self) -> &[f64] {
        &self.remaining_capacities
    }

    pub fn obj(&self) -> f64 {
        self.obj
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }
}
