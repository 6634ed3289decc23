use crate::pivot_rule::PivotCoordinate;
use crate::problem::LinearProgram;
use crate::util::EPS;

/// Dense simplex tableau with `m + 1` rows and `n + m + 1` columns.
///
/// Columns `0..n` belong to the decision variables, `n..n + m` to the slack variables
/// (one per constraint), and the last column is the right-hand side. The last row is the
/// objective row, which starts out holding the unit contribution margins.
///
/// `basic_vars[i]` is the column of the variable that is basic in constraint row `i`.
/// Every slack starts out basic in its own row.
#[derive(Debug, Clone)]
pub struct Tableau {
    tbl: nalgebra::DMatrix<f64>,
    basic_vars: Vec<usize>,
    num_vars: usize,
    num_constraints: usize,
}

impl std::convert::From<&LinearProgram> for Tableau {
    fn from(prob: &LinearProgram) -> Self {
        let n = prob.num_vars();
        let m = prob.num_constraints();
        let mut tbl = nalgebra::DMatrix::<f64>::zeros(m + 1, n + m + 1);

        for (j, &c_j) in prob.margins().iter().enumerate() {
            tbl[(m, j)] = c_j;
        }

        for (i, (row, &b_i)) in prob
            .requirements()
            .iter()
            .zip(prob.capacities())
            .enumerate()
        {
            for (j, &a_ij) in row.iter().enumerate() {
                tbl[(i, j)] = a_ij;
            }

            tbl[(i, n + i)] = 1.;
            tbl[(i, n + m)] = b_i;
        }

        Self {
            tbl,
            basic_vars: (n..n + m).collect(),
            num_vars: n,
            num_constraints: m,
        }
    }
}

impl Tableau {
    pub fn rows(&self) -> usize {
        self.tbl.nrows()
    }

    pub fn cols(&self) -> usize {
        self.tbl.ncols()
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    #[inline]
    pub fn obj_row(&self) -> usize {
        self.num_constraints
    }

    #[inline]
    pub fn rhs_col(&self) -> usize {
        self.tbl.ncols() - 1
    }

    #[inline]
    pub fn slack_col(&self, constraint: usize) -> usize {
        self.num_vars + constraint
    }

    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        self.tbl[(row, col)]
    }

    #[inline]
    pub fn rhs(&self, row: usize) -> f64 {
        self.tbl[(row, self.rhs_col())]
    }

    /// Every entry of the objective row, right-hand side included.
    pub fn obj_coeffs(&self) -> impl Iterator<Item = f64> + '_ {
        let obj_row = self.obj_row();
        (0..self.cols()).map(move |j| self.tbl[(obj_row, j)])
    }

    /// The objective row accumulates the negated objective value in its right-hand side.
    pub fn obj(&self) -> f64 {
        -self.rhs(self.obj_row())
    }

    pub fn is_improving(&self, col: usize) -> bool {
        self.entry(self.obj_row(), col) > EPS
    }

    pub fn is_optimal(&self) -> bool {
        !self.obj_coeffs().any(|r_j| r_j > EPS)
    }

    /// Gauss-Jordan step: scales the pivot row so the pivot element is 1, then clears the
    /// pivot column in every other row, objective row included. The entering column
    /// replaces the row's basic variable.
    ///
    /// # Panics
    ///
    /// Panics if the entry at `at` is zero. Pivot rules never select such an entry.
    pub fn pivot(&mut self, at: PivotCoordinate) {
        let pivot_element = self.tbl[(at.row, at.col)];
        assert!(pivot_element != 0., "pivot element at {:?} is zero", at);

        for x in self.tbl.row_mut(at.row).iter_mut() {
            *x /= pivot_element;
        }

        let pivot_row = self.tbl.row(at.row).into_owned();

        for i in 0..self.tbl.nrows() {
            if i == at.row {
                continue;
            }

            let factor = self.tbl[(i, at.col)];

            if factor == 0. {
                continue;
            }

            for (x, p) in self.tbl.row_mut(i).iter_mut().zip(pivot_row.iter()) {
                *x -= factor * p;
            }
        }

        self.basic_vars[at.row] = at.col;
    }

    pub fn basic_vars(&self) -> &[usize] {
        &self.basic_vars
    }

    /// Row in which `col` is basic, or `None` for a nonbasic column.
    ///
    /// Only the basis decides this. A nonbasic column can still be a unit vector, for
    /// example when it duplicates a basic column, but it never gets that row's value.
    pub fn basic_row(&self, col: usize) -> Option<usize> {
        self.basic_vars.iter().position(|&basic| basic == col)
    }
}

impl std::fmt::Display for Tableau {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tbl)
    }
}
