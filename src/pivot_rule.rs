use crate::tableau::Tableau;
use crate::util::EPS;

/// Tableau entry chosen for elimination in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotCoordinate {
    pub row: usize,
    pub col: usize,
}

impl PivotCoordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Index of the largest entry in the objective row. The scan covers every column,
/// slack and right-hand-side columns included, and ties go to the leftmost column.
pub fn entering_column(tableau: &Tableau) -> usize {
    let mut col = 0;
    let mut max = f64::NEG_INFINITY;

    for (j, r_j) in tableau.obj_coeffs().enumerate() {
        if r_j > max {
            max = r_j;
            col = j;
        }
    }

    col
}

/// How the leaving row is picked once the entering column is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioRule {
    /// Every constraint row with a nonzero entry in the entering column is a candidate.
    /// Its ratio `rhs / entry` is negated when below 1, and the smallest resulting value wins.
    /// This can leave the feasible region or cycle; the iteration cap is what stops it.
    NegateBelowOne,

    /// Textbook minimum-ratio test: only rows with a positive entry in the entering column,
    /// smallest `rhs / entry` wins.
    MinimumRatio,
}

impl std::default::Default for RatioRule {
    fn default() -> Self {
        RatioRule::NegateBelowOne
    }
}

impl RatioRule {
    /// Returns `None` if no constraint row is eligible. Ties go to the first row.
    pub fn leaving_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let mut leaving: Option<(usize, f64)> = None;

        for i in 0..tableau.num_constraints() {
            let a_i = tableau.entry(i, col);

            let ratio = match self {
                RatioRule::NegateBelowOne => {
                    if a_i.abs() < EPS {
                        continue;
                    }

                    let ratio = tableau.rhs(i) / a_i;

                    if ratio < 1. {
                        -ratio
                    } else {
                        ratio
                    }
                }

                RatioRule::MinimumRatio => {
                    if a_i < EPS {
                        continue;
                    }

                    tableau.rhs(i) / a_i
                }
            };

            if leaving.map_or(true, |(_row, min)| ratio < min) {
                leaving = Some((i, ratio));
            }
        }

        leaving.map(|(row, _ratio)| row)
    }

    pub fn select(&self, tableau: &Tableau) -> Option<PivotCoordinate> {
        let col = entering_column(tableau);

        self.leaving_row(tableau, col)
            .map(|row| PivotCoordinate::new(row, col))
    }
}

impl std::fmt::Display for RatioRule {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RatioRule::NegateBelowOne => write!(f, "negate below one"),
            RatioRule::MinimumRatio => write!(f, "minimum ratio"),
        }
    }
}
