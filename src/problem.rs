use crate::error::ValidationError;
use crate::util::EPS;

const LTE_STR: &str = "\u{2264}";
const GTE_STR: &str = "\u{2265}";

const MARGINS: &str = "unit contribution margins";
const CAPACITIES: &str = "capacities";
const REQUIREMENTS: &str = "requirement matrix";

/// A production-mix problem:
///
/// maximize   sum_j margins[j] * x[j]
/// subject to sum_j requirements[i][j] * x[j] <= capacities[i]   (for all i)
///            x[j] >= 0                                         (for all j)
///
/// All inputs are expected to be non-negative, so the origin is always feasible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearProgram {
    margins: Vec<f64>,
    capacities: Vec<f64>,
    requirements: Vec<Vec<f64>>,
}

impl LinearProgram {
    /// Stores the inputs as given. Nothing is checked until [`LinearProgram::validate`],
    /// which the solver runs before touching any numbers.
    pub fn new(margins: Vec<f64>, capacities: Vec<f64>, requirements: Vec<Vec<f64>>) -> Self {
        Self {
            margins,
            capacities,
            requirements,
        }
    }

    pub fn margins(&self) -> &[f64] {
        &self.margins
    }

    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    pub fn requirements(&self) -> &[Vec<f64>] {
        &self.requirements
    }

    pub fn num_vars(&self) -> usize {
        self.margins.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.capacities.len()
    }

    /// Checks, in order: no negative entry anywhere, one requirement row per capacity,
    /// one requirement column per margin, no ragged rows, no NaN or infinite entries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some((input, value)) = self.entries().find(|(_input, value)| *value < 0.) {
            return Err(ValidationError::NegativeInput { input, value });
        }

        if self.requirements.len() != self.capacities.len() {
            return Err(ValidationError::ConstraintDimensionMismatch {
                capacities: self.capacities.len(),
                rows: self.requirements.len(),
            });
        }

        let columns = self.requirements.first().map_or(0, Vec::len);

        if columns != self.margins.len() {
            return Err(ValidationError::VariableDimensionMismatch {
                margins: self.margins.len(),
                columns,
            });
        }

        if let Some((row, len)) = self
            .requirements
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_row, len)| *len != columns)
        {
            return Err(ValidationError::RaggedRequirementRow {
                row,
                len,
                expected: columns,
            });
        }

        //-inf was already reported as negative
        if let Some((input, value)) = self.entries().find(|(_input, value)| !value.is_finite()) {
            return Err(ValidationError::NonFiniteInput { input, value });
        }

        Ok(())
    }

    pub fn obj(&self, x: &[f64]) -> f64 {
        self.margins.iter().zip(x).map(|(c_j, x_j)| c_j * x_j).sum()
    }

    /// Remaining capacity of every constraint at `x`, i.e. `b - A x`.
    pub fn slack(&self, x: &[f64]) -> Vec<f64> {
        self.requirements
            .iter()
            .zip(&self.capacities)
            .map(|(row, b_i)| b_i - row.iter().zip(x).map(|(a_ij, x_j)| a_ij * x_j).sum::<f64>())
            .collect()
    }

    pub fn is_feasible(&self, x: &[f64]) -> bool {
        if x.len() != self.num_vars() {
            return false;
        }

        if x.iter().any(|&x_j| x_j < -EPS) {
            return false;
        }

        self.slack(x).iter().all(|&s_i| s_i > -EPS)
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.margins
            .iter()
            .map(|&v| (MARGINS, v))
            .chain(self.capacities.iter().map(|&v| (CAPACITIES, v)))
            .chain(
                self.requirements
                    .iter()
                    .flatten()
                    .map(|&v| (REQUIREMENTS, v)),
            )
    }
}

fn write_terms(f: &mut std::fmt::Formatter, coeffs: &[f64]) -> std::fmt::Result {
    let mut empty = true;

    for (j, coeff) in coeffs.iter().enumerate() {
        if *coeff == 0. {
            continue;
        }

        write!(f, "+ {} x{} ", coeff, j)?;
        empty = false;
    }

    if empty {
        write!(f, "0 ")?;
    }

    Ok(())
}

impl std::fmt::Display for LinearProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "maximize")?;
        write_terms(f, &self.margins)?;

        writeln!(f, "\n\nsubject to")?;

        for (row, b_i) in self.requirements.iter().zip(&self.capacities) {
            write_terms(f, row)?;
            writeln!(f, "{} {}", LTE_STR, b_i)?;
        }

        writeln!(f, "\nwith the bounds")?;

        for j in 0..self.num_vars() {
            writeln!(f, "x{} {} 0", j, GTE_STR)?;
        }

        Ok(())
    }
}
