use thiserror::Error;

pub type SimplexResult<T> = Result<T, SimplexError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("negative input: {input} contains {value}")]
    NegativeInput { input: &'static str, value: f64 },

    #[error(
        "constraint dimension mismatch (capacities {capacities} vs. requirement rows {rows})"
    )]
    ConstraintDimensionMismatch { capacities: usize, rows: usize },

    #[error(
        "variable dimension mismatch (unit contribution margins {margins} vs. requirement columns {columns})"
    )]
    VariableDimensionMismatch { margins: usize, columns: usize },

    #[error("ragged requirement matrix: row {row} has {len} entries, expected {expected}")]
    RaggedRequirementRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("non-finite input: {input} contains {value}")]
    NonFiniteInput { input: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimplexError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("exceeded maximum pivot iterations ({max_iter})")]
    IterationLimit { max_iter: u64 },

    #[error("no leaving row for entering column {column}, problem is unbounded")]
    Unbounded { column: usize },
}
