use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    #[error("Function takes from one to three arguments, received {0}.")]
    ArgumentCount(usize),

    #[error("Step must be non-zero.")]
    ZeroStep,

    #[error("Range bounds and step must be finite, received {0}.")]
    NonFinite(f64),

    #[error("Range would hold {0} values, more than the limit of {limit}.", limit = crate::numeric::arange::MAX_RANGE_LEN)]
    TooLarge(f64),

    #[error("Need at least two values to compute edges, received {0}.")]
    TooFewValues(usize),

    #[error("Rows must all have the same length (row {row} has {found}, expected {expected}).")]
    Ragged {
        row: usize,
        found: usize,
        expected: usize,
    },
}
