use thiserror::Error;

/// Errors reported by [`Calculator`](crate::Calculator) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorError {
    /// The exact result is outside the `i64` range under the checked policy.
    #[error("integer overflow computing {a} + {b}")]
    Overflow { a: i64, b: i64 },
}
