/// How [`Calculator::sum`](crate::Calculator::sum) behaves when the exact
/// result does not fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Report overflow as an error.
    #[default]
    Checked,
    /// Wrap around using two's-complement arithmetic.
    Wrapping,
    /// Clamp the result to `i64::MIN` or `i64::MAX`.
    Saturating,
}
