use log::trace;

use crate::{config::OverflowPolicy, error::CalculatorError};

/// Integer calculator with a fixed overflow policy.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    policy: OverflowPolicy,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default (checked) overflow policy.
    pub fn new() -> Self {
        Self {
            policy: OverflowPolicy::default(),
        }
    }

    pub fn with_policy(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    /// The overflow policy this calculator was built with.
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Returns the arithmetic sum of `a` and `b`.
    ///
    /// Only the checked policy can fail; wrapping and saturating always
    /// produce a value.
    pub fn sum(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        let result = match self.policy {
            OverflowPolicy::Checked => a
                .checked_add(b)
                .ok_or(CalculatorError::Overflow { a, b })?,
            OverflowPolicy::Wrapping => a.wrapping_add(b),
            OverflowPolicy::Saturating => a.saturating_add(b),
        };

        trace!("sum({}, {}) = {}", a, b, result);
        Ok(result)
    }
}
