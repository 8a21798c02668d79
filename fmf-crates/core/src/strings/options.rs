use std::num::NonZeroU64;

use crate::basic_types::FmfError;

/// Options which determine the bounds proposed by a
/// [`SumLengthDecisionStrategy`](super::SumLengthDecisionStrategy).
///
/// The literal with index `i` bounds the sum of lengths by `initial_bound + i * bound_step`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StringsFmfOptions {
    /// The bound proposed by the first literal.
    pub initial_bound: u64,
    /// The difference between the bounds of two consecutive literals.
    pub bound_step: NonZeroU64,
}

impl Default for StringsFmfOptions {
    fn default() -> Self {
        Self {
            initial_bound: 0,
            bound_step: NonZeroU64::MIN,
        }
    }
}

impl StringsFmfOptions {
    /// The bound of the literal with the given `index`.
    ///
    /// Fails with [`FmfError::IllegalArgument`] if the bound cannot be represented as an integer
    /// constant.
    pub fn threshold(&self, index: usize) -> Result<i64, FmfError> {
        u64::try_from(index)
            .ok()
            .and_then(|index| index.checked_mul(self.bound_step.get()))
            .and_then(|offset| offset.checked_add(self.initial_bound))
            .and_then(|bound| i64::try_from(bound).ok())
            .ok_or_else(|| {
                FmfError::illegal_argument(format!(
                    "the bound for index {index} does not fit in an integer constant"
                ))
            })
    }
}
