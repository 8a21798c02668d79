//! Finite model finding for strings.
//!
//! The [`StringsFmf`] manager collects the string variables of a problem and, at the start of
//! every solving session, builds a [`SumLengthDecisionStrategy`] over them. That strategy proposes
//! the literals `len(x_1) + ... + len(x_k) <= b` for increasing bounds `b`, so that the search
//! looks for models with a small total string length first.
mod options;
mod strings_fmf;
mod sum_length_strategy;

pub use options::StringsFmfOptions;
pub use strings_fmf::StringsFmf;
pub use sum_length_strategy::SumLengthDecisionStrategy;
