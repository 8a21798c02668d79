use crate::terms::TermId;

/// The search engine's view of the current assignment.
pub trait Valuation {
    /// The value `literal` currently has in the SAT search, or [`None`] if it is unassigned.
    fn sat_value(&self, literal: TermId) -> Option<bool>;
}
