use crate::context::Context;
use crate::terms::TermManager;

/// Everything a [`super::DecisionStrategy`] may access while producing a literal.
#[derive(Debug)]
pub struct StrategyContext<'a> {
    sat_context: &'a Context,
    user_context: &'a Context,
    terms: &'a mut TermManager,
}

impl<'a> StrategyContext<'a> {
    pub fn new(
        sat_context: &'a Context,
        user_context: &'a Context,
        terms: &'a mut TermManager,
    ) -> Self {
        Self {
            sat_context,
            user_context,
            terms,
        }
    }

    /// The context of the search itself; pushed on every decision.
    pub fn sat_context(&self) -> &'a Context {
        self.sat_context
    }

    /// The context of the user's assertion stack; pushed and popped between solving sessions.
    pub fn user_context(&self) -> &'a Context {
        self.user_context
    }

    pub fn terms(&self) -> &TermManager {
        &*self.terms
    }

    pub fn terms_mut(&mut self) -> &mut TermManager {
        &mut *self.terms
    }
}
