//! A minimal search engine which drives the decision strategies in integration tests.
#![allow(
    dead_code,
    reason = "every test binary only uses part of the helpers"
)]

use fmf_core::context::Context;
use fmf_core::context::ContextSet;
use fmf_core::decision::DecisionManager;
use fmf_core::decision::StrategyContext;
use fmf_core::decision::Valuation;
use fmf_core::terms::Term;
use fmf_core::terms::TermId;
use fmf_core::terms::TermManager;
use fmf_core::FmfError;

pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The truth values of the literals assigned so far; assignments are scoped by the SAT context.
#[derive(Debug, Default)]
pub(crate) struct Assignment {
    assigned: ContextSet<(TermId, bool)>,
}

impl Assignment {
    pub(crate) fn assign(&mut self, sat_context: &Context, literal: TermId, value: bool) {
        let _ = self.assigned.insert(sat_context, (literal, value));
    }

    pub(crate) fn valuation<'a>(&'a self, sat_context: &'a Context) -> AssignmentValuation<'a> {
        AssignmentValuation {
            assignment: self,
            sat_context,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct AssignmentValuation<'a> {
    assignment: &'a Assignment,
    sat_context: &'a Context,
}

impl Valuation for AssignmentValuation<'_> {
    fn sat_value(&self, literal: TermId) -> Option<bool> {
        [true, false].into_iter().find(|&value| {
            self.assignment
                .assigned
                .contains(self.sat_context, &(literal, value))
        })
    }
}

/// The bound `b` of a literal `(<= sum b)`.
pub(crate) fn bound_of(terms: &TermManager, literal: TermId) -> i64 {
    let Term::LessOrEqual { rhs, .. } = terms.term(literal) else {
        panic!("{} is not a bound literal", terms.display(literal));
    };
    let Term::IntegerConstant(bound) = terms.term(*rhs) else {
        panic!("{} does not have a constant bound", terms.display(literal));
    };
    *bound
}

/// The outcome of [`FakeEngine::solve`].
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct SearchResult {
    /// The bound under which a model was found.
    pub(crate) bound: i64,
    /// The decisions which were refuted before the model was found, in order.
    pub(crate) refuted: Vec<i64>,
}

/// A search engine for problems whose only constraint is that the total length of the strings is
/// at least `minimal_total_length`.
///
/// Every decision is taken at a new SAT level. A decision which bounds the total length below the
/// minimum is refuted: the engine backtracks and asserts its negation at the level below.
#[derive(Debug, Default)]
pub(crate) struct FakeEngine {
    pub(crate) sat_context: Context,
    pub(crate) user_context: Context,
    pub(crate) terms: TermManager,
    pub(crate) assignment: Assignment,
}

impl FakeEngine {
    pub(crate) fn next_decision(
        &mut self,
        decision_manager: &mut DecisionManager<'_>,
    ) -> Result<Option<TermId>, FmfError> {
        decision_manager.next_decision(
            &mut StrategyContext::new(&self.sat_context, &self.user_context, &mut self.terms),
            &self.assignment.valuation(&self.sat_context),
        )
    }

    pub(crate) fn solve(
        &mut self,
        decision_manager: &mut DecisionManager<'_>,
        minimal_total_length: i64,
    ) -> Result<Option<SearchResult>, FmfError> {
        let mut refuted = vec![];
        let mut model_bound = None;

        while let Some(decision) = self.next_decision(decision_manager)? {
            let bound = bound_of(&self.terms, decision);

            self.sat_context.push();
            self.assignment.assign(&self.sat_context, decision, true);

            if bound < minimal_total_length {
                self.sat_context.pop()?;
                self.assignment.assign(&self.sat_context, decision, false);
                refuted.push(bound);
            } else {
                model_bound = Some(bound);
            }
        }

        Ok(model_bound.map(|bound| SearchResult { bound, refuted }))
    }
}
