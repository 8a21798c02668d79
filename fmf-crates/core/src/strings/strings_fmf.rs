use log::debug;
use log::trace;

use super::StringsFmfOptions;
use super::SumLengthDecisionStrategy;
use crate::basic_types::FmfError;
use crate::context::Context;
use crate::context::ContextSet;
use crate::create_statistics_struct;
use crate::decision::DecisionStrategy;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::terms::SkolemCache;
use crate::terms::TermId;
use crate::terms::TermManager;

create_statistics_struct!(
    /// Statistics of the [`StringsFmf`] manager.
    StringsFmfStatistics {
        /// The number of solving sessions which have been started
        num_sessions: u64,
        /// The number of times a string variable started being tracked
        num_variables_tracked: u64,
});

/// Tracks the string variables of a problem and owns the [`SumLengthDecisionStrategy`] of the
/// current solving session.
///
/// Variables are tracked in the user context: a variable registered while an assertion level is
/// open is forgotten again when that level is popped. Every call to
/// [`StringsFmf::begin_session`] replaces the strategy by a new one over the variables tracked at
/// that moment.
#[derive(Debug)]
pub struct StringsFmf {
    options: StringsFmfOptions,
    tracked: ContextSet<TermId>,
    strategy: Option<SumLengthDecisionStrategy>,
    skolem_cache: SkolemCache,
    statistics: StringsFmfStatistics,
}

impl StringsFmf {
    pub fn new(options: StringsFmfOptions, skolem_cache: SkolemCache) -> Self {
        Self {
            options,
            tracked: ContextSet::default(),
            strategy: None,
            skolem_cache,
            statistics: StringsFmfStatistics::default(),
        }
    }

    /// Registers the string variables occurring in `term`.
    ///
    /// Terms which are not of sort string are ignored. Variables which are already tracked in
    /// `user_context` are not registered a second time.
    pub fn on_variable_seen(&mut self, user_context: &Context, terms: &TermManager, term: TermId) {
        if !terms.is_string(term) {
            return;
        }

        for variable in terms.collect_variables(term) {
            if !terms.is_string(variable) {
                continue;
            }
            if self.tracked.insert(user_context, variable) {
                trace!(
                    "Tracking {} at user level {}",
                    terms.display(variable),
                    user_context.level()
                );
                self.statistics.num_variables_tracked += 1;
            }
        }
    }

    /// Starts a solving session by replacing the active strategy with a fresh one over the
    /// variables tracked in `user_context`.
    pub fn begin_session(&mut self, user_context: &Context) -> Result<(), FmfError> {
        let variables = self
            .tracked
            .iter(user_context)
            .copied()
            .collect::<Vec<_>>();
        debug!(
            "Beginning strings finite model finding session over {} variable(s)",
            variables.len()
        );

        let mut strategy = SumLengthDecisionStrategy::new(self.options);
        strategy.initialize(variables)?;

        self.strategy = Some(strategy);
        self.statistics.num_sessions += 1;
        Ok(())
    }

    /// The strategy of the current session.
    pub fn active_strategy(&self) -> Result<&SumLengthDecisionStrategy, FmfError> {
        self.strategy.as_ref().ok_or_else(Self::no_session)
    }

    /// The strategy of the current session, to be registered with a
    /// [`DecisionManager`](crate::decision::DecisionManager).
    pub fn active_strategy_mut(&mut self) -> Result<&mut SumLengthDecisionStrategy, FmfError> {
        self.strategy.as_mut().ok_or_else(Self::no_session)
    }

    fn no_session() -> FmfError {
        FmfError::contract_violation("no strings finite model finding session has been started")
    }

    /// The tracked variables, in the order in which they were first seen.
    pub fn tracked_variables<'a>(
        &'a self,
        user_context: &Context,
    ) -> impl Iterator<Item = TermId> + 'a {
        self.tracked.iter(user_context).copied()
    }

    pub fn is_tracked(&self, user_context: &Context, variable: TermId) -> bool {
        self.tracked.contains(user_context, &variable)
    }

    pub fn skolem_cache(&self) -> &SkolemCache {
        &self.skolem_cache
    }

    pub fn skolem_cache_mut(&mut self) -> &mut SkolemCache {
        &mut self.skolem_cache
    }

    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger.clone());
        if let Some(strategy) = &self.strategy {
            strategy.log_statistics(statistic_logger.attach_to_prefix(strategy.name()));
        }
    }
}
