use super::StrategyContext;
use crate::basic_types::FmfError;
#[cfg(doc)]
use crate::decision::DecisionManager;
use crate::statistics::StatisticLogger;
use crate::terms::TermId;

/// A strategy which proposes decision literals by index.
///
/// The `i`-th literal is fixed once it has been produced: asking for the same index again returns
/// the identical literal. Which index is requested next is up to the caller (e.g. the
/// [`DecisionManager`]), so strategies can be combined with any search schedule.
///
/// Implementations must tolerate backtracking of either context between any two calls.
pub trait DecisionStrategy {
    /// A name used to identify the strategy in logs and statistics.
    fn name(&self) -> &str;

    /// Returns true once the strategy has been given its inputs; no literal can be produced
    /// before that.
    fn is_initialized(&self) -> bool;

    /// Returns the literal with the given `index`, or [`None`] if the strategy has nothing to
    /// decide on.
    ///
    /// Fails with [`FmfError::ContractViolation`] if the strategy is not initialized.
    fn literal_for(
        &mut self,
        index: usize,
        context: &mut StrategyContext<'_>,
    ) -> Result<Option<TermId>, FmfError>;

    /// Logs the statistics of the strategy using the provided [`StatisticLogger`].
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// The order in which the [`DecisionManager`] consults its strategies; earlier variants are
/// consulted first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrategyPriority {
    /// Strategies whose decisions every other strategy relies on.
    Required,
    /// Bounds on the size of models, e.g. on the total length of strings.
    FiniteModelFinding,
    /// Decisions which only steer the search.
    Heuristic,
}
