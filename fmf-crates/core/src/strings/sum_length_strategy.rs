use log::debug;
use log::trace;

use super::StringsFmfOptions;
use crate::basic_types::FmfError;
use crate::context::Context;
use crate::context::ContextCell;
use crate::create_statistics_struct;
use crate::decision::DecisionStrategy;
use crate::decision::StrategyContext;
use crate::fmf_assert_simple;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::terms::TermId;

create_statistics_struct!(
    /// Statistics of a [`SumLengthDecisionStrategy`].
    SumLengthStatistics {
        /// The number of bound literals which have been constructed
        num_literals_created: u64,
        /// The number of times the sum of lengths had to be (re)built
        num_sum_constructions: u64,
});

/// Bounds the sum of the lengths of a fixed list of string variables.
///
/// The literal with index `i` is `len(x_1) + ... + len(x_k) <= threshold(i)`, where the thresholds
/// are strictly increasing (see [`StringsFmfOptions::threshold`]). Asserting the literals false
/// one after another therefore enumerates models of increasing total string length.
///
/// The variables are given once through [`SumLengthDecisionStrategy::initialize`]; variables which
/// are discovered later only take part in the strategy of the next session.
#[derive(Debug)]
pub struct SumLengthDecisionStrategy {
    options: StringsFmfOptions,
    variables: Vec<TermId>,
    initialized: bool,
    /// The sum of lengths, built on first use and scoped by the user context.
    sum: ContextCell<Option<TermId>>,
    /// The literals produced so far, at the position of their index.
    literals: Vec<TermId>,
    statistics: SumLengthStatistics,
}

impl SumLengthDecisionStrategy {
    const NAME: &'static str = "string_sum_len";

    /// Creates an uninitialized strategy.
    pub fn new(options: StringsFmfOptions) -> Self {
        Self {
            options,
            variables: vec![],
            initialized: false,
            sum: ContextCell::new(None),
            literals: vec![],
            statistics: SumLengthStatistics::default(),
        }
    }

    /// Fixes the string variables whose lengths are bounded.
    ///
    /// A strategy can only be initialized once.
    pub fn initialize(&mut self, variables: Vec<TermId>) -> Result<(), FmfError> {
        if self.initialized {
            return Err(FmfError::contract_violation(format!(
                "{} is already initialized",
                Self::NAME
            )));
        }

        debug!(
            "Initializing {} with {} variable(s)",
            Self::NAME,
            variables.len()
        );
        self.variables = variables;
        self.initialized = true;
        Ok(())
    }

    pub fn variables(&self) -> &[TermId] {
        &self.variables
    }

    /// The bound of the literal with the given `index`.
    pub fn threshold(&self, index: usize) -> Result<i64, FmfError> {
        self.options.threshold(index)
    }

    /// The sum of lengths, if it has been built in the current user context.
    pub fn sum_expression(&self, user_context: &Context) -> Option<TermId> {
        self.sum.read(user_context)
    }

    fn get_or_build_sum(
        &mut self,
        context: &mut StrategyContext<'_>,
    ) -> Result<Option<TermId>, FmfError> {
        let user_context = context.user_context();
        if let Some(sum) = self.sum.read(user_context) {
            return Ok(Some(sum));
        }
        if self.variables.is_empty() {
            return Ok(None);
        }

        let terms = context.terms_mut();
        let lengths = self
            .variables
            .iter()
            .map(|&variable| terms.string_length(variable))
            .collect::<Result<Vec<_>, _>>()?;
        let sum = terms.plus(lengths)?;

        debug!(
            "{} sum of lengths at user level {}: {}",
            Self::NAME,
            user_context.level(),
            terms.display(sum)
        );
        self.statistics.num_sum_constructions += 1;
        self.sum.set(user_context, Some(sum));
        Ok(Some(sum))
    }
}

impl DecisionStrategy for SumLengthDecisionStrategy {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn literal_for(
        &mut self,
        index: usize,
        context: &mut StrategyContext<'_>,
    ) -> Result<Option<TermId>, FmfError> {
        if !self.initialized {
            return Err(FmfError::contract_violation(format!(
                "{} was asked for literal {index} before it was initialized",
                Self::NAME
            )));
        }
        // Reject unrepresentable bounds before producing any of the literals leading up to it.
        let _ = self.threshold(index)?;

        let Some(sum) = self.get_or_build_sum(context)? else {
            return Ok(None);
        };

        while self.literals.len() <= index {
            let next_index = self.literals.len();
            let bound = self.threshold(next_index)?;
            let terms = context.terms_mut();
            let bound = terms.integer(bound);
            let literal = terms.less_or_equal(sum, bound)?;
            trace!(
                "{} literal {next_index}: {}",
                Self::NAME,
                terms.display(literal)
            );

            self.literals.push(literal);
            self.statistics.num_literals_created += 1;
        }

        fmf_assert_simple!(self.literals.len() > index);
        Ok(Some(self.literals[index]))
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
