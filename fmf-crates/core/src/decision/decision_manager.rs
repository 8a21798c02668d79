use std::fmt::Debug;

use log::trace;

use super::DecisionStrategy;
use super::StrategyContext;
use super::StrategyPriority;
use super::Valuation;
use crate::basic_types::FmfError;
use crate::context::Context;
use crate::context::ContextCell;
use crate::create_statistics_struct;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;
use crate::terms::TermId;

create_statistics_struct!(
    /// Statistics of the [`DecisionManager`].
    DecisionManagerStatistics {
        /// The number of times the engine asked for a decision
        num_decision_requests: u64,
        /// The number of candidate literals passed over because they were assigned false
        num_literals_skipped: u64,
        /// The number of decisions returned to the engine
        num_decisions: u64,
});

struct RegisteredStrategy<'s> {
    priority: StrategyPriority,
    strategy: &'s mut dyn DecisionStrategy,
    /// The index of the first candidate literal which is not known to be false.
    cursor: ContextCell<usize>,
}

impl RegisteredStrategy<'_> {
    fn next_decision(
        &mut self,
        context: &mut StrategyContext<'_>,
        valuation: &dyn Valuation,
        statistics: &mut DecisionManagerStatistics,
    ) -> Result<Option<TermId>, FmfError> {
        let sat_context = context.sat_context();
        let mut index = self.cursor.read(sat_context);

        loop {
            let Some(literal) = self.strategy.literal_for(index, context)? else {
                return Ok(None);
            };

            match valuation.sat_value(literal) {
                None => return Ok(Some(literal)),
                Some(true) => return Ok(None),
                Some(false) => {
                    statistics.num_literals_skipped += 1;
                    index += 1;
                    self.cursor.set(sat_context, index);
                }
            }
        }
    }
}

/// Asks the registered [`DecisionStrategy`]s for the next decision.
///
/// Every registered strategy has a cursor which starts at index 0. When asked for a decision, the
/// manager goes over the strategies in [`StrategyPriority`] order (registration order for equal
/// priorities) and, for each one, looks at the literal under the cursor:
/// - if it is unassigned, it is returned as the decision;
/// - if it is assigned false, the cursor moves to the next index and the check is repeated;
/// - if it is assigned true, or the strategy has no literal, the strategy is done for now and the
///   next strategy is consulted.
///
/// The cursors are written in the SAT context, so backtracking over the assignment which moved a
/// cursor moves it back as well.
///
/// The manager borrows its strategies; it is meant to be built for a single solving session.
pub struct DecisionManager<'s> {
    registered: Vec<RegisteredStrategy<'s>>,
    statistics: DecisionManagerStatistics,
}

impl Debug for DecisionManager<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecisionManager")
            .field(
                "strategies",
                &self
                    .registered
                    .iter()
                    .map(|registered| (registered.priority, registered.strategy.name()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Default for DecisionManager<'_> {
    fn default() -> Self {
        Self {
            registered: vec![],
            statistics: DecisionManagerStatistics::default(),
        }
    }
}

impl<'s> DecisionManager<'s> {
    /// Registers `strategy` to be consulted with the given `priority`.
    pub fn register(&mut self, priority: StrategyPriority, strategy: &'s mut dyn DecisionStrategy) {
        trace!("Registering strategy {} with {priority:?}", strategy.name());
        let position = self
            .registered
            .partition_point(|registered| registered.priority <= priority);
        self.registered.insert(
            position,
            RegisteredStrategy {
                priority,
                strategy,
                cursor: ContextCell::new(0),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Returns the next literal the engine should decide on, or [`None`] if no registered
    /// strategy requires a decision in the current assignment.
    pub fn next_decision(
        &mut self,
        context: &mut StrategyContext<'_>,
        valuation: &dyn Valuation,
    ) -> Result<Option<TermId>, FmfError> {
        self.statistics.num_decision_requests += 1;

        for registered in &mut self.registered {
            if let Some(decision) =
                registered.next_decision(context, valuation, &mut self.statistics)?
            {
                self.statistics.num_decisions += 1;
                trace!(
                    "Strategy {} decides on {}",
                    registered.strategy.name(),
                    context.terms().display(decision)
                );
                return Ok(Some(decision));
            }
        }

        Ok(None)
    }

    /// The cursor of the first strategy registered under `name`.
    pub fn current_index(&self, name: &str, sat_context: &Context) -> Option<usize> {
        self.registered
            .iter()
            .find(|registered| registered.strategy.name() == name)
            .map(|registered| registered.cursor.read(sat_context))
    }

    pub fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger.clone());
        for registered in &self.registered {
            registered
                .strategy
                .log_statistics(statistic_logger.attach_to_prefix(registered.strategy.name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::HashMap;
    use crate::terms::Sort;
    use crate::terms::TermManager;

    /// Proposes a fixed list of literals.
    struct FixedLiterals {
        name: &'static str,
        literals: Vec<TermId>,
    }

    impl DecisionStrategy for FixedLiterals {
        fn name(&self) -> &str {
            self.name
        }

        fn is_initialized(&self) -> bool {
            true
        }

        fn literal_for(
            &mut self,
            index: usize,
            _context: &mut StrategyContext<'_>,
        ) -> Result<Option<TermId>, FmfError> {
            Ok(self.literals.get(index).copied())
        }
    }

    struct Uninitialized;

    impl DecisionStrategy for Uninitialized {
        fn name(&self) -> &str {
            "uninitialized"
        }

        fn is_initialized(&self) -> bool {
            false
        }

        fn literal_for(
            &mut self,
            _index: usize,
            _context: &mut StrategyContext<'_>,
        ) -> Result<Option<TermId>, FmfError> {
            Err(FmfError::contract_violation("not initialized"))
        }
    }

    #[derive(Default)]
    struct Assignment(HashMap<TermId, bool>);

    impl Valuation for Assignment {
        fn sat_value(&self, literal: TermId) -> Option<bool> {
            self.0.get(&literal).copied()
        }
    }

    fn booleans(terms: &mut TermManager, names: &[&str]) -> Vec<TermId> {
        names
            .iter()
            .map(|name| terms.new_variable(*name, Sort::Boolean))
            .collect()
    }

    #[test]
    fn unassigned_literal_is_returned_as_decision() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let literals = booleans(&mut terms, &["a", "b"]);
        let mut strategy = FixedLiterals {
            name: "fixed",
            literals: literals.clone(),
        };

        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        let mut context = StrategyContext::new(&sat_context, &user_context, &mut terms);
        let decision = manager
            .next_decision(&mut context, &Assignment::default())
            .expect("strategy is initialized");

        assert_eq!(Some(literals[0]), decision);
    }

    #[test]
    fn literals_assigned_false_are_skipped() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let literals = booleans(&mut terms, &["a", "b", "c"]);
        let mut strategy = FixedLiterals {
            name: "fixed",
            literals: literals.clone(),
        };
        let mut assignment = Assignment::default();
        let _ = assignment.0.insert(literals[0], false);
        let _ = assignment.0.insert(literals[1], false);

        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        let mut context = StrategyContext::new(&sat_context, &user_context, &mut terms);
        let decision = manager
            .next_decision(&mut context, &assignment)
            .expect("strategy is initialized");

        assert_eq!(Some(literals[2]), decision);
        assert_eq!(Some(2), manager.current_index("fixed", &sat_context));
    }

    #[test]
    fn literal_assigned_true_satisfies_the_strategy() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let literals = booleans(&mut terms, &["a", "b"]);
        let mut strategy = FixedLiterals {
            name: "fixed",
            literals: literals.clone(),
        };
        let mut assignment = Assignment::default();
        let _ = assignment.0.insert(literals[0], true);

        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        let mut context = StrategyContext::new(&sat_context, &user_context, &mut terms);
        let decision = manager
            .next_decision(&mut context, &assignment)
            .expect("strategy is initialized");

        assert_eq!(None, decision);
    }

    #[test]
    fn cursor_moves_back_on_backtracking() {
        let mut sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let literals = booleans(&mut terms, &["a", "b"]);
        let mut strategy = FixedLiterals {
            name: "fixed",
            literals: literals.clone(),
        };
        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        sat_context.push();
        let mut assignment = Assignment::default();
        let _ = assignment.0.insert(literals[0], false);
        let decision = manager
            .next_decision(
                &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
                &assignment,
            )
            .expect("strategy is initialized");
        assert_eq!(Some(literals[1]), decision);

        sat_context.pop().expect("level 1 is open");
        let decision = manager
            .next_decision(
                &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
                &Assignment::default(),
            )
            .expect("strategy is initialized");
        assert_eq!(Some(literals[0]), decision);
        assert_eq!(Some(0), manager.current_index("fixed", &sat_context));
    }

    #[test]
    fn strategies_are_consulted_in_priority_order() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let heuristic_literals = booleans(&mut terms, &["h"]);
        let required_literals = booleans(&mut terms, &["r"]);
        let mut heuristic = FixedLiterals {
            name: "heuristic",
            literals: heuristic_literals.clone(),
        };
        let mut required = FixedLiterals {
            name: "required",
            literals: required_literals.clone(),
        };
        let mut assignment = Assignment::default();

        let mut manager = DecisionManager::default();
        assert!(manager.is_empty());
        manager.register(StrategyPriority::Heuristic, &mut heuristic);
        manager.register(StrategyPriority::Required, &mut required);
        assert_eq!(2, manager.len());
        assert!(!manager.is_empty());

        let decision = manager
            .next_decision(
                &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
                &assignment,
            )
            .expect("strategies are initialized");
        assert_eq!(Some(required_literals[0]), decision);

        let _ = assignment.0.insert(required_literals[0], true);
        let decision = manager
            .next_decision(
                &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
                &assignment,
            )
            .expect("strategies are initialized");
        assert_eq!(Some(heuristic_literals[0]), decision);
    }

    #[test]
    fn exhausted_strategies_yield_no_decision() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let mut strategy = FixedLiterals {
            name: "empty",
            literals: vec![],
        };
        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        let decision = manager
            .next_decision(
                &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
                &Assignment::default(),
            )
            .expect("strategy is initialized");

        assert_eq!(None, decision);
    }

    #[test]
    fn uninitialized_strategy_errors_are_propagated() {
        let sat_context = Context::default();
        let user_context = Context::default();
        let mut terms = TermManager::default();
        let mut strategy = Uninitialized;
        let mut manager = DecisionManager::default();
        manager.register(StrategyPriority::Heuristic, &mut strategy);

        let result = manager.next_decision(
            &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
            &Assignment::default(),
        );

        assert!(matches!(result, Err(FmfError::ContractViolation(_))));
    }
}
