//! Contains the protocol between the search engine and pluggable decision strategies.
//!
//! - A [`DecisionStrategy`] turns an index `i` into the `i`-th candidate decision literal. It does
//!   not decide which index is asked for next.
//! - The [`DecisionManager`] is the engine-side driver: it consults the registered strategies in
//!   [`StrategyPriority`] order and, per strategy, walks a cursor over the candidate literals
//!   using the current [`Valuation`]. The cursor lives in the SAT context, so it moves back when
//!   the engine backtracks.
mod decision_manager;
mod decision_strategy;
mod strategy_context;
mod valuation;

pub use decision_manager::DecisionManager;
pub use decision_strategy::DecisionStrategy;
pub use decision_strategy::StrategyPriority;
pub use strategy_context::StrategyContext;
pub use valuation::Valuation;
