//! # fmf-core
//! Context-scoped state and decision strategies for finite model finding over strings.
//!
//! A search engine which wants to find models with short strings first combines the following
//! pieces:
//! - two [`Context`](context::Context)s, one which follows the assertion levels of the user and
//!   one which follows the decisions of the SAT search;
//! - a [`TermManager`](terms::TermManager) in which all terms are hash-consed;
//! - the [`StringsFmf`](strings::StringsFmf) manager, which is told about the string variables of
//!   the problem and which hands out a
//!   [`SumLengthDecisionStrategy`](strings::SumLengthDecisionStrategy) per solving session;
//! - a [`DecisionManager`](decision::DecisionManager), which asks the registered strategies for
//!   the next decision given the current assignment.
//!
//! # Example
//! ```rust
//! # use fmf_core::context::Context;
//! # use fmf_core::decision::DecisionManager;
//! # use fmf_core::decision::StrategyContext;
//! # use fmf_core::decision::StrategyPriority;
//! # use fmf_core::decision::Valuation;
//! # use fmf_core::strings::StringsFmf;
//! # use fmf_core::strings::StringsFmfOptions;
//! # use fmf_core::terms::SkolemCache;
//! # use fmf_core::terms::Sort;
//! # use fmf_core::terms::TermId;
//! # use fmf_core::terms::TermManager;
//! struct NothingAssigned;
//!
//! impl Valuation for NothingAssigned {
//!     fn sat_value(&self, _literal: TermId) -> Option<bool> {
//!         None
//!     }
//! }
//!
//! let sat_context = Context::default();
//! let user_context = Context::default();
//! let mut terms = TermManager::default();
//! let x = terms.new_variable("x", Sort::String);
//! let y = terms.new_variable("y", Sort::String);
//!
//! let mut strings_fmf = StringsFmf::new(StringsFmfOptions::default(), SkolemCache::default());
//! strings_fmf.on_variable_seen(&user_context, &terms, x);
//! strings_fmf.on_variable_seen(&user_context, &terms, y);
//! strings_fmf.begin_session(&user_context)?;
//!
//! let mut decision_manager = DecisionManager::default();
//! decision_manager.register(
//!     StrategyPriority::FiniteModelFinding,
//!     strings_fmf.active_strategy_mut()?,
//! );
//!
//! let decision = decision_manager
//!     .next_decision(
//!         &mut StrategyContext::new(&sat_context, &user_context, &mut terms),
//!         &NothingAssigned,
//!     )?
//!     .expect("the sum of lengths is not bounded yet");
//!
//! assert_eq!(
//!     terms.display(decision).to_string(),
//!     "(<= (+ (str.len x) (str.len y)) 0)"
//! );
//! # Ok::<(), fmf_core::FmfError>(())
//! ```
pub(crate) mod basic_types;
pub mod containers;
pub mod context;
pub mod decision;
#[doc(hidden)]
pub mod fmf_asserts;
pub mod statistics;
pub mod strings;
pub mod terms;

pub use convert_case;

pub use crate::basic_types::FmfError;
