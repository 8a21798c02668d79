//! A minimal arena of hash-consed terms.
//!
//! Terms are referred to by [`TermId`] handles; structurally identical terms built through the
//! [`TermManager`] receive the same handle, so comparing and hashing terms is comparing and hashing
//! handles. Only the constructs needed to state bounds on string lengths are supported.
mod skolem_cache;
mod term;
mod term_manager;

pub use skolem_cache::SkolemCache;
pub use skolem_cache::SkolemPurpose;
pub use term::Sort;
pub use term::Term;
pub use term::TermId;
pub use term_manager::TermDisplay;
pub use term_manager::TermManager;
