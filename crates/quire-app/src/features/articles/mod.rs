//! Articles feature: the local collection and its four server operations.

mod state;
pub mod update;

pub use state::ArticlesState;
