//! Session feature: login state machine and navigation.

mod state;
pub mod update;

pub use state::{SessionState, View};
pub use update::FAREWELL_MESSAGE;
