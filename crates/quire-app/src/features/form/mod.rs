//! Form feature: the single article draft.

mod state;
pub mod update;

pub use state::{
    Draft, DraftError, DraftField, DraftMode, MIN_CHARS, TEXT_MAX_CHARS, TITLE_MAX_CHARS,
};
