//! Headless application core for quire.
//!
//! Elm-style: `update` mutates `AppState` and returns `UiEffect`s;
//! `AppRuntime` executes them and feeds completions back as `UiEvent`s.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
mod operation;
pub mod runtime;
pub mod state;
pub mod update;

pub use effects::UiEffect;
pub use events::{CredentialAction, Credentials, UiEvent};
pub use runtime::AppRuntime;
pub use state::{AppState, StatusLevel, StatusMessage};
