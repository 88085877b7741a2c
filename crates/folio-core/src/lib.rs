//! Portfolio Widget Core
//!
//! Pure state and contract logic for the portfolio page widgets: label
//! rotation, decorative mark generation, and the action model that binds
//! interactive controls to their navigation targets. Nothing in this crate
//! touches the DOM; the site crate supplies the environment.

pub mod action;
pub mod cycle;
pub mod marks;

use thiserror::Error;

pub use action::{Action, Navigator};
pub use cycle::{LabelCycle, ROTATION_INTERVAL};
pub use marks::{scatter, Mark, MARK_COUNT, MARK_PULSE_SECS, MARK_STAGGER_SECS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("label rotation requires at least one label")]
    EmptyLabels,
}

pub type CoreResult<T> = Result<T, CoreError>;
