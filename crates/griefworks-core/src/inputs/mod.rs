//! User input domain module.
//!
//! - `model`: the submitted form (`UserInputs`), its unvalidated draft and
//!   the two categorical selections.

mod model;

pub use model::{CauseOfLoss, Relationship, UserInputs, UserInputsDraft};
