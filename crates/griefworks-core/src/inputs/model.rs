use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{GriefError, Result};

/// Who the user lost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Relationship {
    Parent,
    Child,
    Sibling,
    Partner,
    Friend,
    Other,
}

impl Relationship {
    /// All options in form display order.
    pub fn options() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// How the loss happened.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum CauseOfLoss {
    Illness,
    Accident,
    Suicide,
    Natural,
    Murder,
    Other,
}

impl CauseOfLoss {
    /// All options in form display order.
    pub fn options() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// The latest form submission.
///
/// Sent as the request body of every remote call, and stored in the session
/// under `userInputs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInputs {
    pub user_thoughts: String,
    pub relationship: Relationship,
    pub cause_of_loss: CauseOfLoss,
}

impl UserInputs {
    pub fn new(
        user_thoughts: impl Into<String>,
        relationship: Relationship,
        cause_of_loss: CauseOfLoss,
    ) -> Self {
        Self {
            user_thoughts: user_thoughts.into(),
            relationship,
            cause_of_loss,
        }
    }

    /// Returns the payload actually sent over the wire (thoughts trimmed).
    pub fn to_request(&self) -> Self {
        Self {
            user_thoughts: self.user_thoughts.trim().to_string(),
            relationship: self.relationship,
            cause_of_loss: self.cause_of_loss,
        }
    }
}

/// Form state before submission: any field may still be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserInputsDraft {
    pub user_thoughts: String,
    pub relationship: Option<Relationship>,
    pub cause_of_loss: Option<CauseOfLoss>,
}

impl UserInputsDraft {
    /// Turns the draft into a submission.
    ///
    /// # Errors
    ///
    /// Returns `GriefError::Validation` if the thoughts are blank or either
    /// selection is missing.
    pub fn validate(&self) -> Result<UserInputs> {
        match (self.relationship, self.cause_of_loss) {
            (Some(relationship), Some(cause_of_loss)) if !self.user_thoughts.trim().is_empty() => {
                Ok(UserInputs {
                    user_thoughts: self.user_thoughts.clone(),
                    relationship,
                    cause_of_loss,
                })
            }
            _ => Err(GriefError::validation(
                "All fields are required to provide personalized support.",
            )),
        }
    }
}

impl From<UserInputs> for UserInputsDraft {
    fn from(inputs: UserInputs) -> Self {
        Self {
            user_thoughts: inputs.user_thoughts,
            relationship: Some(inputs.relationship),
            cause_of_loss: Some(inputs.cause_of_loss),
        }
    }
}
