//! Status of the admin delete action.

#[cfg(test)]
#[path = "deletion_test.rs"]
mod deletion_test;

use crate::net::api::ApiError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeletionStatus {
    #[default]
    Idle,
    Deleting,
    Deleted,
    Failed(String),
}

impl DeletionStatus {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Deleted,
            Err(ApiError::Status(code)) => Self::Failed(format!("delete failed: {code}")),
            Err(e) => Self::Failed(format!("delete failed: {e}")),
        }
    }

    /// In-flight and completed deletes keep the control disabled.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Deleting | Self::Deleted)
    }

    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Deleting => "Deleting...".to_owned(),
            Self::Deleted => "Celebrity deleted.".to_owned(),
            Self::Failed(reason) => reason.clone(),
        }
    }
}

/// Prompt shown before the destructive request is sent.
pub fn confirm_prompt(id: &str) -> String {
    format!("Delete celebrity {id}? This cannot be undone.")
}
