//! Payment submission status shown under the payment form.
//!
//! DESIGN
//! ======
//! Every submission attempt ends in exactly one terminal status, and every
//! status renders to exactly one message, so the UI never shows a blank or
//! stale line after a failed call.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use crate::net::api::ApiError;
use crate::net::types::PayResponse;

/// Fallback reason when the server supplied no usable error text.
pub const GENERIC_FAILURE: &str = "Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Request in flight.
    Processing,
    /// Gateway accepted; the PIN prompt is on the user's phone.
    PromptSent,
    /// Terminal failure with the reason shown to the user.
    Failed(String),
}

impl PaymentStatus {
    /// Map the outcome of one `/pay` call to its terminal status.
    pub fn from_result(result: &Result<PayResponse, ApiError>) -> Self {
        match result {
            Ok(resp) if resp.is_accepted() => Self::PromptSent,
            Ok(resp) => Self::Failed(resp.error_text().unwrap_or(GENERIC_FAILURE).to_owned()),
            Err(ApiError::Rejected(Some(text))) => Self::Failed(text.clone()),
            Err(_) => Self::Failed(GENERIC_FAILURE.to_owned()),
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, Self::Processing)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// User-facing status line; empty only while idle.
    pub fn message(&self) -> String {
        match self {
            Self::Idle => String::new(),
            Self::Processing => "Processing payment... please check your phone 📱".to_owned(),
            Self::PromptSent => "Payment prompt sent! Enter your M-Pesa PIN.".to_owned(),
            Self::Failed(reason) => format!("Payment failed: {reason}"),
        }
    }
}
