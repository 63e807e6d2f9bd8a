//! Wire DTOs for the payment and deletion endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the gateway's JSON verbatim (`ResponseCode`,
//! `errorMessage`) because the backend relays the gateway reply unchanged.
//! Every response field is optional so partial or error-shaped bodies still
//! decode and can be classified instead of failing outright.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `ResponseCode` value signalling the gateway accepted the push request.
pub const ACCEPTED_RESPONSE_CODE: &str = "0";

/// Body of `POST /pay`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PayRequest {
    /// Subscriber phone number in international form (e.g. `2547...`).
    pub phone: String,
    /// Amount as typed by the user; the backend owns numeric validation.
    pub amount: String,
}

impl PayRequest {
    /// Build a request from raw form input, trimming both fields.
    ///
    /// Returns `None` when either field is blank so the caller can skip the
    /// submission without showing a message.
    pub fn from_form(phone: &str, amount: &str) -> Option<Self> {
        let phone = phone.trim();
        let amount = amount.trim();
        if phone.is_empty() || amount.is_empty() {
            return None;
        }
        Some(Self { phone: phone.to_owned(), amount: amount.to_owned() })
    }
}

/// Gateway reply relayed by `POST /pay`.
///
/// Success replies carry the request identifiers and `ResponseCode`; error
/// replies carry `errorCode`/`errorMessage` instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PayResponse {
    #[serde(rename = "ResponseCode", default, deserialize_with = "deserialize_code")]
    pub response_code: Option<String>,
    #[serde(rename = "ResponseDescription", default)]
    pub response_description: Option<String>,
    #[serde(rename = "CustomerMessage", default)]
    pub customer_message: Option<String>,
    #[serde(rename = "MerchantRequestID", default)]
    pub merchant_request_id: Option<String>,
    #[serde(rename = "CheckoutRequestID", default)]
    pub checkout_request_id: Option<String>,
    #[serde(rename = "errorCode", default)]
    pub error_code: Option<String>,
    #[serde(rename = "errorMessage", default)]
    pub error_message: Option<String>,
}

impl PayResponse {
    /// Whether the gateway accepted the request and pushed a PIN prompt.
    pub fn is_accepted(&self) -> bool {
        self.response_code.as_deref() == Some(ACCEPTED_RESPONSE_CODE)
    }

    /// Server-supplied failure text, if any non-blank text was sent.
    pub fn error_text(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Accept the code as a JSON string or number; some relays re-encode it.
fn deserialize_code<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(code)) => Ok(Some(code.trim().to_owned())),
        Some(serde_json::Value::Number(number)) => Ok(Some(number.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number response code")),
    }
}
