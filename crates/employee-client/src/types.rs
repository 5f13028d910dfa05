//! Employee API types.

use crate::error::EmployeeError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registration form submitted to `/register`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RegistrationInput {
    pub email: String,
    pub name: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
}

impl RegistrationInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// One-time code paired with the email it was sent to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OtpInput {
    pub otp: String,
    pub email: String,
}

impl OtpInput {
    pub fn new(otp: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            otp: otp.into(),
            email: email.into(),
        }
    }
}

/// Employee returned by a successful OTP verification.
///
/// The response object is kept whole so the record can be passed along
/// exactly as the service sent it. Only `email` is guaranteed; the display
/// fields are read leniently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EmployeeRecord {
    fields: Map<String, Value>,
}

impl EmployeeRecord {
    /// Build a record from a parsed response body.
    ///
    /// Anything that is not an object with a non-empty string `email` is
    /// rejected with [`EmployeeError::MissingEmail`].
    pub fn from_value(value: Value) -> Result<Self, EmployeeError> {
        let Value::Object(fields) = value else {
            return Err(EmployeeError::MissingEmail);
        };

        let has_email = fields
            .get("email")
            .and_then(Value::as_str)
            .is_some_and(|email| !email.is_empty());

        if !has_email {
            return Err(EmployeeError::MissingEmail);
        }

        Ok(Self { fields })
    }

    pub fn email(&self) -> &str {
        self.fields
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn name(&self) -> Option<String> {
        self.text("name")
    }

    pub fn phone_number(&self) -> Option<String> {
        self.text("phoneNumber")
    }

    /// Raw access to any field of the response.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    // Strings as-is, other scalars in their JSON form, null as absent.
    fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

/// How the OTP verification query string is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryEncoding {
    /// Percent-encode `otp` and `email`.
    #[default]
    Encoded,
    /// Interpolate the values untouched, matching the legacy web client.
    /// Values containing `&`, `#` or `=` corrupt the request.
    Raw,
}
