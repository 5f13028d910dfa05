//! Employee management HTTP client.

use crate::api::EmployeeApi;
use crate::error::EmployeeError;
use crate::types::*;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument, warn};
use urlencoding::encode;

/// Production endpoint of the employee-management service.
pub const DEFAULT_BASE_URL: &str = "https://employee-repo.onrender.com/employee-management";

/// Employee management REST API client.
#[derive(Clone)]
pub struct EmployeeClient {
    client: Client,
    base_url: String,
    query_encoding: QueryEncoding,
}

impl EmployeeClient {
    /// Create a new client. Without a timeout a stalled request waits forever.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, EmployeeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let base_url: String = base_url.into();

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            query_encoding: QueryEncoding::default(),
        })
    }

    /// Choose how OTP verification parameters are placed in the query string.
    pub fn with_query_encoding(mut self, encoding: QueryEncoding) -> Self {
        self.query_encoding = encoding;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the OTP verification URL.
    pub fn authenticate_otp_url(&self, input: &OtpInput) -> String {
        match self.query_encoding {
            QueryEncoding::Encoded => format!(
                "{}/authenticate-otp?otp={}&email={}",
                self.base_url,
                encode(&input.otp),
                encode(&input.email)
            ),
            QueryEncoding::Raw => format!(
                "{}/authenticate-otp?otp={}&email={}",
                self.base_url, input.otp, input.email
            ),
        }
    }

    async fn rejection(response: Response) -> EmployeeError {
        let status = response.status();
        let message = response.text().await.unwrap_or_default();
        EmployeeError::Api {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl EmployeeApi for EmployeeClient {
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register(&self, input: &RegistrationInput) -> Result<(), EmployeeError> {
        let response = self
            .client
            .post(format!("{}/register", self.base_url))
            .json(input)
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::rejection(response).await;
            warn!("Registration rejected: {}", err);
            return Err(err);
        }

        debug!("Registration accepted");
        Ok(())
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn authenticate_otp(&self, input: &OtpInput) -> Result<EmployeeRecord, EmployeeError> {
        let url = self.authenticate_otp_url(input);
        debug!(encoding = ?self.query_encoding, "Sending OTP verification");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let err = Self::rejection(response).await;
            warn!("OTP verification rejected: {}", err);
            return Err(err);
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;
        let record = EmployeeRecord::from_value(value)?;

        debug!("OTP verified");
        Ok(record)
    }
}
