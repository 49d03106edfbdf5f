//! HTTP client for the booking persistence API.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};
use reqwest_middleware::ClientWithMiddleware;

use crate::api::models::{ApiFailure, BookingConfirmation, BookingRequest};
use crate::client_trait::BookingApi;
use crate::error::ApiError;
use crate::http::{build_http_client, build_retry_client};

/// Client for the booking persistence API. One operation: create a booking.
#[derive(Debug, Clone)]
pub struct BookingApiClient {
    client: Arc<ClientWithMiddleware>,
    base_url: String,
    bearer_token: Option<String>,
}

impl BookingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = build_http_client().expect("booking client");
        let retry_client = build_retry_client(client);

        BookingApiClient {
            client: Arc::new(retry_client),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token: None,
        }
    }

    /// Attach the session token sent in the Authorization header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.bearer_token = token;
    }
}

#[async_trait]
impl BookingApi for BookingApiClient {
    async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, ApiError> {
        let url = format!("{}/bookings", self.base_url);
        info!(
            "Creating booking for destination {} ({} visitor(s))",
            request.destination_id, request.visitors
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(token) = &self.bearer_token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            let confirmation = response.json::<BookingConfirmation>().await?;
            info!(
                "Booking accepted{}",
                confirmation
                    .booking_id
                    .as_deref()
                    .map(|id| format!(" with id {id}"))
                    .unwrap_or_default()
            );
            return Ok(confirmation);
        }

        let body = response.bytes().await?;
        let message = match serde_json::from_slice::<ApiFailure>(&body) {
            Ok(failure) => failure.message,
            Err(_) => String::from_utf8_lossy(&body).into_owned(),
        };
        error!("Booking API rejected request ({status}): {message}");
        Err(ApiError::Rejected(message))
    }
}
