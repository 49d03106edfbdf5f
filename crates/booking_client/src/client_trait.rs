use async_trait::async_trait;

use crate::api::models::{BookingConfirmation, BookingRequest};
use crate::error::ApiError;

/// Seam over the booking persistence API, so orchestration can be tested
/// without a network.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Submit one booking. Failure carries the API's free-text message.
    async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingConfirmation, ApiError>;
}
