//! Request and response models for the booking API.

use serde::{Deserialize, Serialize};

/// Payload for the create-booking operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRequest {
    pub destination_id: String,
    /// ISO-8601 calendar date.
    pub date: String,
    pub visitors: u32,
    pub tour_type: String,
    /// Derived total; the server re-checks it, but the client sends what it
    /// displayed.
    pub total_price: f64,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
}

/// Successful create-booking response. The API guarantees nothing beyond a
/// 2xx status, so every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfirmation {
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body shape. The API reports failures as free text under either
/// a `message` or an `error` key.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiFailure {
    #[serde(alias = "error")]
    pub message: String,
}
