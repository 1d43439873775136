//! Booking domain models.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::catalog::CreativeId;
use crate::validation::Field;

/// The single pending creative+service selection awaiting submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub creative_id: CreativeId,
    pub service: String,
}

impl BookingDraft {
    pub fn new(creative_id: impl Into<CreativeId>, service: impl Into<String>) -> Self {
        Self {
            creative_id: creative_id.into(),
            service: service.into(),
        }
    }
}

/// Fields entered on the booking form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub service: String,
    pub date: String,
    pub budget: String,
    pub message: String,
    pub location: String,
}

impl BookingForm {
    /// The form as validator input. Every field is required.
    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::required("service", &self.service),
            Field::required("date", &self.date),
            Field::required("budget", &self.budget),
            Field::required("message", &self.message),
            Field::required("location", &self.location),
        ]
    }
}

/// Payload sent to the booking backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub creative_id: CreativeId,
    pub service: String,
    pub date: String,
    pub budget: String,
    pub message: String,
    pub location: String,
}

impl BookingRequest {
    pub fn new(creative_id: CreativeId, form: BookingForm) -> Self {
        Self {
            creative_id,
            service: form.service,
            date: form.date,
            budget: form.budget,
            message: form.message,
            location: form.location,
        }
    }
}

/// Backend acknowledgement of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub booking_id: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    Pending,
}

/// A recorded booking, as kept in the persistent booking list.
///
/// `creative` is the display name, not the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub creative: String,
    pub service: String,
    pub date: String,
    pub status: BookingStatus,
}
