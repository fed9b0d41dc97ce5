// --- File: crates/sevenbarber_booking/src/error.rs ---
use crate::flow::BookingStage;
use sevenbarber_common::{external_service_error, BoxedError, SevenBarberError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
    #[error("Cannot {action} while the booking is {from:?}")]
    InvalidTransition {
        from: BookingStage,
        action: &'static str,
    },
    #[error("Error creating event: {0}")]
    Calendar(#[source] BoxedError),
}

impl BookingError {
    /// True for errors the customer fixes by editing the form.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BookingError::MissingFields(_) | BookingError::InvalidField { .. }
        )
    }
}

impl From<BookingError> for SevenBarberError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Calendar(source) => external_service_error("Google Calendar", source),
            BookingError::InvalidTransition { .. } => SevenBarberError::StateError(err.to_string()),
            BookingError::MissingFields(_) | BookingError::InvalidField { .. } => {
                SevenBarberError::ValidationError(err.to_string())
            }
        }
    }
}
