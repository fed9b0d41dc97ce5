// --- File: crates/sevenbarber_booking/src/flow.rs ---
//! The booking state machine.
//!
//! ```text
//! Idle --submit(valid)--> AwaitingPayment --confirm_payment--> Ready --complete(ok)--> Idle
//! Idle --submit(valid, apprentice)--> Ready
//! Idle --submit(invalid)--> Idle
//! ```
//!
//! A failed `complete` leaves the flow in `Ready` with the same request, so
//! calling it again sends an identical event.

use crate::error::BookingError;
use crate::models::{BookingForm, BookingRequest};
use serde::Serialize;
use sevenbarber_common::services::{BoxedError, CalendarEvent, CalendarEventResult, CalendarService};
use tracing::{debug, info, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum BookingStage {
    Idle,
    AwaitingPayment,
    Ready,
}

/// Where the calendar events go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSettings {
    pub calendar_id: String,
    pub time_zone: String,
}

/// Per-request booking state: the submitted request plus the two flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFlow {
    request: Option<BookingRequest>,
    show_payment: bool,
    payment_confirmed: bool,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> BookingStage {
        match &self.request {
            Some(request) if request.barber.is_apprentice() || self.payment_confirmed => {
                BookingStage::Ready
            }
            Some(_) if self.show_payment => BookingStage::AwaitingPayment,
            _ => BookingStage::Idle,
        }
    }

    pub fn request(&self) -> Option<&BookingRequest> {
        self.request.as_ref()
    }

    /// Whether the QR / price screen is showing.
    pub fn show_payment(&self) -> bool {
        self.show_payment
    }

    pub fn payment_confirmed(&self) -> bool {
        self.payment_confirmed
    }

    /// Price to display while awaiting payment.
    pub fn price(&self) -> Option<u32> {
        self.request.as_ref().and_then(BookingRequest::amount_due)
    }

    /// Submits the form. A rejected form leaves the flow untouched.
    ///
    /// A valid form replaces any earlier request and starts over, the same
    /// as pressing "Book" again after editing the fields.
    pub fn submit(&mut self, form: &BookingForm) -> Result<BookingStage, BookingError> {
        let request = form.validate().map_err(|err| {
            warn!("Booking form rejected: {}", err);
            err
        })?;

        self.show_payment = request.barber.requires_payment();
        self.payment_confirmed = false;
        self.request = Some(request);

        let stage = self.stage();
        debug!("Booking submitted, stage now {:?}", stage);
        Ok(stage)
    }

    /// Records the customer's claim that they paid. Nothing is verified.
    pub fn confirm_payment(&mut self) -> Result<BookingStage, BookingError> {
        let stage = self.stage();
        if stage != BookingStage::AwaitingPayment {
            return Err(BookingError::InvalidTransition {
                from: stage,
                action: "confirm payment",
            });
        }
        self.payment_confirmed = true;
        Ok(self.stage())
    }

    /// The event `complete` would send, available once the flow is `Ready`.
    pub fn calendar_event(&self, time_zone: &str) -> Result<CalendarEvent, BookingError> {
        match (&self.request, self.stage()) {
            (Some(request), BookingStage::Ready) => Ok(CalendarEvent {
                summary: request.summary(),
                description: request.description(),
                start: request.start(),
                end: request.end(),
                time_zone: time_zone.to_string(),
            }),
            (_, stage) => Err(BookingError::InvalidTransition {
                from: stage,
                action: "create the event",
            }),
        }
    }

    /// Creates the calendar event.
    ///
    /// On success the flow resets to `Idle`. On failure it is left as is.
    pub async fn complete<S>(
        &mut self,
        calendar: &S,
        settings: &BookingSettings,
    ) -> Result<CalendarEventResult, BookingError>
    where
        S: CalendarService + ?Sized,
    {
        let event = self.calendar_event(&settings.time_zone)?;
        let summary = event.summary.clone();

        match calendar.create_event(&settings.calendar_id, event).await {
            Ok(result) => {
                info!("Booking recorded: {} ({:?})", summary, result.event_id);
                *self = Self::default();
                Ok(result)
            }
            Err(err) => {
                warn!("Booking not recorded, kept for retry: {}: {}", summary, err);
                Err(BookingError::Calendar(BoxedError(Box::new(err))))
            }
        }
    }
}
