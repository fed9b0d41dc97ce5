// --- File: crates/sevenbarber_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! This module provides an implementation of the CalendarService trait for Google Calendar.

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use google_calendar3::api::{Event, EventDateTime};
use sevenbarber_common::services::{
    BoxFuture, CalendarEvent, CalendarEventResult, CalendarService,
};
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::auth::HubType;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Error creating event in Google Calendar: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Local time {0} is not a single instant in {1}")]
    AmbiguousLocalTime(NaiveDateTime, String),
    #[error("End time must be after start time")]
    InvalidInterval,
}

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarService {
    /// Create a new Google Calendar service.
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }
}

fn event_date_time(
    local: NaiveDateTime,
    tz: Tz,
    time_zone: &str,
) -> Result<EventDateTime, GcalServiceError> {
    let instant = tz
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| GcalServiceError::AmbiguousLocalTime(local, time_zone.to_string()))?;

    Ok(EventDateTime {
        date_time: Some(instant.with_timezone(&Utc)),
        time_zone: Some(time_zone.to_string()),
        ..Default::default()
    })
}

/// Builds the `events.insert` payload for a booking.
///
/// Both ends carry the event's time zone so Google renders the times the way
/// the customer picked them.
pub fn build_event(event: &CalendarEvent) -> Result<Event, GcalServiceError> {
    if event.end <= event.start {
        return Err(GcalServiceError::InvalidInterval);
    }
    let tz = Tz::from_str(&event.time_zone)
        .map_err(|_| GcalServiceError::InvalidTimeZone(event.time_zone.clone()))?;

    Ok(Event {
        summary: Some(event.summary.clone()),
        description: Some(event.description.clone()),
        start: Some(event_date_time(event.start, tz, &event.time_zone)?),
        end: Some(event_date_time(event.end, tz, &event.time_zone)?),
        ..Default::default()
    })
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Inserts a new event into the calendar.
    ///
    /// There is no idempotency key: calling this twice with the same event
    /// creates two events.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            let new_event = build_event(&event)?;

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            info!("Event created: {}", event.summary);

            Ok(CalendarEventResult {
                event_id: created_event.id,
                status: created_event.status.unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}
