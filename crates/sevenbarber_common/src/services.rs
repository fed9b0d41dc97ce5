// --- File: crates/sevenbarber_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The booking flow only talks to the calendar through [`CalendarService`],
//! so handlers and tests can swap the Google implementation for an in-memory one.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for calendar service operations.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a calendar event. Every call inserts a new event.
    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// Calendar service with the error type erased, as stored in handler state.
pub type SharedCalendarService = Arc<dyn CalendarService<Error = BoxedError>>;

/// Adapts any [`CalendarService`] to the [`BoxedError`] error type.
pub struct ErasedCalendarService<S>(pub S);

impl<S: CalendarService> CalendarService for ErasedCalendarService<S> {
    type Error = BoxedError;

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let inner = self.0.create_event(calendar_id, event);
        Box::pin(async move { inner.await.map_err(|e| BoxedError(Box::new(e))) })
    }
}

/// Wraps a concrete calendar service for use as [`SharedCalendarService`].
pub fn share_calendar_service<S>(service: S) -> SharedCalendarService
where
    S: CalendarService + 'static,
{
    Arc::new(ErasedCalendarService(service))
}

/// An event to insert into the calendar.
///
/// Start and end are wall-clock times in `time_zone`, the way the customer picked them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// The summary or title of the event.
    pub summary: String,
    /// The description of the event.
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// IANA time zone identifier, e.g. "America/Guayaquil".
    pub time_zone: String,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    /// The ID of the event.
    pub event_id: Option<String>,
    /// The status of the event.
    pub status: String,
}
