// --- File: crates/sevenbarber_common/src/lib.rs ---

pub mod error; // Error handling
pub mod logging; // Logging utilities
pub mod services; // Service abstractions

pub use error::{
    asset_error, external_service_error, Context, HttpStatusCode, SevenBarberError,
};

pub use logging::{env_filter, init_with_level, log_error, parse_level};

pub use services::{
    share_calendar_service, BoxFuture, BoxedError, CalendarEvent, CalendarEventResult,
    CalendarService, SharedCalendarService,
};
