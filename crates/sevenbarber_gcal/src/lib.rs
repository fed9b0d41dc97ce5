// File: crates/sevenbarber_gcal/src/lib.rs
pub mod auth;
pub mod service;

pub use auth::{create_calendar_hub, CredentialError, CredentialSource, HubType};
pub use service::{GcalServiceError, GoogleCalendarService};
