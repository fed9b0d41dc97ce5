// --- File: crates/services/sevenbarber_backend/src/service_factory.rs ---
//! Builds the external services the booking handlers depend on.

use sevenbarber_common::services::share_calendar_service;
use sevenbarber_common::SharedCalendarService;
use sevenbarber_config::GcalConfig;
use sevenbarber_gcal::{create_calendar_hub, CredentialError, GoogleCalendarService};
use std::sync::Arc;
use tracing::info;

/// Authenticates against Google Calendar and wraps the hub for the handlers.
///
/// Credentials come from the configured environment variable when it is set,
/// otherwise from the key file.
pub async fn create_calendar_service(
    gcal: &GcalConfig,
) -> Result<SharedCalendarService, CredentialError> {
    let hub = create_calendar_hub(gcal).await?;
    info!(
        "Google Calendar ready (calendar: {}, time zone: {})",
        gcal.calendar_id, gcal.time_zone
    );

    Ok(share_calendar_service(GoogleCalendarService::new(Arc::new(
        hub,
    ))))
}
