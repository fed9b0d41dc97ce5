//! In-memory calendar and fixtures for the unit tests.

use crate::handlers::BookingState;
use crate::models::{BookingForm, BookingRequest};
use sevenbarber_common::services::{
    share_calendar_service, BoxFuture, CalendarEvent, CalendarEventResult, CalendarService,
};
use sevenbarber_config::{AppConfig, GcalConfig, LoggingConfig, ServerConfig, ShopConfig};
use std::sync::{Arc, Mutex};

#[derive(Debug, thiserror::Error)]
#[error("calendar unavailable")]
pub struct Unavailable;

#[derive(Default)]
struct Recorder {
    attempts: Vec<(String, CalendarEvent)>,
    created: Vec<CalendarEvent>,
    failures_left: usize,
}

/// Calendar that records every call. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingCalendarService {
    inner: Arc<Mutex<Recorder>>,
}

impl RecordingCalendarService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A calendar whose first `failures` calls fail.
    pub fn failing(failures: usize) -> Self {
        let service = Self::default();
        service.inner.lock().unwrap().failures_left = failures;
        service
    }

    pub fn attempts(&self) -> Vec<(String, CalendarEvent)> {
        self.inner.lock().unwrap().attempts.clone()
    }

    pub fn created(&self) -> Vec<CalendarEvent> {
        self.inner.lock().unwrap().created.clone()
    }
}

impl CalendarService for RecordingCalendarService {
    type Error = Unavailable;

    fn create_event(
        &self,
        calendar_id: &str,
        event: CalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();

        Box::pin(async move {
            let mut recorder = self.inner.lock().unwrap();
            recorder.attempts.push((calendar_id, event.clone()));

            if recorder.failures_left > 0 {
                recorder.failures_left -= 1;
                return Err(Unavailable);
            }

            recorder.created.push(event);
            Ok(CalendarEventResult {
                event_id: Some(format!("evt{}", recorder.created.len())),
                status: "confirmed".to_string(),
            })
        })
    }
}

// Rebuilds the posted form a request was validated from.
impl From<&BookingRequest> for BookingForm {
    fn from(request: &BookingRequest) -> Self {
        BookingForm {
            name: request.name.clone(),
            contact: request.contact.clone(),
            email: request.email.clone().unwrap_or_default(),
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time.label().to_string(),
            service: request.service.label().to_string(),
            barber: request.barber.label().to_string(),
            note: request.note.clone().unwrap_or_default(),
        }
    }
}

pub fn test_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8501,
        },
        gcal: GcalConfig {
            calendar_id: "shop-calendar".to_string(),
            key_path: "credentials.json".to_string(),
            credentials_env_var: "GOOGLE_CREDENTIALS_JSON".to_string(),
            time_zone: "America/Guayaquil".to_string(),
        },
        shop: ShopConfig {
            name: "Seven Barber Club".to_string(),
            address: "Av. Unidad Nacional".to_string(),
            assets_dir: "/nonexistent/sevenbarber-assets".to_string(),
            stylesheet: "css/style.css".to_string(),
            banner_image: "banner.png".to_string(),
            qr_image: "qr_pago.png".to_string(),
            map_image: "map.jpg".to_string(),
            review_images: vec!["review-1.png".to_string()],
            review_url: Some("https://example.com/review".to_string()),
        },
        logging: LoggingConfig::default(),
    })
}

pub fn test_state(calendar: RecordingCalendarService) -> Arc<BookingState> {
    Arc::new(BookingState::new(
        test_config(),
        share_calendar_service(calendar),
    ))
}

/// Same as [`test_state`] but serving assets from `assets_dir`.
pub fn test_state_with_assets(
    calendar: RecordingCalendarService,
    assets_dir: &str,
) -> Arc<BookingState> {
    let mut config = (*test_config()).clone();
    config.shop.assets_dir = assets_dir.to_string();
    Arc::new(BookingState::new(
        Arc::new(config),
        share_calendar_service(calendar),
    ))
}

/// The reference booking: Ana, VIP with Barber A on 2024-06-01 at 10:00.
pub fn ana_form() -> BookingForm {
    BookingForm {
        name: "Ana".to_string(),
        contact: "0991234567".to_string(),
        email: String::new(),
        date: "2024-06-01".to_string(),
        time: "10:00".to_string(),
        service: "VIP".to_string(),
        barber: "Barber A".to_string(),
        note: String::new(),
    }
}

pub fn apprentice_form() -> BookingForm {
    BookingForm {
        service: "Apprentice".to_string(),
        barber: "Apprentice".to_string(),
        time: "16:00".to_string(),
        ..ana_form()
    }
}
