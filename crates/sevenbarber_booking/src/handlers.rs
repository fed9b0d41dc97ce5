// File: crates/sevenbarber_booking/src/handlers.rs
use crate::assets::asset_url;
use crate::flow::{BookingFlow, BookingSettings, BookingStage};
use crate::models::BookingForm;
use crate::templates::{
    render, BookTemplate, ConfirmationTemplate, PaymentTemplate, RetryTemplate, ShopView,
};
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::Response,
};
use sevenbarber_common::{log_error, HttpStatusCode, SevenBarberError, SharedCalendarService};
use sevenbarber_config::AppConfig;
use std::sync::Arc;
use tracing::info;

pub const BOOK_PATH: &str = "/book";
pub const CONFIRM_PATH: &str = "/book/confirm";

// Shared state needed by the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub calendar: SharedCalendarService,
}

impl BookingState {
    pub fn new(config: Arc<AppConfig>, calendar: SharedCalendarService) -> Self {
        Self { config, calendar }
    }

    pub fn settings(&self) -> BookingSettings {
        BookingSettings {
            calendar_id: self.config.gcal.calendar_id.clone(),
            time_zone: self.config.gcal.time_zone.clone(),
        }
    }

    pub fn shop_view(&self, active: &'static str) -> ShopView {
        ShopView::new(&self.config.shop, active)
    }
}

fn status_of(err: SevenBarberError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Handler for the booking page.
pub async fn book_page_handler(State(state): State<Arc<BookingState>>) -> Response {
    render(
        StatusCode::OK,
        BookTemplate::new(state.shop_view("book"), BookingForm::default(), None),
    )
}

/// Handler for the "Book" button.
///
/// Apprentice bookings are created right away. Everything else goes to the
/// payment screen first.
pub async fn book_submit_handler(
    State(state): State<Arc<BookingState>>,
    Form(form): Form<BookingForm>,
) -> Response {
    let mut flow = BookingFlow::new();

    match flow.submit(&form) {
        Err(err) => {
            let warning = err.to_string();
            render(
                status_of(err.into()),
                BookTemplate::new(state.shop_view("book"), form, Some(warning)),
            )
        }
        Ok(BookingStage::AwaitingPayment) => render(
            StatusCode::OK,
            PaymentTemplate {
                shop: state.shop_view("book"),
                price: flow.price().unwrap_or_default(),
                currency: crate::catalog::CURRENCY,
                qr_src: asset_url(&state.config.shop.qr_image),
                form,
            },
        ),
        Ok(_) => complete_booking(&state, flow, form, BOOK_PATH).await,
    }
}

/// Handler for the "I paid" button.
///
/// The form carries the fields from the payment screen. The flow is replayed
/// up to the payment step and then confirmed.
pub async fn confirm_payment_handler(
    State(state): State<Arc<BookingState>>,
    Form(form): Form<BookingForm>,
) -> Response {
    let mut flow = BookingFlow::new();

    let replayed = flow.submit(&form).and_then(|stage| match stage {
        BookingStage::AwaitingPayment => flow.confirm_payment(),
        other => Ok(other),
    });

    match replayed {
        Ok(_) => complete_booking(&state, flow, form, CONFIRM_PATH).await,
        Err(err) => {
            // Only reachable with a tampered or stale form
            let warning = err.to_string();
            render(
                status_of(err.into()),
                BookTemplate::new(state.shop_view("book"), form, Some(warning)),
            )
        }
    }
}

async fn complete_booking(
    state: &BookingState,
    mut flow: BookingFlow,
    form: BookingForm,
    retry_action: &'static str,
) -> Response {
    let starts_at = flow
        .request()
        .map(|request| request.start().format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default();

    match flow
        .complete(state.calendar.as_ref(), &state.settings())
        .await
    {
        Ok(result) => {
            info!("Booking confirmed for {}", form.name.trim());
            render(
                StatusCode::OK,
                ConfirmationTemplate {
                    shop: state.shop_view("book"),
                    summary: format!("{} - {}", form.service.trim(), form.name.trim()),
                    starts_at,
                    event_id: result.event_id,
                },
            )
        }
        Err(err) => {
            log_error(&err, "Error booking appointment");
            let message = err.to_string();
            render(
                status_of(err.into()),
                RetryTemplate {
                    shop: state.shop_view("book"),
                    form,
                    error: message,
                    action: retry_action,
                },
            )
        }
    }
}
