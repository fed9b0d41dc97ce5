// File: crates/sevenbarber_booking/src/api.rs
//! JSON endpoints running the same booking flow as the HTML form.

use crate::catalog::{Barber, Service, TimeSlot, CURRENCY};
use crate::flow::{BookingFlow, BookingStage};
use crate::handlers::BookingState;
use crate::models::BookingForm;
use axum::{extract::State, http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

#[derive(Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ApiBookingRequest {
    #[serde(flatten)]
    pub form: BookingForm,
    /// Customer asserts the QR payment was made. Ignored for the apprentice.
    #[serde(default)]
    pub payment_confirmed: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub stage: BookingStage,
    /// Amount due up front, absent for the apprentice.
    pub price: Option<u32>,
    pub currency: String,
    pub event_id: Option<String>,
    pub message: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ServiceEntry {
    pub name: Service,
    pub price: u32,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BarberEntry {
    pub name: Barber,
    pub requires_payment: bool,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct CatalogResponse {
    pub time_slots: Vec<TimeSlot>,
    pub services: Vec<ServiceEntry>,
    pub barbers: Vec<BarberEntry>,
    pub currency: String,
}

/// Handler listing what can be booked.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/catalog",
    responses(
        (status = 200, description = "Bookable slots, services with prices, and barbers", body = CatalogResponse)
    ),
    tag = "Booking"
))]
pub async fn catalog_handler() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        time_slots: TimeSlot::ALL.to_vec(),
        services: Service::ALL
            .iter()
            .map(|&service| ServiceEntry {
                name: service,
                price: service.price_usd(),
            })
            .collect(),
        barbers: Barber::ALL
            .iter()
            .map(|&barber| BarberEntry {
                name: barber,
                requires_payment: barber.requires_payment(),
            })
            .collect(),
        currency: CURRENCY.to_string(),
    })
}

fn response(flow: &BookingFlow, success: bool, event_id: Option<String>, message: String) -> BookingResponse {
    BookingResponse {
        success,
        stage: flow.stage(),
        price: flow.price(),
        currency: CURRENCY.to_string(),
        event_id,
        message,
    }
}

/// Handler to book an appointment.
///
/// Without `payment_confirmed` a paid booking stops at `awaiting_payment` and
/// reports the price. Posting it again with the flag set creates the event.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book",
    request_body = ApiBookingRequest,
    responses(
        (status = 200, description = "Booking created, or payment required", body = BookingResponse),
        (status = 400, description = "Missing or invalid fields", body = BookingResponse),
        (status = 502, description = "Calendar rejected the event", body = BookingResponse)
    ),
    tag = "Booking"
))]
pub async fn book_handler(
    State(state): State<Arc<BookingState>>,
    Json(payload): Json<ApiBookingRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, Json<BookingResponse>)> {
    let mut flow = BookingFlow::new();

    let stage = flow.submit(&payload.form).map_err(|err| {
        let status = if err.is_validation() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::CONFLICT
        };
        (status, Json(response(&flow, false, None, err.to_string())))
    })?;

    if stage == BookingStage::AwaitingPayment {
        if !payload.payment_confirmed {
            let price = flow.price().unwrap_or_default();
            return Ok(Json(response(
                &flow,
                false,
                None,
                format!("Payment required: {}.00 {}. Scan the QR code, then confirm.", price, CURRENCY),
            )));
        }
        flow.confirm_payment().map_err(|err| {
            (
                StatusCode::CONFLICT,
                Json(response(&flow, false, None, err.to_string())),
            )
        })?;
    }

    // Snapshot before `complete` resets the flow
    let price = flow.price();
    match flow.complete(state.calendar.as_ref(), &state.settings()).await {
        Ok(result) => {
            info!("Booking created via API: {:?}", result.event_id);
            Ok(Json(BookingResponse {
                success: true,
                stage: flow.stage(),
                price,
                currency: CURRENCY.to_string(),
                event_id: result.event_id,
                message: "Booking created successfully.".to_string(),
            }))
        }
        Err(err) => Err((
            StatusCode::BAD_GATEWAY,
            Json(response(&flow, false, None, err.to_string())),
        )),
    }
}
