// File: crates/sevenbarber_booking/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::api::{ApiBookingRequest, BarberEntry, BookingResponse, CatalogResponse, ServiceEntry};
use crate::catalog::{Barber, Service, TimeSlot};
use crate::flow::BookingStage;
use crate::models::BookingForm;

#[derive(OpenApi)]
#[openapi(
    paths(crate::api::catalog_handler, crate::api::book_handler),
    components(schemas(
        ApiBookingRequest,
        BookingForm,
        BookingResponse,
        BookingStage,
        CatalogResponse,
        ServiceEntry,
        BarberEntry,
        TimeSlot,
        Service,
        Barber
    )),
    tags((name = "Booking", description = "Barbershop appointment booking"))
)]
pub struct BookingApiDoc;
