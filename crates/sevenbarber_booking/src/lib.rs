// --- File: crates/sevenbarber_booking/src/lib.rs ---
pub mod api;
pub mod assets;
pub mod catalog;
pub mod doc;
pub mod error;
pub mod flow;
#[cfg(test)]
mod flow_proptest;
#[cfg(test)]
mod flow_test;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod routes;
pub mod templates;
#[cfg(test)]
mod test_support;

pub use error::BookingError;
pub use flow::{BookingFlow, BookingSettings, BookingStage};
pub use handlers::BookingState;
pub use models::{BookingForm, BookingRequest};
