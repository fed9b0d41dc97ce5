// --- File: crates/sevenbarber_booking/src/routes.rs ---

use crate::api::{book_handler, catalog_handler};
use crate::handlers::{
    book_page_handler, book_submit_handler, confirm_payment_handler, BookingState, BOOK_PATH,
    CONFIRM_PATH,
};
use crate::pages::{apprentice_handler, details_handler, portfolio_handler, reviews_handler};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// JSON routes, nested under `/api`.
fn api_routes() -> Router<Arc<BookingState>> {
    Router::new()
        .route("/catalog", get(catalog_handler))
        .route("/book", post(book_handler))
}

/// Creates a router containing every page and endpoint of the booking site.
pub fn routes(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/", get(book_page_handler))
        .route(BOOK_PATH, get(book_page_handler).post(book_submit_handler))
        .route(CONFIRM_PATH, post(confirm_payment_handler))
        .route("/portfolio", get(portfolio_handler))
        .route("/apprentice", get(apprentice_handler))
        .route("/details", get(details_handler))
        .route("/reviews", get(reviews_handler))
        .route("/health", get(|| async { "OK" }))
        .nest("/api", api_routes())
        .with_state(state)
}
