// --- File: crates/sevenbarber_booking/src/templates.rs ---
use crate::assets::asset_url;
use crate::catalog::{Barber, Service, TimeSlot, CURRENCY};
use crate::models::BookingForm;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use sevenbarber_config::ShopConfig;
use tracing::error;

/// Header and menu data shared by every page.
#[derive(Debug, Clone)]
pub struct ShopView {
    pub name: String,
    pub address: String,
    pub banner_src: String,
    pub stylesheet_href: String,
    /// Menu entry to highlight.
    pub active: &'static str,
}

impl ShopView {
    pub fn new(shop: &ShopConfig, active: &'static str) -> Self {
        Self {
            name: shop.name.clone(),
            address: shop.address.clone(),
            banner_src: asset_url(&shop.banner_image),
            stylesheet_href: asset_url(&shop.stylesheet),
            active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

fn options<T: Copy>(
    items: &[T],
    selected: &str,
    value: impl Fn(T) -> &'static str,
    label: impl Fn(T) -> String,
) -> Vec<SelectOption> {
    items
        .iter()
        .map(|&item| SelectOption {
            value: value(item).to_string(),
            label: label(item),
            selected: value(item) == selected.trim(),
        })
        .collect()
}

pub fn time_options(selected: &str) -> Vec<SelectOption> {
    options(&TimeSlot::ALL, selected, TimeSlot::label, |slot| {
        slot.label().to_string()
    })
}

pub fn service_options(selected: &str) -> Vec<SelectOption> {
    options(&Service::ALL, selected, Service::label, |service| {
        format!("{} ({} {})", service.label(), service.price_usd(), CURRENCY)
    })
}

pub fn barber_options(selected: &str) -> Vec<SelectOption> {
    options(&Barber::ALL, selected, Barber::label, |barber| {
        barber.label().to_string()
    })
}

#[derive(Template)]
#[template(path = "book.html")]
pub struct BookTemplate {
    pub shop: ShopView,
    pub form: BookingForm,
    pub warning: Option<String>,
    pub time_options: Vec<SelectOption>,
    pub service_options: Vec<SelectOption>,
    pub barber_options: Vec<SelectOption>,
}

impl BookTemplate {
    pub fn new(shop: ShopView, form: BookingForm, warning: Option<String>) -> Self {
        Self {
            time_options: time_options(&form.time),
            service_options: service_options(&form.service),
            barber_options: barber_options(&form.barber),
            shop,
            form,
            warning,
        }
    }
}

#[derive(Template)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub shop: ShopView,
    pub form: BookingForm,
    pub price: u32,
    pub currency: &'static str,
    pub qr_src: String,
}

#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub shop: ShopView,
    pub summary: String,
    pub starts_at: String,
    pub event_id: Option<String>,
}

/// Shown when the calendar rejected the booking. Re-posts the same fields.
#[derive(Template)]
#[template(path = "retry.html")]
pub struct RetryTemplate {
    pub shop: ShopView,
    pub form: BookingForm,
    pub error: String,
    pub action: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProfileView {
    pub name: String,
    pub tagline: String,
    pub avatar_src: String,
    pub works: Vec<String>,
}

#[derive(Template)]
#[template(path = "portfolio.html")]
pub struct PortfolioTemplate {
    pub shop: ShopView,
    pub profiles: Vec<ProfileView>,
}

#[derive(Template)]
#[template(path = "apprentice.html")]
pub struct ApprenticeTemplate {
    pub shop: ShopView,
    pub price: u32,
    pub currency: &'static str,
    pub hours_from: &'static str,
    pub hours_to: &'static str,
}

#[derive(Template)]
#[template(path = "details.html")]
pub struct DetailsTemplate {
    pub shop: ShopView,
    pub map_src: String,
    pub opens: &'static str,
    pub closes: &'static str,
}

#[derive(Template)]
#[template(path = "reviews.html")]
pub struct ReviewsTemplate {
    pub shop: ShopView,
    pub review_images: Vec<String>,
    pub review_url: Option<String>,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub shop: ShopView,
    pub message: String,
}

pub fn render<T: Template>(status: StatusCode, template: T) -> Response {
    match template.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(err) => {
            error!("Template render error: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render page.".to_string(),
            )
                .into_response()
        }
    }
}
