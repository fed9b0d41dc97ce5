// File: crates/sevenbarber_booking/src/pages.rs
//! The informational menu pages.

use crate::assets::{asset_url, inline_image};
use crate::catalog::{Service, APPRENTICE_HOURS, CURRENCY, OPENING_HOURS, PORTFOLIO};
use crate::handlers::BookingState;
use crate::templates::{
    render, ApprenticeTemplate, DetailsTemplate, ErrorTemplate, PortfolioTemplate, ProfileView,
    ReviewsTemplate,
};
use axum::{extract::State, http::StatusCode, response::Response};
use sevenbarber_common::log_error;
use std::sync::Arc;

/// Handler for the portfolio page. Avatars are inlined, work photos linked.
pub async fn portfolio_handler(State(state): State<Arc<BookingState>>) -> Response {
    let assets_dir = &state.config.shop.assets_dir;
    let mut profiles = Vec::with_capacity(PORTFOLIO.len());

    for entry in PORTFOLIO {
        let avatar_src = match inline_image(assets_dir, entry.avatar).await {
            Ok(src) => src,
            Err(err) => {
                log_error(&err, "Portfolio unavailable");
                return render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorTemplate {
                        shop: state.shop_view("portfolio"),
                        message: "The portfolio is not available right now.".to_string(),
                    },
                );
            }
        };

        profiles.push(ProfileView {
            name: entry.barber.label().to_string(),
            tagline: entry.tagline.to_string(),
            avatar_src,
            works: entry.works.iter().map(|work| asset_url(work)).collect(),
        });
    }

    render(
        StatusCode::OK,
        PortfolioTemplate {
            shop: state.shop_view("portfolio"),
            profiles,
        },
    )
}

pub async fn apprentice_handler(State(state): State<Arc<BookingState>>) -> Response {
    render(
        StatusCode::OK,
        ApprenticeTemplate {
            shop: state.shop_view("apprentice"),
            price: Service::Apprentice.price_usd(),
            currency: CURRENCY,
            hours_from: APPRENTICE_HOURS.0,
            hours_to: APPRENTICE_HOURS.1,
        },
    )
}

pub async fn details_handler(State(state): State<Arc<BookingState>>) -> Response {
    render(
        StatusCode::OK,
        DetailsTemplate {
            shop: state.shop_view("details"),
            map_src: asset_url(&state.config.shop.map_image),
            opens: OPENING_HOURS.0,
            closes: OPENING_HOURS.1,
        },
    )
}

pub async fn reviews_handler(State(state): State<Arc<BookingState>>) -> Response {
    let shop = &state.config.shop;
    render(
        StatusCode::OK,
        ReviewsTemplate {
            shop: state.shop_view("reviews"),
            review_images: shop.review_images.iter().map(|image| asset_url(image)).collect(),
            review_url: shop.review_url.clone(),
        },
    )
}
