// File: services/sevenbarber_backend/src/main.rs
mod service_factory;

use axum::Router;
use sevenbarber_booking::assets::{verify_required_assets, ASSETS_ROUTE};
use sevenbarber_booking::routes::routes as booking_routes;
use sevenbarber_booking::BookingState;
use sevenbarber_common::{logging, Context, SevenBarberError};
use sevenbarber_config::load_config;
use service_factory::create_calendar_service;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => Arc::new(config),
        Err(err) => {
            // Logging is configured from this file, so report on stderr
            eprintln!("Failed to load config: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = logging::init_with_level(
        logging::parse_level(config.logging.level.as_deref()),
        config.logging.directory.as_deref(),
    );

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Arc<sevenbarber_config::AppConfig>) -> Result<(), SevenBarberError> {
    // 1. Static assets must be in place before anything is served
    verify_required_assets(&config.shop)?;

    // 2. Calendar client, fatal when the credentials cannot be used
    let calendar = create_calendar_service(&config.gcal).await?;

    // 3. Routes
    let state = Arc::new(BookingState::new(config.clone(), calendar));
    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app: Router = booking_routes(state)
        .nest_service(ASSETS_ROUTE, ServeDir::new(&config.shop.assets_dir));

    #[cfg(feature = "openapi")]
    {
        use sevenbarber_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Seven Barber API",
                version = "0.1.0",
                description = "Seven Barber booking API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    let app = app.layer(TraceLayer::new_for_http());

    // 4. Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);
    info!("Booking page at http://{}/, API at http://{}/api", addr, addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
