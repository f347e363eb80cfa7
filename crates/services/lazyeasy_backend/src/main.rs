// File: services/lazyeasy_backend/src/main.rs
use axum::{routing::get, Router};
use http::{header, Method};
use lazyeasy_booking::routes as booking_routes;
use lazyeasy_common::{logging, Context, LazyEasyError};
use lazyeasy_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::{error, info};

async fn run() -> Result<(), LazyEasyError> {
    let config = Arc::new(load_config()?);

    let booking_router = booking_routes(config.clone()).await?;

    let mut app = Router::new()
        .route("/", get(|| async { "LazyEasy booking service is running" }))
        .merge(booking_router);

    #[cfg(feature = "openapi")]
    {
        use lazyeasy_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "LazyEasy Booking API",
                version = "0.1.0",
                description = "Slot availability and appointment booking for the LazyEasy lash studio"
            ),
            components(),
            tags((name = "LazyEasy", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /docs");
        app = app.merge(SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc));
    }

    // The booking page is served from the local build in dev mode
    if cfg!(debug_assertions) {
        info!("Running in development mode, serving the booking page from ./static");
        app = app.fallback_service(ServeDir::new("static"));
    }

    let app = app.layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]),
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Server stopped unexpectedly")
}

#[tokio::main]
async fn main() {
    logging::init();

    if let Err(e) = run().await {
        error!("LazyEasy backend failed: {}", e);
        std::process::exit(1);
    }
}
