pub mod routes;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::directory::SharedDirectory;

/// Assembles the full application router. Kept out of `main` so tests can
/// drive the service in-process.
pub fn router(directory: SharedDirectory) -> Router {
    Router::new()
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        .route("/activities", get(routes::activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(routes::activities::unregister_handler),
        )
        // Static front end
        .nest_service(
            "/static",
            get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
                CACHE_CONTROL,
                HeaderValue::from_static("no-store"),
            )),
        )
        // Layers
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        // State
        .with_state(directory)
}
