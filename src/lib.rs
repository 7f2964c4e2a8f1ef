use std::sync::Arc;

use poem::{
    endpoint::StaticFilesEndpoint,
    error::MethodNotAllowedError,
    http::StatusCode,
    middleware::{AddData, AddDataEndpoint, Cors, CorsEndpoint},
    web::Json,
    EndpointExt, IntoEndpoint, IntoResponse, Route,
};
use poem_openapi::OpenApiService;
use repository::profile::ProfileStorage;
use route::profile::ApiProfile;
use schema::common::StatusResponse;
use settings::Config;

pub mod cli;
pub mod core;
pub mod factory;
pub mod model;
pub mod repository;
pub mod route;
pub mod schema;
pub mod settings;

pub struct AppState {
    pub storage: Arc<dyn ProfileStorage>,
    /// largest accepted profile submission, in bytes
    pub max_body_size: usize,
}

pub type AppEndpoint = CorsEndpoint<AddDataEndpoint<Route, Arc<AppState>>>;

pub fn init_openapi_route(app_state: Arc<AppState>, config: &Config) -> AppEndpoint {
    let prefix = config.prefix.clone().unwrap_or("/api".to_string());
    let openapi_route =
        OpenApiService::new(ApiProfile, "Profile", "1.0").server(prefix.clone());
    let openapi_json_endpoint = openapi_route.spec_endpoint();
    let ui = openapi_route.swagger_ui();
    let api = openapi_route.into_endpoint().catch_error(|_: MethodNotAllowedError| async move {
        Json(StatusResponse::default()).with_status(StatusCode::METHOD_NOT_ALLOWED)
    });
    Route::new()
        .nest(prefix, api)
        .nest("/docs", ui)
        .at("/openapi.json", openapi_json_endpoint)
        .nest(
            "/",
            StaticFilesEndpoint::new(&config.public_dir).index_file("index.html"),
        )
        .with(AddData::new(app_state))
        .with(Cors::new())
}
