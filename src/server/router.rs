use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, completion, dashboard, export, family, member},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Sensus API", description = "Household census data collection"),
    tags(
        (name = "auth", description = "Administrator login and session"),
        (name = "family", description = "Family forms and management"),
        (name = "member", description = "Household members aged 15+"),
        (name = "final", description = "Final survey step"),
        (name = "dashboard", description = "Aggregated statistics"),
        (name = "export", description = "Filtered rows for spreadsheet export")
    )
)]
pub struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::check))
        .routes(routes!(auth::logout))
        .routes(routes!(family::submit_family, family::list_families))
        .routes(routes!(family::get_family_info))
        .routes(routes!(family::update_family))
        .routes(routes!(family::delete_family))
        .routes(routes!(member::submit_member))
        .routes(routes!(completion::submit_final))
        .routes(routes!(dashboard::get_stats))
        .routes(routes!(export::export_excel))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
