use std::sync::Arc;

use academics_api_types::{DepartmentInfoPage, HealthCheckResponse};
use academics_core::domain::DepartmentPage;
use axum::{Json, Router, routing::get};

use super::AppState;

pub fn router() -> Router<Arc<AppState>> {
    let router = Router::new().route("/health", get(health));
    DepartmentPage::ALL.into_iter().fold(router, |router, page| {
        router.route(
            &page.path(),
            get(move || async move {
                Json(DepartmentInfoPage {
                    slug: page.slug().to_string(),
                    title: page.title().to_string(),
                })
            }),
        )
    })
}

async fn health() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse::ok())
}
