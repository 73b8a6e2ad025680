//! HTTP routes.
//!
//! GET pages answer with a JSON page context; wizard POSTs answer with a
//! `303 See Other` redirect and leave the outcome as a flash message.

mod error;
mod pages;
mod records;
mod session;
pub mod state;
mod students;
mod teachers;
mod views;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use session::CallerSession;
pub use state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(students::router())
        .merge(teachers::router())
        .merge(records::router())
        .merge(pages::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
