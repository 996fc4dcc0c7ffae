pub mod contact;
pub mod content;

use axum::Router;
use axum::routing::{get, post};

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route(
            "/{locale}/api/contact",
            post(contact::submit).get(contact::health),
        )
        .route("/{locale}/api/content/gallery", get(content::gallery))
        .route(
            "/{locale}/api/content/testimonials",
            get(content::testimonials),
        )
        .route("/api/revalidate", post(content::revalidate))
}
