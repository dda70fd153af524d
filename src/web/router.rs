use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::web::handlers::{all_services, index, list_responses, rsvp_form, submit_rsvp};
use crate::web::state::AppState;

/// Pages reachable both at the root and under `/Home`.
fn home_pages() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/Index", get(index))
        .route("/RsvpForm", get(rsvp_form).post(submit_rsvp))
        .route("/ListResponses", get(list_responses))
}

pub fn app_router(state: AppState) -> Router {
    let mut router = Router::new()
        .merge(home_pages())
        .nest("/Home", home_pages());

    if !state.environment.is_production() {
        router = router.route("/allservices", get(all_services));
    }

    router
        .nest_service("/static", ServeDir::new("static"))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
