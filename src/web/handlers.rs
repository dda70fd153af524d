use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::attendees::ResponseRepository;
use crate::domain::clock::greeting_for;
use crate::domain::{Clock, HelloWorld, UptimeService};
use crate::error::{PartyError, ResolveError};
use crate::web::models::RsvpForm;
use crate::web::state::AppState;
use crate::web::templates::{
    AllServicesTemplate, IndexTemplate, ListResponsesTemplate, RsvpFormTemplate, ThanksTemplate,
};

/// Any failure inside a handler. Logged, then answered with a bare 500.
pub struct HandlerError(PartyError);

impl From<PartyError> for HandlerError {
    fn from(e: PartyError) -> Self {
        HandlerError(e)
    }
}

impl From<ResolveError> for HandlerError {
    fn from(e: ResolveError) -> Self {
        HandlerError(e.into())
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}

type HandlerResult = Result<Response, HandlerError>;

pub async fn index(State(state): State<AppState>) -> HandlerResult {
    let scope = state.services.create_scope();
    let clock = scope.resolve::<dyn Clock>()?;
    let hello_world = scope.resolve::<dyn HelloWorld>()?;
    let uptime = scope.resolve::<dyn UptimeService>()?;

    let now = clock.now();
    let template = IndexTemplate {
        greeting: greeting_for(&now),
        time_now: now.format("%Y-%m-%d %H:%M:%S").to_string(),
        hello_world: hello_world.hello_world(),
        uptime_ms: uptime.uptime_ms(),
    };
    Ok(template.into_response())
}

pub async fn rsvp_form() -> Response {
    RsvpFormTemplate {
        form: RsvpForm::default(),
        errors: Vec::new(),
    }
    .into_response()
}

pub async fn submit_rsvp(State(state): State<AppState>, Form(form): Form<RsvpForm>) -> HandlerResult {
    match form.validate() {
        Ok(response) => {
            let repository = state.services.create_scope().resolve::<dyn ResponseRepository>()?;
            info!(id = %response.id, will_attend = response.will_attend, "Accepted RSVP from {}", response.name);
            repository.add_response(response.clone()).await;
            Ok(ThanksTemplate { response }.into_response())
        }
        Err(errors) => {
            info!(errors = errors.len(), "Rejected RSVP submission");
            Ok(RsvpFormTemplate { form, errors }.into_response())
        }
    }
}

pub async fn list_responses(State(state): State<AppState>) -> HandlerResult {
    let repository = state.services.create_scope().resolve::<dyn ResponseRepository>()?;
    let responses = repository.attendees().await;
    Ok(ListResponsesTemplate { responses }.into_response())
}

pub async fn all_services(State(state): State<AppState>) -> Response {
    let bindings = state
        .services
        .descriptors()
        .iter()
        .map(|descriptor| descriptor.summary())
        .collect();
    AllServicesTemplate { bindings }.into_response()
}
