use askama::Template;

use crate::attendees::GuestResponse;
use crate::container::BindingSummary;
use crate::web::models::RsvpForm;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub greeting: &'static str,
    pub time_now: String,
    pub hello_world: String,
    pub uptime_ms: u128,
}

#[derive(Template)]
#[template(path = "rsvp_form.html")]
pub struct RsvpFormTemplate {
    pub form: RsvpForm,
    pub errors: Vec<String>,
}

#[derive(Template)]
#[template(path = "thanks.html")]
pub struct ThanksTemplate {
    pub response: GuestResponse,
}

#[derive(Template)]
#[template(path = "list_responses.html")]
pub struct ListResponsesTemplate {
    pub responses: Vec<GuestResponse>,
}

#[derive(Template)]
#[template(path = "all_services.html")]
pub struct AllServicesTemplate {
    pub bindings: Vec<BindingSummary>,
}
