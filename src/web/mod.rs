//! HTTP surface: greeting page, RSVP form, attendee list and, outside
//! production, a dump of the registered services.

pub mod handlers;
pub mod models;
pub mod router;
pub mod server;
pub mod state;
pub mod templates;

pub use router::app_router;
pub use server::start_server;
pub use state::AppState;
