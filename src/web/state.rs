use crate::config::Environment;
use crate::container::ServiceProvider;

#[derive(Clone)]
pub struct AppState {
    pub services: ServiceProvider,
    pub environment: Environment,
}
