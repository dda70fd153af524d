//! Application services that definition files bind by name.

pub mod clock;
pub mod hello_world;
pub mod uptime;

pub use clock::{Clock, SystemClock};
pub use hello_world::{EnglishHelloWorld, HelloWorld};
pub use uptime::{StopwatchUptimeService, UptimeService};

use crate::constants::{ENGLISH_HELLO_WORLD_CLASS, STOPWATCH_UPTIME_CLASS, SYSTEM_CLOCK_CLASS};
use crate::registration::TypeCatalog;

/// Enters the domain services into `catalog`.
pub fn register_types(catalog: &mut TypeCatalog) {
    catalog
        .register_class::<dyn Clock, _>(SYSTEM_CLOCK_CLASS, clock::system_clock)
        .register_class::<dyn HelloWorld, _>(ENGLISH_HELLO_WORLD_CLASS, hello_world::english_hello_world)
        .register_class::<dyn UptimeService, _>(STOPWATCH_UPTIME_CLASS, uptime::stopwatch_uptime_service);
}
