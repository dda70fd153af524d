use chrono::{DateTime, Local, Timelike};
use std::sync::Arc;

use crate::constants::CLOCK_INTERFACE;
use crate::container::ServiceInterface;

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

impl ServiceInterface for dyn Clock {
    const TYPE_NAME: &'static str = CLOCK_INTERFACE;
}

/// Reads the local wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

/// Greeting for the given time: mornings end at noon.
pub fn greeting_for(time: &DateTime<Local>) -> &'static str {
    if time.hour() < 12 {
        "Good Morning"
    } else {
        "Good Afternoon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_greeting_switches_at_noon() {
        let morning = Local.with_ymd_and_hms(2024, 6, 1, 11, 59, 59).unwrap();
        let noon = Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let night = Local.with_ymd_and_hms(2024, 6, 1, 23, 30, 0).unwrap();

        assert_eq!(greeting_for(&morning), "Good Morning");
        assert_eq!(greeting_for(&noon), "Good Afternoon");
        assert_eq!(greeting_for(&night), "Good Afternoon");
    }
}
