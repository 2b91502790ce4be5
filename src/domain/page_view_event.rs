//! Page-view event model for asynchronous view tracking.

use chrono::NaiveDate;

/// A page view waiting to be written to the store.
///
/// Handlers stamp the event with the day the view happened and hand it to
/// [`crate::domain::page_view_worker::run_page_view_worker`] over a bounded
/// channel, so the HTTP response never waits on the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewEvent {
    pub restaurant_key: String,
    pub name: String,
    pub viewed_on: NaiveDate,
}

impl PageViewEvent {
    pub fn new(restaurant_key: String, name: String, viewed_on: NaiveDate) -> Self {
        Self {
            restaurant_key,
            name,
            viewed_on,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view_event_creation() {
        let day = NaiveDate::from_ymd_opt(2020, 7, 22).unwrap();
        let event = PageViewEvent::new("4".to_string(), "Wildfire".to_string(), day);

        assert_eq!(event.restaurant_key, "4");
        assert_eq!(event.name, "Wildfire");
        assert_eq!(event.viewed_on, day);
        assert_eq!(event.clone(), event);
    }
}
