use std::time::Duration;

/// Where the one outstanding request currently stands. The trigger control
/// is disabled while `InFlight`; `Completed` and `Idle` both permit a new
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    InFlight,
    Completed,
}

impl RequestStatus {
    pub fn allows_new_request(&self) -> bool {
        !matches!(self, RequestStatus::InFlight)
    }
}

/// A successful round trip to the backend: the recognized text plus the
/// wall-clock duration of the request, measured client-side.
#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub text: String,
    pub elapsed: Duration,
}

/// Elapsed seconds with exactly two decimal places, e.g. "1.23".
pub fn format_elapsed_seconds(elapsed: Duration) -> String {
    format!("{:.2}", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_and_completed_allow_a_new_request() {
        assert!(RequestStatus::Idle.allows_new_request());
        assert!(RequestStatus::Completed.allows_new_request());
    }

    #[test]
    fn test_in_flight_blocks_a_new_request() {
        assert!(!RequestStatus::InFlight.allows_new_request());
    }

    #[test]
    fn test_format_elapsed_rounds_to_two_decimals() {
        assert_eq!(format_elapsed_seconds(Duration::from_millis(1234)), "1.23");
        assert_eq!(format_elapsed_seconds(Duration::from_millis(1235)), "1.24");
    }

    #[test]
    fn test_format_elapsed_pads_to_two_decimals() {
        assert_eq!(format_elapsed_seconds(Duration::ZERO), "0.00");
        assert_eq!(format_elapsed_seconds(Duration::from_secs(3)), "3.00");
        assert_eq!(format_elapsed_seconds(Duration::from_millis(100)), "0.10");
    }

    #[test]
    fn test_format_elapsed_handles_long_requests() {
        assert_eq!(format_elapsed_seconds(Duration::from_secs(61)), "61.00");
    }
}
