//! Runtime type definitions for response rendering

use std::fmt;

/// Prefix of a successful probe body
pub const CONNECTED_PREFIX: &str = "Connected to DB! Time is: ";

/// Prefix of a failed probe body
pub const ERROR_PREFIX: &str = "Error connecting to DB: ";

/// Outcome of one connectivity probe
///
/// `Display` renders the plain-text response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResponse {
    /// The database answered the time query
    Connected { time: String },
    /// Resolution, connection or query failed
    Failed { message: String },
}

impl ProbeResponse {
    /// Create a successful response
    pub fn connected(time: impl Into<String>) -> Self {
        Self::Connected { time: time.into() }
    }

    /// Create an error response
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
        }
    }

    /// Whether the probe succeeded
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }
}

impl fmt::Display for ProbeResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeResponse::Connected { time } => write!(f, "{}{}", CONNECTED_PREFIX, time),
            ProbeResponse::Failed { message } => write!(f, "{}{}", ERROR_PREFIX, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connected_body() {
        let response = ProbeResponse::connected("2024-05-01 12:30:00");
        assert!(response.is_connected());
        assert_eq!(
            response.to_string(),
            "Connected to DB! Time is: 2024-05-01 12:30:00"
        );
    }

    #[test]
    fn test_failed_body() {
        let response = ProbeResponse::failed("No VCAP_SERVICES found");
        assert!(!response.is_connected());
        assert_eq!(
            response.to_string(),
            "Error connecting to DB: No VCAP_SERVICES found"
        );
    }
}
