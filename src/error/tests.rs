//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty".parse::<u16>().unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_missing_api_url_error() {
        let error = StatsError::MissingApiUrl {
            env_var: "NBA_STATS_API_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API URL not provided"));
        assert!(error_string.contains("NBA_STATS_API_URL"));
    }

    #[test]
    fn test_invalid_url_error_display() {
        let error = StatsError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("not a url"));
        assert!(error_string.contains("relative URL without a base"));
    }

    #[test]
    fn test_config_errors_display() {
        assert_eq!(
            StatsError::InvalidPageSize.to_string(),
            "Page size must be a positive integer"
        );
        assert_eq!(StatsError::NoTeams.to_string(), "No teams configured");
        assert_eq!(
            StatsError::InvalidTeamCode {
                code: "X1".to_string()
            }
            .to_string(),
            "Invalid team code: X1"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = StatsError::InvalidPayload {
            reason: "array element is not an object".to_string(),
        };
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidPayload"));
    }
}
