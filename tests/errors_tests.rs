use std::error::Error;

use ipinfod::errors::{IpinfodError, Result};

#[cfg(test)]
mod error_creation_tests {
    use super::*;

    #[test]
    fn test_client_input_error() {
        let error = IpinfodError::client_input("Localhost is not a public IP");

        assert!(matches!(error, IpinfodError::ClientInput(_)));
        assert_eq!(error.code(), "E001");
        assert!(error.to_string().contains("Client Input Error"));
        assert!(error.to_string().contains("not a public IP"));
    }

    #[test]
    fn test_upstream_unavailable_error() {
        let error = IpinfodError::upstream_unavailable("upstream service returned status 500");

        assert!(matches!(error, IpinfodError::UpstreamUnavailable(_)));
        assert_eq!(error.code(), "E002");
        assert!(error.to_string().contains("Upstream Unavailable"));
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_upstream_rejected_error() {
        let error = IpinfodError::upstream_rejected("IP lookup failed: invalid query");

        assert!(matches!(error, IpinfodError::UpstreamRejected(_)));
        assert_eq!(error.code(), "E003");
        assert!(error.to_string().contains("Upstream Rejected"));
        assert!(error.to_string().contains("invalid query"));
    }

    #[test]
    fn test_serialization_error() {
        let error = IpinfodError::serialization("invalid upstream payload");

        assert!(matches!(error, IpinfodError::Serialization(_)));
        assert_eq!(error.code(), "E004");
        assert!(error.to_string().contains("Serialization Error"));
    }
}

#[cfg(test)]
mod error_conversion_tests {
    use super::*;

    #[test]
    fn test_serde_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: IpinfodError = json_error.into();

        assert!(matches!(error, IpinfodError::Serialization(_)));
    }

    #[test]
    fn test_result_alias_works_with_question_mark() {
        fn lookup_target(ip: &str) -> Result<String> {
            if ip.eq_ignore_ascii_case("localhost") {
                return Err(IpinfodError::client_input("Localhost is not a public IP"));
            }
            Ok(ip.to_string())
        }

        fn forward(ip: &str) -> Result<String> {
            let target = lookup_target(ip)?;
            Ok(target)
        }

        assert!(forward("8.8.8.8").is_ok());
        assert!(forward("localhost").is_err());
    }
}

#[cfg(test)]
mod http_status_tests {
    use actix_web::http::StatusCode;

    use super::*;

    #[test]
    fn test_client_side_errors_map_to_400() {
        assert_eq!(
            IpinfodError::client_input("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            IpinfodError::upstream_rejected("x").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_upstream_side_errors_map_to_502() {
        assert_eq!(
            IpinfodError::upstream_unavailable("x").http_status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            IpinfodError::serialization("x").http_status(),
            StatusCode::BAD_GATEWAY
        );
    }
}

#[cfg(test)]
mod error_trait_tests {
    use super::*;

    #[test]
    fn test_implements_std_error() {
        let error = IpinfodError::client_input("boxed");
        let boxed: Box<dyn Error> = Box::new(error);

        assert!(boxed.to_string().contains("boxed"));
        assert!(boxed.source().is_none());
    }

    #[test]
    fn test_message_accessor_returns_detail_only() {
        let error = IpinfodError::upstream_rejected("IP lookup failed: invalid query");

        assert_eq!(error.message(), "IP lookup failed: invalid query");
        assert_eq!(error.error_type(), "Upstream Rejected");
    }
}
