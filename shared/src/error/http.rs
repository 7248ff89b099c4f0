//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::ReservationNotFound | Self::TableNotFound => {
                StatusCode::NOT_FOUND
            }

            // 409 Conflict (phase-dependent action rejected)
            Self::AlreadyExists
            | Self::ReservationCancelled
            | Self::ReservationAlreadySeated
            | Self::ReservationNotSeated
            | Self::ReservationAlreadyLeft
            | Self::ReservationNoShow
            | Self::ReservationCompleted
            | Self::ReservationActionNotAllowed => StatusCode::CONFLICT,

            // 403 Forbidden
            Self::PermissionDenied | Self::RoleRequired => StatusCode::FORBIDDEN,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError | Self::StoreUnavailable => {
                StatusCode::SERVICE_UNAVAILABLE
            }

            // 502 Bad Gateway
            Self::StoreResponseInvalid => StatusCode::BAD_GATEWAY,

            // 500 Internal Server Error
            Self::InternalError | Self::ConfigError | Self::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ReservationNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ErrorCode::TableNotFound.http_status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_phase_conflicts() {
        assert_eq!(
            ErrorCode::ReservationAlreadySeated.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::ReservationActionNotAllowed.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_store_failures() {
        assert_eq!(
            ErrorCode::StoreUnavailable.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::TimeoutError.http_status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ErrorCode::StoreResponseInvalid.http_status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_validation_defaults_to_bad_request() {
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::InvalidFormat.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::PermissionDenied.http_status(), StatusCode::FORBIDDEN);
    }
}
