//! Unified error codes for the Mesa back office
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 4xxx: Reservation errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so that the dashboard
/// frontend can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,

    // ==================== 4xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 4001,
    /// Reservation was cancelled
    ReservationCancelled = 4002,
    /// Guests are already seated
    ReservationAlreadySeated = 4003,
    /// Guests have not been seated yet
    ReservationNotSeated = 4004,
    /// Guests already left
    ReservationAlreadyLeft = 4005,
    /// Reservation is marked as no-show
    ReservationNoShow = 4006,
    /// Reservation is completed
    ReservationCompleted = 4007,
    /// Action is not allowed in the current phase
    ReservationActionNotAllowed = 4008,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,
    /// No tables configured
    NoTablesConfigured = 7002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Network error talking to a collaborator
    NetworkError = 9003,
    /// Collaborator timed out
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Appointments store is unavailable
    StoreUnavailable = 9006,
    /// Appointments store returned an unexpected payload
    StoreResponseInvalid = 9007,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::RoleRequired => "Specific role is required",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationCancelled => "Reservation has been cancelled",
            ErrorCode::ReservationAlreadySeated => "Guests are already seated",
            ErrorCode::ReservationNotSeated => "Guests have not been seated yet",
            ErrorCode::ReservationAlreadyLeft => "Guests have already left",
            ErrorCode::ReservationNoShow => "Reservation is marked as no-show",
            ErrorCode::ReservationCompleted => "Reservation is already completed",
            ErrorCode::ReservationActionNotAllowed => {
                "Action is not allowed for this reservation"
            }

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::NoTablesConfigured => "No tables configured",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::StoreUnavailable => "Appointments store is unavailable",
            ErrorCode::StoreResponseInvalid => "Appointments store returned an invalid response",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::RoleRequired),

            // Reservation
            4001 => Ok(ErrorCode::ReservationNotFound),
            4002 => Ok(ErrorCode::ReservationCancelled),
            4003 => Ok(ErrorCode::ReservationAlreadySeated),
            4004 => Ok(ErrorCode::ReservationNotSeated),
            4005 => Ok(ErrorCode::ReservationAlreadyLeft),
            4006 => Ok(ErrorCode::ReservationNoShow),
            4007 => Ok(ErrorCode::ReservationCompleted),
            4008 => Ok(ErrorCode::ReservationActionNotAllowed),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),
            7002 => Ok(ErrorCode::NoTablesConfigured),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9006 => Ok(ErrorCode::StoreUnavailable),
            9007 => Ok(ErrorCode::StoreResponseInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
