//! Unified error codes for the célula registration core
//!
//! Error codes are shared between the form core, the submission client, and
//! any frontend consuming them. Codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Validation errors
//! - 2xxx: Upload errors
//! - 3xxx: Persistence errors
//! - 4xxx: Permission errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Invalid request
    InvalidRequest = 2,
    /// Invalid format
    InvalidFormat = 3,
    /// Resource not found
    NotFound = 4,

    // ==================== 1xxx: Validation ====================
    /// One or more fields failed validation
    ValidationFailed = 1001,
    /// Required field missing or empty after trim
    RequiredField = 1002,
    /// Text length outside the allowed bounds
    LengthOutOfBounds = 1003,
    /// Numeric value outside the allowed range
    ValueOutOfRange = 1004,
    /// Value is not a member of the configured option list
    NotInCatalog = 1005,
    /// Phone number has the wrong digit count
    InvalidPhone = 1006,
    /// Time is not a valid 24-hour HH:MM string
    InvalidTime = 1007,
    /// URL is not syntactically valid
    InvalidUrl = 1008,

    // ==================== 2xxx: Upload ====================
    /// Photo upload failed
    UploadFailed = 2001,
    /// Image format not supported
    UnsupportedImageFormat = 2002,
    /// Image file exceeds the size limit
    FileTooLarge = 2003,
    /// Image file is empty
    EmptyFile = 2004,

    // ==================== 3xxx: Persistence ====================
    /// Record insert was rejected by the backend
    InsertFailed = 3001,
    /// Persistence service could not be reached
    PersistenceUnavailable = 3002,
    /// Persistence service rejected the credentials
    PersistenceUnauthorized = 3003,

    // ==================== 4xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 4001,
    /// Location permission denied by the user
    LocationPermissionDenied = 4002,
    /// Camera permission denied by the user
    CameraPermissionDenied = 4003,
    /// Gallery permission denied by the user
    GalleryPermissionDenied = 4004,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Serialization error
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Success",
            ErrorCode::Unknown => "Unknown error",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::NotFound => "Resource not found",

            // Validation
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::RequiredField => "Required field missing",
            ErrorCode::LengthOutOfBounds => "Text length out of bounds",
            ErrorCode::ValueOutOfRange => "Value out of range",
            ErrorCode::NotInCatalog => "Value not in option list",
            ErrorCode::InvalidPhone => "Invalid phone number",
            ErrorCode::InvalidTime => "Invalid time",
            ErrorCode::InvalidUrl => "Invalid URL",

            // Upload
            ErrorCode::UploadFailed => "Photo upload failed",
            ErrorCode::UnsupportedImageFormat => "Unsupported image format",
            ErrorCode::FileTooLarge => "File too large",
            ErrorCode::EmptyFile => "Empty file",

            // Persistence
            ErrorCode::InsertFailed => "Record insert failed",
            ErrorCode::PersistenceUnavailable => "Persistence service unavailable",
            ErrorCode::PersistenceUnauthorized => "Persistence credentials rejected",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::LocationPermissionDenied => "Location permission denied",
            ErrorCode::CameraPermissionDenied => "Camera permission denied",
            ErrorCode::GalleryPermissionDenied => "Gallery permission denied",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::SerializationError => "Serialization error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
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
            2 => Ok(ErrorCode::InvalidRequest),
            3 => Ok(ErrorCode::InvalidFormat),
            4 => Ok(ErrorCode::NotFound),

            // Validation
            1001 => Ok(ErrorCode::ValidationFailed),
            1002 => Ok(ErrorCode::RequiredField),
            1003 => Ok(ErrorCode::LengthOutOfBounds),
            1004 => Ok(ErrorCode::ValueOutOfRange),
            1005 => Ok(ErrorCode::NotInCatalog),
            1006 => Ok(ErrorCode::InvalidPhone),
            1007 => Ok(ErrorCode::InvalidTime),
            1008 => Ok(ErrorCode::InvalidUrl),

            // Upload
            2001 => Ok(ErrorCode::UploadFailed),
            2002 => Ok(ErrorCode::UnsupportedImageFormat),
            2003 => Ok(ErrorCode::FileTooLarge),
            2004 => Ok(ErrorCode::EmptyFile),

            // Persistence
            3001 => Ok(ErrorCode::InsertFailed),
            3002 => Ok(ErrorCode::PersistenceUnavailable),
            3003 => Ok(ErrorCode::PersistenceUnauthorized),

            // Permission
            4001 => Ok(ErrorCode::PermissionDenied),
            4002 => Ok(ErrorCode::LocationPermissionDenied),
            4003 => Ok(ErrorCode::CameraPermissionDenied),
            4004 => Ok(ErrorCode::GalleryPermissionDenied),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::SerializationError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
