//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Validation errors
/// - 2xxx: Upload errors
/// - 3xxx: Persistence errors
/// - 4xxx: Permission errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Validation errors (1xxx) — local and recoverable, no network involved
    Validation,
    /// Upload errors (2xxx) — photo step only, other fields unaffected
    Upload,
    /// Persistence errors (3xxx) — remote insert, record retained for retry
    Persistence,
    /// Permission errors (4xxx) — environment denied an operation
    Permission,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Validation,
            2000..3000 => Self::Upload,
            3000..4000 => Self::Persistence,
            4000..5000 => Self::Permission,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Validation => "validation",
            Self::Upload => "upload",
            Self::Persistence => "persistence",
            Self::Permission => "permission",
            Self::System => "system",
        }
    }

    /// Whether errors in this category return control to the user for
    /// correction or retry. Every category in this system does.
    pub const fn is_recoverable(&self) -> bool {
        true
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Validation);
        assert_eq!(ErrorCategory::from_code(1999), ErrorCategory::Validation);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Upload);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Persistence);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::ValidationFailed.category(),
            ErrorCategory::Validation
        );
        assert_eq!(ErrorCode::UploadFailed.category(), ErrorCategory::Upload);
        assert_eq!(
            ErrorCode::InsertFailed.category(),
            ErrorCategory::Persistence
        );
        assert_eq!(
            ErrorCode::LocationPermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::General.name(), "general");
        assert_eq!(ErrorCategory::Validation.name(), "validation");
        assert_eq!(ErrorCategory::Upload.name(), "upload");
        assert_eq!(ErrorCategory::Persistence.name(), "persistence");
        assert_eq!(ErrorCategory::Permission.name(), "permission");
        assert_eq!(ErrorCategory::System.name(), "system");
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Persistence).unwrap();
        assert_eq!(json, "\"persistence\"");

        let category: ErrorCategory = serde_json::from_str("\"upload\"").unwrap();
        assert_eq!(category, ErrorCategory::Upload);
    }
}
