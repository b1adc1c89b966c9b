use super::{ErrorCode, RetreatError};
use std::path::Path;

/// Helper functions for common error scenarios
pub mod common {
    use super::*;

    /// Create a not found error for configuration
    pub fn config_not_found(path: impl AsRef<Path>) -> RetreatError {
        RetreatError::config_with_code(
            ErrorCode::CONFIG_NOT_FOUND,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
    }

    /// Create an error for a retreat file whose extension we cannot read
    pub fn unsupported_format(path: impl AsRef<Path>) -> RetreatError {
        let path = path.as_ref();
        RetreatError::input_with_code(
            ErrorCode::INPUT_UNSUPPORTED_FORMAT,
            "expected a .json, .yaml, .yml or .toml file",
            Some(path.to_path_buf()),
        )
    }

    /// Create an error for a team member index past the end of the team
    pub fn member_not_found(index: usize, team_size: usize) -> RetreatError {
        RetreatError::team_with_code(
            ErrorCode::TEAM_MEMBER_NOT_FOUND,
            format!("no member at index {} (team has {})", index, team_size),
            Some(index),
        )
    }

    /// Create a validation error for a value outside its allowed range
    pub fn out_of_range(field: &str, reason: &str) -> RetreatError {
        RetreatError::validation_with_code(
            ErrorCode::VALIDATION_OUT_OF_RANGE,
            reason.to_string(),
            Some(field.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_error_helpers() {
        let err = common::config_not_found("/etc/retreat-econ/config.toml");
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert!(err.user_message().contains("Configuration problem"));

        let err = common::member_not_found(4, 2);
        assert_eq!(err.code(), ErrorCode::TEAM_MEMBER_NOT_FOUND);
        assert!(err.user_message().contains("Team member #4"));

        let err = common::unsupported_format("retreat.csv");
        assert_eq!(err.code(), ErrorCode::INPUT_UNSUPPORTED_FORMAT);
    }
}
