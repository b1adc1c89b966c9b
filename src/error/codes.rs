/// Error code registry for retreat-econ
///
/// Error codes are organized by category:
/// - 1000-1999: Configuration errors
/// - 3000-3999: Input (retreat record) errors
/// - 5000-5999: Team editing errors
/// - 7000-7999: Validation errors
pub struct ErrorCode;

impl ErrorCode {
    // Configuration errors (1000-1999)
    pub const CONFIG_NOT_FOUND: u16 = 1001;
    pub const CONFIG_INVALID_YAML: u16 = 1002;
    pub const CONFIG_INVALID_TOML: u16 = 1004;
    pub const CONFIG_INVALID_VALUE: u16 = 1005;
    pub const CONFIG_PATH_ERROR: u16 = 1006;
    pub const CONFIG_VALIDATION_FAILED: u16 = 1008;

    // Input errors (3000-3999)
    pub const INPUT_IO_ERROR: u16 = 3001;
    pub const INPUT_NOT_FOUND: u16 = 3004;
    pub const INPUT_UNSUPPORTED_FORMAT: u16 = 3005;
    pub const INPUT_PARSE_ERROR: u16 = 3006;

    // Team editing errors (5000-5999)
    pub const TEAM_MEMBER_NOT_FOUND: u16 = 5001;

    // Validation errors (7000-7999)
    pub const VALIDATION_OUT_OF_RANGE: u16 = 7003;
    pub const VALIDATION_NEGATIVE_AMOUNT: u16 = 7004;
    pub const VALIDATION_UNKNOWN_FEE_TYPE: u16 = 7005;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_ranges() {
        assert!((1000..2000).contains(&ErrorCode::CONFIG_NOT_FOUND));
        assert!((1000..2000).contains(&ErrorCode::CONFIG_VALIDATION_FAILED));
        assert!((3000..4000).contains(&ErrorCode::INPUT_PARSE_ERROR));
        assert!((5000..6000).contains(&ErrorCode::TEAM_MEMBER_NOT_FOUND));
        assert!((7000..8000).contains(&ErrorCode::VALIDATION_UNKNOWN_FEE_TYPE));
    }
}
